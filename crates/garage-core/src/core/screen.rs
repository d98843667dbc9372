//! Record-list screens.
//!
//! A [`ListScreen`] owns the full collection of one record type and its
//! current filter query. It feeds the filtered slice to a [`RecordTable`] and
//! collects the [`ScreenEvent`]s emitted by row action handlers.

use std::fmt;

use tokio::sync::mpsc;

use crate::core::filter::FilterSet;
use crate::core::record::{Record, RecordId};
use crate::core::ui_state::UiStore;
use crate::display::action_menu::RowAction;
use crate::display::record_table::{Column, MenuView, RecordTable, TableView};
use crate::error::{AppError, CliError};

/// What a row action asks the screen's owner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ViewDetails,
    AddService,
    Edit,
    AddStock,
    ServiceDetail,
    StartService,
    MarkComplete,
    ExportPdf,
    Cancel,
    Delete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::ViewDetails => "view-details",
            ActionKind::AddService => "add-service",
            ActionKind::Edit => "edit",
            ActionKind::AddStock => "add-stock",
            ActionKind::ServiceDetail => "service-detail",
            ActionKind::StartService => "start-service",
            ActionKind::MarkComplete => "mark-complete",
            ActionKind::ExportPdf => "export-pdf",
            ActionKind::Cancel => "cancel",
            ActionKind::Delete => "delete",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenEvent {
    pub action: ActionKind,
    pub record: RecordId,
}

/// Sending half handed to row action handlers
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<ScreenEvent>,
}

impl EventSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ScreenEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, action: ActionKind, record: RecordId) {
        if let Err(e) = self.tx.send(ScreenEvent { action, record }) {
            log::debug!("screen event dropped, receiver gone: {:?}", e.0);
        }
    }

    /// Handler that reports `action` for the record it is invoked on
    pub fn handler<T: Record + 'static>(
        &self,
        action: ActionKind,
    ) -> impl Fn(&T) + 'static + use<T> {
        let sink = self.clone();
        move |record: &T| sink.send(action, record.record_id())
    }
}

/// Filter parameters of one screen
pub trait RecordQuery<T>: Default + Clone + PartialEq {
    fn filters(&self) -> FilterSet<'_, T>;
}

/// A record type that has its own list screen
pub trait ScreenRecord: Record + Clone + 'static {
    type Query: RecordQuery<Self>;

    const TITLE: &'static str;

    fn columns() -> Vec<Column<Self>>;

    fn actions(sink: &EventSink) -> Vec<RowAction<Self>>;

    /// Key/value pairs shown in the detail panel
    fn detail_fields(&self) -> Vec<(String, String)>;
}

pub struct ListScreen<T: ScreenRecord> {
    records: Vec<T>,
    query: T::Query,
    filtered: Vec<T>,
    table: RecordTable<T>,
    events: mpsc::UnboundedReceiver<ScreenEvent>,
    selected: Option<RecordId>,
    ui: UiStore,
}

impl<T: ScreenRecord> ListScreen<T> {
    pub fn new(ui: UiStore) -> Self {
        let (sink, events) = EventSink::channel();
        Self {
            records: Vec::new(),
            query: T::Query::default(),
            filtered: Vec::new(),
            table: RecordTable::new(T::columns()).with_actions(T::actions(&sink)),
            events,
            selected: None,
            ui,
        }
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Result<Self, AppError> {
        self.table = self.table.with_items_per_page(items_per_page)?;
        Ok(self)
    }

    pub fn title(&self) -> &'static str {
        T::TITLE
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Records passing the current query, in source order
    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    pub fn query(&self) -> &T::Query {
        &self.query
    }

    pub fn table(&self) -> &RecordTable<T> {
        &self.table
    }

    /// Replace the collection, keeping the current query
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.refilter();
    }

    /// Apply new filter parameters; any change sends the table back to page 1
    pub fn set_query(&mut self, query: T::Query) {
        if query == self.query {
            return;
        }
        self.query = query;
        self.refilter();
        self.table.reset_page();
    }

    pub fn update_query(&mut self, update: impl FnOnce(&mut T::Query)) {
        let mut query = self.query.clone();
        update(&mut query);
        self.set_query(query);
    }

    fn refilter(&mut self) {
        self.filtered = self.query.filters().apply(&self.records);
        self.table.sync(&self.filtered);
        if let Some(id) = &self.selected
            && !self.records.iter().any(|r| r.record_id() == *id)
        {
            self.close_detail();
        }
    }

    pub fn view(&self) -> TableView {
        self.table.view(&self.filtered)
    }

    pub fn open_menu(&self) -> Option<MenuView> {
        self.view().menu
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.table.go_to_page(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.table.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.table.previous_page()
    }

    pub fn toggle_menu(&mut self, id: &RecordId) -> bool {
        self.table.toggle_menu(id)
    }

    pub fn dismiss_menu(&mut self) {
        self.table.dismiss_menu();
    }

    /// Invoke the action labelled `label` on the row whose menu is open and
    /// return the events its handler emitted.
    pub fn invoke(&mut self, label: &str) -> Result<Vec<ScreenEvent>, AppError> {
        if self.table.menu().open_id().is_none() {
            return Err(CliError::NoOpenMenu.into());
        }
        if !self.table.invoke(&self.filtered, label) {
            return Err(CliError::UnknownAction {
                label: label.to_string(),
            }
            .into());
        }

        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            if event.action == ActionKind::ViewDetails {
                self.selected = Some(event.record.clone());
                self.ui.set_sidebar_open(true);
            }
            events.push(event);
        }
        Ok(events)
    }

    pub fn selected_record(&self) -> Option<&T> {
        let id = self.selected.as_ref()?;
        self.records.iter().find(|r| r.record_id() == *id)
    }

    pub fn detail(&self) -> Option<Vec<(String, String)>> {
        self.selected_record().map(ScreenRecord::detail_fields)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
        self.ui.set_sidebar_open(false);
    }
}
