//! Generic record table.
//!
//! Combines column descriptors, the pagination cursor and the row action menu
//! into a view model for any collection of [`Record`]s. The table never owns
//! or mutates the records; the owning screen passes them in on every call.

use crate::core::record::{Record, RecordId};
use crate::display::action_menu::{ActionMenu, RowAction};
use crate::display::pagination::{PageLayout, Pagination, paginate};
use crate::error::AppError;

type RenderFn<T> = Box<dyn Fn(&T) -> String>;

/// How one record field is shown as a column
pub struct Column<T> {
    pub header: String,
    /// Serialized field name looked up when no render function is set
    pub key: String,
    pub width: Option<usize>,
    render: Option<RenderFn<T>>,
}

impl<T: Record> Column<T> {
    pub fn new(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: key.into(),
            width: None,
            render: None,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Custom cell rendering; takes precedence over the raw field
    pub fn with_render(mut self, render: impl Fn(&T) -> String + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    fn cell(&self, record: &T, fields: &serde_json::Value) -> String {
        match &self.render {
            Some(render) => render(record),
            None => format_field(fields.get(&self.key).unwrap_or(&serde_json::Value::Null)),
        }
    }
}

/// Stringify a raw field value
pub fn format_field(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            if arr.is_empty() {
                "[]".to_string()
            } else {
                format!("[{} items]", arr.len())
            }
        }
        serde_json::Value::Object(obj) => {
            if obj.is_empty() {
                "{}".to_string()
            } else {
                format!("{{{} items}}", obj.len())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub label: String,
    pub width: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RecordId,
    pub cells: Vec<String>,
    pub menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemView {
    pub icon: String,
    pub label: String,
    pub danger: bool,
}

/// The open row menu, listing the actions offered for that record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub record_id: RecordId,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    /// Count shown next to the pager ("N records")
    pub total_count: usize,
    pub layout: PageLayout,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Everything needed to draw one page of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
    pub has_actions: bool,
    pub menu: Option<MenuView>,
    pub pager: PagerView,
}

/// Paginated, action-driven table over borrowed records
pub struct RecordTable<T> {
    columns: Vec<Column<T>>,
    actions: Vec<RowAction<T>>,
    pagination: Pagination,
    menu: ActionMenu,
    total_count_override: Option<usize>,
    synced_ids: Vec<RecordId>,
}

impl<T: Record> RecordTable<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            actions: Vec::new(),
            pagination: Pagination::default(),
            menu: ActionMenu::new(),
            total_count_override: None,
            synced_ids: Vec::new(),
        }
    }

    pub fn with_actions(mut self, actions: Vec<RowAction<T>>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Result<Self, AppError> {
        let total = self.pagination.total_items();
        self.pagination = Pagination::new(items_per_page, total)?;
        Ok(self)
    }

    /// Count shown in the pager instead of the collection length
    pub fn with_total_count(mut self, total_count: Option<usize>) -> Self {
        self.total_count_override = total_count;
        self
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn actions(&self) -> &[RowAction<T>] {
        &self.actions
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn menu(&self) -> &ActionMenu {
        &self.menu
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Take in the collection the screen is about to display.
    ///
    /// A collection whose ids differ from the last synced one sends the cursor
    /// back to page 1 and closes any open menu; otherwise the cursor is only
    /// clamped to the (possibly smaller) page count.
    pub fn sync(&mut self, records: &[T]) {
        let changed = self.synced_ids.len() != records.len()
            || self
                .synced_ids
                .iter()
                .zip(records)
                .any(|(seen, record)| *seen != record.record_id());

        if changed {
            self.synced_ids = records.iter().map(Record::record_id).collect();
            if self.pagination.current_page() != 1 {
                log::debug!("record set changed, resetting table to page 1");
            }
            self.pagination.reset();
            self.menu.dismiss();
        }
        self.pagination.set_total_items(records.len());
    }

    /// Explicit reset, used when a filter parameter changes
    pub fn reset_page(&mut self) {
        self.pagination.reset();
        self.menu.dismiss();
    }

    /// Page change request from the pager; closes any open menu
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.menu.dismiss();
        self.pagination.go_to(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.menu.dismiss();
        self.pagination.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.menu.dismiss();
        self.pagination.previous_page()
    }

    /// Menu trigger clicked on the row of `id`
    pub fn toggle_menu(&mut self, id: &RecordId) -> bool {
        if self.actions.is_empty() {
            return false;
        }
        self.menu.toggle(id)
    }

    pub fn dismiss_menu(&mut self) {
        self.menu.dismiss();
    }

    /// Invoke the action labelled `label` (case-insensitive) on the record
    /// whose menu is open. Returns `false` when no menu is open, the record is
    /// not in `records`, or no visible action matches; the menu is closed
    /// whenever an action ran.
    pub fn invoke(&mut self, records: &[T], label: &str) -> bool {
        let Some(open_id) = self.menu.open_id().cloned() else {
            return false;
        };
        let Some(record) = records.iter().find(|r| r.record_id() == open_id) else {
            return false;
        };
        let Some(action) = self
            .actions
            .iter()
            .find(|a| a.label.eq_ignore_ascii_case(label) && a.is_visible_for(record))
        else {
            return false;
        };

        self.menu.invoke(action, record);
        true
    }

    /// Lay out the current page of `records` in source order
    pub fn view(&self, records: &[T]) -> TableView {
        let layout = paginate(
            records.len(),
            self.pagination.items_per_page(),
            self.pagination.current_page(),
        );

        let rows: Vec<RowView> = layout
            .slice(records)
            .iter()
            .map(|record| {
                let fields = record.to_fields();
                let id = record.record_id();
                RowView {
                    cells: self
                        .columns
                        .iter()
                        .map(|column| column.cell(record, &fields))
                        .collect(),
                    menu_open: self.menu.is_open_for(&id),
                    id,
                }
            })
            .collect();

        let menu = self.menu.open_id().and_then(|open_id| {
            layout
                .slice(records)
                .iter()
                .find(|r| r.record_id() == *open_id)
                .map(|record| MenuView {
                    record_id: open_id.clone(),
                    items: self
                        .actions
                        .iter()
                        .filter(|a| a.is_visible_for(record))
                        .map(|a| MenuItemView {
                            icon: a.icon.clone(),
                            label: a.label.clone(),
                            danger: a.is_danger(),
                        })
                        .collect(),
                })
        });

        TableView {
            headers: self
                .columns
                .iter()
                .map(|c| HeaderView {
                    label: c.header.clone(),
                    width: c.width,
                })
                .collect(),
            rows,
            has_actions: !self.actions.is_empty(),
            menu,
            pager: PagerView {
                total_count: self.total_count_override.unwrap_or(records.len()),
                previous_enabled: layout.has_previous(),
                next_enabled: layout.has_next(),
                layout,
            },
        }
    }
}
