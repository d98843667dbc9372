use serde::{Deserialize, Serialize};

use crate::core::filter::{FilterSet, TextSearch};
use crate::core::record::{Record, RecordId};
use crate::core::screen::{ActionKind, EventSink, RecordQuery, ScreenRecord};
use crate::display::action_menu::RowAction;
use crate::display::record_table::Column;
use crate::domain::{ContactInfo, ServiceStatus, format_money};
use crate::error::ServiceError;

/// One line of work performed on a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub date: String,
    pub operation: String,
    pub technician: String,
    pub cost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    pub customer: ContactInfo,
    #[serde(default)]
    pub operations: Vec<Operation>,
    pub total_cost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicket {
    pub id: String,
    pub plate: String,
    pub customer_name: String,
    pub model: String,
    pub complaint: String,
    pub status: ServiceStatus,
    pub date: String,
    pub details: ServiceDetails,
}

impl ServiceTicket {
    /// Move Waiting to In Progress, or In Progress to Completed
    pub fn advance(&mut self) -> Result<ServiceStatus, ServiceError> {
        self.status = match self.status {
            ServiceStatus::Waiting => ServiceStatus::InProgress,
            ServiceStatus::InProgress => ServiceStatus::Completed,
            ServiceStatus::Completed => {
                return Err(ServiceError::Validation {
                    field: "status".to_string(),
                    message: format!("service {} is already completed", self.id),
                });
            }
        };
        Ok(self.status)
    }

    pub fn is_open(&self) -> bool {
        self.status != ServiceStatus::Completed
    }
}

impl Record for ServiceTicket {
    fn record_id(&self) -> RecordId {
        self.id.as_str().into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceQuery {
    pub search: String,
    pub status: Option<ServiceStatus>,
}

impl RecordQuery<ServiceTicket> for ServiceQuery {
    fn filters(&self) -> FilterSet<'_, ServiceTicket> {
        let search = TextSearch::new(&self.search);
        FilterSet::new()
            .with(move |s: &ServiceTicket| {
                search.matches_any([
                    s.plate.as_str(),
                    s.customer_name.as_str(),
                    s.model.as_str(),
                    s.complaint.as_str(),
                ])
            })
            .with_optional(self.status, |status, s: &ServiceTicket| s.status == *status)
    }
}

impl ScreenRecord for ServiceTicket {
    type Query = ServiceQuery;

    const TITLE: &'static str = "Services";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Plate", "plate"),
            Column::new("Customer", "customerName"),
            Column::new("Model", "model"),
            Column::new("Complaint", "complaint").with_width(32),
            Column::new("Status", "status")
                .with_render(|s: &ServiceTicket| format!("{} {}", s.status.icon(), s.status)),
            Column::new("Date", "date"),
        ]
    }

    fn actions(sink: &EventSink) -> Vec<RowAction<Self>> {
        vec![
            RowAction::new("📋", "Service History", sink.handler(ActionKind::ViewDetails)),
            RowAction::new("🔍", "Service Detail", sink.handler(ActionKind::ServiceDetail)),
            RowAction::new("▶️", "Start Service", sink.handler(ActionKind::StartService))
                .visible_when(|s: &ServiceTicket| s.status == ServiceStatus::Waiting),
            RowAction::new("✔️", "Complete Service", sink.handler(ActionKind::MarkComplete))
                .visible_when(|s: &ServiceTicket| s.status == ServiceStatus::InProgress),
            RowAction::new("📄", "PDF Report", sink.handler(ActionKind::ExportPdf)),
            RowAction::new("❌", "Cancel", sink.handler(ActionKind::Cancel))
                .danger()
                .visible_when(ServiceTicket::is_open),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("Plate".to_string(), self.plate.clone()),
            ("Customer".to_string(), self.customer_name.clone()),
            ("Phone".to_string(), self.details.customer.phone.clone()),
            ("Email".to_string(), self.details.customer.email.clone()),
            ("Model".to_string(), self.model.clone()),
            ("Complaint".to_string(), self.complaint.clone()),
            ("Status".to_string(), self.status.to_string()),
            ("Date".to_string(), self.date.clone()),
        ];
        for op in &self.details.operations {
            fields.push((
                format!("{} {}", op.date, op.operation),
                format!("{} · {}", op.technician, format_money(op.cost)),
            ));
        }
        fields.push(("Total".to_string(), format_money(self.details.total_cost)));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::ListScreen;
    use crate::core::ui_state::UiStore;
    use crate::domain::sample;

    #[test]
    fn test_status_filter_and_search_combine() {
        let services = sample::services();
        let query = ServiceQuery {
            search: "fren".to_string(),
            status: Some(ServiceStatus::Waiting),
        };
        let kept = query.filters().apply(&services);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].plate, "06 XYZ 456");

        let query = ServiceQuery {
            search: "fren".to_string(),
            status: Some(ServiceStatus::Completed),
        };
        assert!(query.filters().apply(&services).is_empty());
    }

    #[test]
    fn test_advance_through_lifecycle() {
        let mut ticket = sample::services()[1].clone();
        assert_eq!(ticket.advance().ok(), Some(ServiceStatus::InProgress));
        assert_eq!(ticket.advance().ok(), Some(ServiceStatus::Completed));
        assert!(ticket.advance().is_err());
        assert!(!ticket.is_open());
    }

    #[test]
    fn test_menu_offers_status_dependent_actions() {
        let mut screen = ListScreen::<ServiceTicket>::new(UiStore::default());
        screen.set_records(sample::services());

        let labels = |screen: &mut ListScreen<ServiceTicket>, id: &str| {
            screen.toggle_menu(&RecordId::from(id));
            let labels: Vec<String> = screen
                .open_menu()
                .map(|m| m.items.into_iter().map(|i| i.label).collect())
                .unwrap_or_default();
            screen.dismiss_menu();
            labels
        };

        let waiting = labels(&mut screen, "2");
        assert!(waiting.contains(&"Start Service".to_string()));
        assert!(!waiting.contains(&"Complete Service".to_string()));
        assert!(waiting.contains(&"Cancel".to_string()));

        let in_progress = labels(&mut screen, "1");
        assert!(in_progress.contains(&"Complete Service".to_string()));

        let completed = labels(&mut screen, "3");
        assert!(!completed.contains(&"Cancel".to_string()));
        assert!(!completed.contains(&"Start Service".to_string()));
        assert_eq!(completed.len(), 3);
    }
}
