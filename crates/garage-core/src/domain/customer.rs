use serde::{Deserialize, Serialize};

use crate::core::filter::{FilterSet, TextSearch};
use crate::core::record::{Record, RecordId};
use crate::core::screen::{ActionKind, EventSink, RecordQuery, ScreenRecord};
use crate::display::action_menu::RowAction;
use crate::display::record_table::Column;
use crate::domain::{ServiceStatus, format_money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedVehicle {
    pub plate: String,
    pub model: String,
    pub last_service: String,
    pub status: ServiceStatus,
}

/// One past visit in a customer's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceVisit {
    pub date: String,
    pub plate: String,
    pub services: String,
    pub cost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_count: u32,
    pub last_service_date: String,
    pub total_spent: u64,
    #[serde(default)]
    pub vehicles: Vec<OwnedVehicle>,
    #[serde(default)]
    pub service_history: Vec<ServiceVisit>,
}

impl Record for Customer {
    fn record_id(&self) -> RecordId {
        self.id.as_str().into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub search: String,
}

impl RecordQuery<Customer> for CustomerQuery {
    fn filters(&self) -> FilterSet<'_, Customer> {
        let search = TextSearch::new(&self.search);
        FilterSet::new().with(move |c: &Customer| {
            search.matches_any([c.name.as_str(), c.phone.as_str(), c.email.as_str()])
        })
    }
}

impl ScreenRecord for Customer {
    type Query = CustomerQuery;

    const TITLE: &'static str = "Customers";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", "name"),
            Column::new("Phone", "phone"),
            Column::new("Email", "email").with_width(28),
        ]
    }

    fn actions(sink: &EventSink) -> Vec<RowAction<Self>> {
        vec![
            RowAction::new("📄", "Customer Details", sink.handler(ActionKind::ViewDetails)),
            RowAction::new("🛠️", "New Service", sink.handler(ActionKind::AddService)),
            RowAction::new("🗑️", "Delete Customer", sink.handler(ActionKind::Delete)).danger(),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("Name".to_string(), self.name.clone()),
            ("Phone".to_string(), self.phone.clone()),
            ("Email".to_string(), self.email.clone()),
            ("Vehicles".to_string(), self.vehicle_count.to_string()),
            ("Last service".to_string(), self.last_service_date.clone()),
            ("Total spent".to_string(), format_money(self.total_spent)),
        ];
        for vehicle in &self.vehicles {
            fields.push((
                format!("Vehicle {}", vehicle.plate),
                format!(
                    "{} · last service {} · {} {}",
                    vehicle.model,
                    vehicle.last_service,
                    vehicle.status.icon(),
                    vehicle.status
                ),
            ));
        }
        for visit in &self.service_history {
            fields.push((
                format!("Visit {}", visit.date),
                format!(
                    "{} · {} · {}",
                    visit.plate,
                    visit.services,
                    format_money(visit.cost)
                ),
            ));
        }
        fields
    }
}
