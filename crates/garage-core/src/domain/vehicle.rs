use serde::{Deserialize, Serialize};

use crate::core::filter::{FilterSet, TextSearch};
use crate::core::record::{Record, RecordId};
use crate::core::screen::{ActionKind, EventSink, RecordQuery, ScreenRecord};
use crate::display::action_menu::RowAction;
use crate::display::record_table::Column;
use crate::domain::{ContactInfo, ServiceStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub motor_no: String,
    pub chassis_no: String,
    /// Odometer reading in km
    pub mileage: u32,
    pub customer: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub plate: String,
    pub customer_name: String,
    pub model: String,
    pub last_service: String,
    pub status: ServiceStatus,
    pub details: VehicleDetails,
}

impl Record for Vehicle {
    fn record_id(&self) -> RecordId {
        self.id.as_str().into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleQuery {
    pub search: String,
}

impl RecordQuery<Vehicle> for VehicleQuery {
    fn filters(&self) -> FilterSet<'_, Vehicle> {
        let search = TextSearch::new(&self.search);
        FilterSet::new().with(move |v: &Vehicle| {
            search.matches_any([v.plate.as_str(), v.customer_name.as_str(), v.model.as_str()])
        })
    }
}

impl ScreenRecord for Vehicle {
    type Query = VehicleQuery;

    const TITLE: &'static str = "Vehicles";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Plate", "plate"),
            Column::new("Customer", "customerName"),
            Column::new("Make/Model", "model"),
            Column::new("Last Service", "lastService"),
            Column::new("Status", "status")
                .with_render(|v: &Vehicle| format!("{} {}", v.status.icon(), v.status)),
        ]
    }

    fn actions(sink: &EventSink) -> Vec<RowAction<Self>> {
        vec![
            RowAction::new("📄", "View Details", sink.handler(ActionKind::ViewDetails)),
            RowAction::new("🛠️", "Add Service", sink.handler(ActionKind::AddService)),
            RowAction::new("🗑️", "Delete Vehicle", sink.handler(ActionKind::Delete)).danger(),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Plate".to_string(), self.plate.clone()),
            ("Model".to_string(), self.model.clone()),
            ("Owner".to_string(), self.customer_name.clone()),
            ("Phone".to_string(), self.details.customer.phone.clone()),
            ("Email".to_string(), self.details.customer.email.clone()),
            ("Engine no".to_string(), self.details.motor_no.clone()),
            ("Chassis no".to_string(), self.details.chassis_no.clone()),
            ("Mileage".to_string(), format!("{} km", self.details.mileage)),
            ("Last service".to_string(), self.last_service.clone()),
            ("Status".to_string(), self.status.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample;

    #[test]
    fn test_search_over_plate_owner_and_model() {
        let vehicles = sample::vehicles();
        let hits = |term: &str| {
            VehicleQuery {
                search: term.to_string(),
            }
            .filters()
            .apply(&vehicles)
            .len()
        };
        assert_eq!(hits("06 xyz"), 1);
        assert_eq!(hits("ayşe"), 1);
        assert_eq!(hits("toyota"), 1);
        assert_eq!(hits(""), vehicles.len());
        assert_eq!(hits("ABC123456"), 0);
    }

    #[test]
    fn test_status_column_uses_render() {
        let vehicles = sample::vehicles();
        let columns = Vehicle::columns();
        let table = crate::display::record_table::RecordTable::new(columns);
        let view = table.view(&vehicles);
        assert_eq!(view.rows[0].cells[4], "✅ Completed");
        assert_eq!(view.rows[0].cells[1], "Ahmet Yılmaz");
    }
}
