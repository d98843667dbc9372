use serde::{Deserialize, Serialize};

use crate::core::filter::{FilterSet, StockFilter, TextSearch};
use crate::core::record::{Record, RecordId};
use crate::core::screen::{ActionKind, EventSink, RecordQuery, ScreenRecord};
use crate::display::action_menu::RowAction;
use crate::display::record_table::Column;
use crate::domain::format_money;

/// A part handed out for a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartUsage {
    pub date: String,
    pub plate: String,
    pub customer: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartDetails {
    pub code: String,
    pub min_stock: u32,
    #[serde(default)]
    pub history: Vec<PartUsage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: u64,
    pub expiry_date: String,
    pub is_critical: bool,
    pub details: PartDetails,
}

impl Part {
    pub fn below_minimum(&self) -> bool {
        self.stock < self.details.min_stock
    }
}

impl Record for Part {
    fn record_id(&self) -> RecordId {
        self.id.as_str().into()
    }
}

/// Distinct categories in first-seen order, for the category filter
pub fn categories(parts: &[Part]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for part in parts {
        if !seen.contains(&part.category) {
            seen.push(part.category.clone());
        }
    }
    seen
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartQuery {
    pub search: String,
    pub category: Option<String>,
    pub stock: StockFilter,
}

impl RecordQuery<Part> for PartQuery {
    fn filters(&self) -> FilterSet<'_, Part> {
        let search = TextSearch::new(&self.search);
        let stock = self.stock;
        FilterSet::new()
            .with(move |p: &Part| search.matches_any([p.name.as_str(), p.category.as_str()]))
            .with_optional(self.category.as_deref(), |category, p: &Part| {
                p.category == *category
            })
            .with(move |p: &Part| stock.accepts(p.is_critical))
    }
}

impl ScreenRecord for Part {
    type Query = PartQuery;

    const TITLE: &'static str = "Inventory";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Part", "name"),
            Column::new("Category", "category"),
            Column::new("Stock", "stock").with_render(|p: &Part| {
                if p.is_critical {
                    format!("⚠️ {}", p.stock)
                } else {
                    p.stock.to_string()
                }
            }),
            Column::new("Price", "price").with_render(|p: &Part| format_money(p.price)),
            Column::new("Expiry", "expiryDate"),
        ]
    }

    fn actions(sink: &EventSink) -> Vec<RowAction<Self>> {
        vec![
            RowAction::new("📄", "Part Details", sink.handler(ActionKind::ViewDetails)),
            RowAction::new("✏️", "Edit", sink.handler(ActionKind::Edit)),
            RowAction::new("📦", "Add Stock", sink.handler(ActionKind::AddStock)),
            RowAction::new("🗑️", "Delete Part", sink.handler(ActionKind::Delete)).danger(),
        ]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("Name".to_string(), self.name.clone()),
            ("Code".to_string(), self.details.code.clone()),
            ("Category".to_string(), self.category.clone()),
            (
                "Stock".to_string(),
                if self.below_minimum() {
                    format!("{} (min {}, below minimum)", self.stock, self.details.min_stock)
                } else {
                    format!("{} (min {})", self.stock, self.details.min_stock)
                },
            ),
            ("Price".to_string(), format_money(self.price)),
            ("Expiry".to_string(), self.expiry_date.clone()),
            (
                "Critical".to_string(),
                if self.is_critical { "yes" } else { "no" }.to_string(),
            ),
        ];
        for usage in &self.details.history {
            fields.push((
                format!("Used {}", usage.date),
                format!("{} × {} · {}", usage.quantity, usage.plate, usage.customer),
            ));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample;

    fn names(query: &PartQuery) -> Vec<String> {
        query
            .filters()
            .apply(&sample::parts())
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn test_stock_filter_uses_critical_flag() {
        let critical = PartQuery {
            stock: StockFilter::Critical,
            ..Default::default()
        };
        assert_eq!(names(&critical), ["Yağ Filtresi", "Buji Takımı"]);

        let normal = PartQuery {
            stock: StockFilter::Normal,
            ..Default::default()
        };
        assert_eq!(names(&normal), ["Fren Balatası"]);
        assert_eq!(names(&PartQuery::default()).len(), 3);
    }

    #[test]
    fn test_category_equality_is_exact() {
        let query = PartQuery {
            category: Some("Fren".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&query), ["Fren Balatası"]);

        let query = PartQuery {
            category: Some("fren".to_string()),
            ..Default::default()
        };
        assert!(names(&query).is_empty());
    }

    #[test]
    fn test_search_over_name_and_category() {
        let query = PartQuery {
            search: "ateş".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&query), ["Buji Takımı"]);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(categories(&sample::parts()), ["Motor", "Fren", "Ateşleme"]);
    }

    #[test]
    fn test_below_minimum() {
        let parts = sample::parts();
        assert!(parts[0].below_minimum());
        assert!(!parts[1].below_minimum());
    }
}
