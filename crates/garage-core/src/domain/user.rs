use serde::{Deserialize, Serialize};

use crate::core::filter::{FilterSet, TextSearch};
use crate::core::record::{Record, RecordId};
use crate::core::screen::{ActionKind, EventSink, RecordQuery, ScreenRecord};
use crate::display::action_menu::RowAction;
use crate::display::record_table::Column;

/// Row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Payload of an `add-user` request; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for User {
    fn record_id(&self) -> RecordId {
        self.id.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
}

impl RecordQuery<User> for UserQuery {
    fn filters(&self) -> FilterSet<'_, User> {
        let search = TextSearch::new(&self.search);
        FilterSet::new()
            .with(move |u: &User| search.matches_any([u.name.as_str(), u.email.as_str()]))
    }
}

impl ScreenRecord for User {
    type Query = UserQuery;

    const TITLE: &'static str = "Users";

    fn columns() -> Vec<Column<Self>> {
        vec![Column::new("Name", "name"), Column::new("Email", "email")]
    }

    fn actions(sink: &EventSink) -> Vec<RowAction<Self>> {
        vec![RowAction::new(
            "📄",
            "User Details",
            sink.handler(ActionKind::ViewDetails),
        )]
    }

    fn detail_fields(&self) -> Vec<(String, String)> {
        vec![
            ("ID".to_string(), self.id.to_string()),
            ("Name".to_string(), self.name.clone()),
            ("Email".to_string(), self.email.clone()),
        ]
    }
}
