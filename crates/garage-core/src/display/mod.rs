pub mod action_menu;
pub mod pagination;
pub mod record_table;
pub mod table;

pub use action_menu::{ActionMenu, ActionVariant, RowAction, place_menu};
pub use pagination::{PageLayout, PageMarker, Pagination, paginate};
pub use record_table::{Column, RecordTable, TableView};
pub use table::TableDisplay;
