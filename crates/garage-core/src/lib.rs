//! # garage-core
//!
//! Core library for the garage workshop manager.
//!
//! Holds everything the `garage` front-end needs short of argument parsing:
//! the paginated record table, row action menus, per-screen filters, the
//! workshop domain records and the SQLite-backed data access facade.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use garage_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> garage_core::Result<()> {
//!     let db = Database::open(Config::load(None)?.database_path()?).await?;
//!     db.seed().await;
//!
//!     let (ipc, _host) = spawn_host(StoreHandler::new(db));
//!     let users = ChannelDataService::new(ipc).list_users().await;
//!     println!("{:?}", users.data());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Display Layer               │  Record table, pager, action menu
//! ├─────────────────────────────────────┤
//! │    Core Layer  /  Domain Layer      │  Screens, filters, facade, records
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  SQLite store, configuration
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Validation, text, files, env
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use garage_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::core::filter::{FilterSet, StockFilter, TextSearch};
    pub use crate::core::record::{Record, RecordId};
    pub use crate::core::screen::{ActionKind, EventSink, ListScreen, ScreenEvent, ScreenRecord};
    pub use crate::core::services::config_service::ConfigService;
    pub use crate::core::services::data_service::{
        ChannelDataService, DataService, ServiceResponse,
    };
    pub use crate::core::services::traits::Repository;
    pub use crate::core::services::transport::{StoreHandler, spawn_host};
    pub use crate::core::ui_state::{Theme, UiStore};

    pub use crate::domain::{
        Customer, NewUser, Part, ServiceStatus, ServiceTicket, User, Vehicle,
    };

    pub use crate::storage::config::Config;
    pub use crate::storage::database::Database;
    pub use crate::storage::repository::SqliteRepository;

    pub use crate::display::{Column, RecordTable, RowAction, TableDisplay};
}

/// Screen state, filters, services and the request channel.
pub mod core;

/// Workshop records: customers, vehicles, service tickets, parts and users.
pub mod domain;

/// Storage layer - SQLite store and configuration persistence.
pub mod storage;

/// Shared helpers: validation, text width, files, environment.
pub mod utils;

/// Display layer - record table, pagination and row action menus.
///
/// - [`display::record_table`]: generic table state and view model
/// - [`display::pagination`]: page math and page marker windows
/// - [`display::action_menu`]: per-row menus and placement
/// - [`display::table`]: terminal rendering
pub mod display;

/// Hierarchical error system with severity levels and troubleshooting hints.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
