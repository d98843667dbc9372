pub mod filter;
pub mod record;
pub mod screen;
pub mod services;
pub mod ui_state;
