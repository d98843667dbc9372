pub mod config_service;
pub mod data_service;
pub mod traits;
pub mod transport;
