use crate::error::StorageError;

pub mod config;
pub mod database;
pub mod repository;

type Result<T> = std::result::Result<T, StorageError>;
