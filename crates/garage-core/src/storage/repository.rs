//! SQLite-backed entity repositories.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::record::{Record, RecordId};
use crate::core::services::traits::{
    CreateService, DeleteService, GetService, ListService, UpdateService,
};
use crate::domain::{Customer, Part, ServiceTicket, Vehicle};
use crate::error::StorageError;
use crate::storage::database::{Database, is_constraint_violation};

/// A record persisted as a JSON document in its own table
pub trait StoredRecord: Record + Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: &'static str;
}

impl StoredRecord for Customer {
    const TABLE: &'static str = "customers";
}

impl StoredRecord for Vehicle {
    const TABLE: &'static str = "vehicles";
}

impl StoredRecord for ServiceTicket {
    const TABLE: &'static str = "services";
}

impl StoredRecord for Part {
    const TABLE: &'static str = "parts";
}

pub struct SqliteRepository<T> {
    db: Database,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for SqliteRepository<T> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: StoredRecord> SqliteRepository<T> {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }

    fn encode(record: &T) -> Result<(String, String), StorageError> {
        let data = serde_json::to_string(record).map_err(|e| StorageError::CorruptRow {
            table: T::TABLE.to_string(),
            message: e.to_string(),
        })?;
        Ok((record.record_id().to_string(), data))
    }

    fn decode(data: &str) -> Result<T, StorageError> {
        serde_json::from_str(data).map_err(|e| StorageError::CorruptRow {
            table: T::TABLE.to_string(),
            message: e.to_string(),
        })
    }

    fn not_found(id: &RecordId) -> StorageError {
        StorageError::RecordNotFound {
            table: T::TABLE.to_string(),
            id: id.to_string(),
        }
    }

    /// All records in insertion order
    pub async fn all(&self) -> Result<Vec<T>, StorageError> {
        let sql = format!("SELECT data FROM {} ORDER BY rowid", T::TABLE);
        let rows: Vec<String> = self
            .db
            .client()
            .conn(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.collect::<Result<Vec<_>, _>>()
            })
            .await?;
        rows.iter().map(|data| Self::decode(data)).collect()
    }

    pub async fn find(&self, id: &RecordId) -> Result<Option<T>, StorageError> {
        let sql = format!("SELECT data FROM {} WHERE id = ?1", T::TABLE);
        let key = id.to_string();
        let data: Option<String> = self
            .db
            .client()
            .conn(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let mut rows = stmt.query([&key])?;
                match rows.next()? {
                    Some(row) => Ok(Some(row.get(0)?)),
                    None => Ok(None),
                }
            })
            .await?;
        data.as_deref().map(Self::decode).transpose()
    }

    pub async fn insert(&self, record: &T) -> Result<(), StorageError> {
        let (id, data) = Self::encode(record)?;
        let sql = format!("INSERT INTO {} (id, data) VALUES (?1, ?2)", T::TABLE);
        let key = id.clone();
        match self
            .db
            .client()
            .conn(move |conn| conn.execute(&sql, rusqlite::params![key, data]))
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if is_constraint_violation(&e) => Err(StorageError::DuplicateRecord {
                table: T::TABLE.to_string(),
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert each record whose id is not yet stored
    pub async fn insert_missing(&self, records: Vec<T>) -> Result<usize, StorageError> {
        let rows = records
            .iter()
            .map(Self::encode)
            .collect::<Result<Vec<_>, _>>()?;
        let sql = format!("INSERT OR IGNORE INTO {} (id, data) VALUES (?1, ?2)", T::TABLE);
        let inserted = self
            .db
            .client()
            .conn(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let mut inserted = 0;
                for (id, data) in &rows {
                    inserted += stmt.execute(rusqlite::params![id, data])?;
                }
                Ok(inserted)
            })
            .await?;
        log::debug!("seeded {} new rows into {}", inserted, T::TABLE);
        Ok(inserted)
    }

    pub async fn replace(&self, record: &T) -> Result<(), StorageError> {
        let (id, data) = Self::encode(record)?;
        let sql = format!("UPDATE {} SET data = ?2 WHERE id = ?1", T::TABLE);
        let key = id.clone();
        let changed = self
            .db
            .client()
            .conn(move |conn| conn.execute(&sql, rusqlite::params![key, data]))
            .await?;
        if changed == 0 {
            return Err(Self::not_found(&RecordId::Text(id)));
        }
        Ok(())
    }

    pub async fn remove(&self, id: &RecordId) -> Result<(), StorageError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", T::TABLE);
        let key = id.to_string();
        let changed = self
            .db
            .client()
            .conn(move |conn| conn.execute(&sql, [&key]))
            .await?;
        if changed == 0 {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: StoredRecord> ListService<T> for SqliteRepository<T> {
    async fn list(&self) -> crate::Result<Vec<T>> {
        Ok(self.all().await?)
    }
}

#[async_trait]
impl<T: StoredRecord> GetService<T> for SqliteRepository<T> {
    async fn get(&self, id: &RecordId) -> crate::Result<T> {
        self.find(id)
            .await?
            .ok_or_else(|| Self::not_found(id).into())
    }
}

#[async_trait]
impl<T: StoredRecord> CreateService<T> for SqliteRepository<T> {
    async fn create(&self, record: T) -> crate::Result<T> {
        self.insert(&record).await?;
        Ok(record)
    }
}

#[async_trait]
impl<T: StoredRecord> UpdateService<T> for SqliteRepository<T> {
    async fn update(&self, record: T) -> crate::Result<T> {
        self.replace(&record).await?;
        Ok(record)
    }
}

#[async_trait]
impl<T: StoredRecord> DeleteService for SqliteRepository<T> {
    async fn delete(&self, id: &RecordId) -> crate::Result<()> {
        Ok(self.remove(id).await?)
    }
}
