use crate::Result;
use crate::core::record::{Record, RecordId};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Trait for repositories that can list records
#[async_trait]
pub trait ListService<T> {
    /// All records in insertion order
    async fn list(&self) -> Result<Vec<T>>;
}

/// Trait for repositories that can retrieve individual records
#[async_trait]
pub trait GetService<T> {
    async fn get(&self, id: &RecordId) -> Result<T>;
}

#[async_trait]
pub trait CreateService<T> {
    async fn create(&self, record: T) -> Result<T>;
}

#[async_trait]
pub trait UpdateService<T> {
    /// Replace the stored record with the same id
    async fn update(&self, record: T) -> Result<T>;
}

#[async_trait]
pub trait DeleteService {
    async fn delete(&self, id: &RecordId) -> Result<()>;
}

/// Combined CRUD interface of one entity store
pub trait Repository<T>:
    ListService<T> + GetService<T> + CreateService<T> + UpdateService<T> + DeleteService + Send + Sync
{
}

impl<T, R> Repository<T> for R where
    R: ListService<T>
        + GetService<T>
        + CreateService<T>
        + UpdateService<T>
        + DeleteService
        + Send
        + Sync
{
}

/// Volatile repository used in tests and as a stand-in store
pub struct InMemoryRepository<T> {
    name: &'static str,
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(name: &'static str, records: Vec<T>) -> Self {
        Self {
            name,
            records: RwLock::new(records),
        }
    }

    fn not_found(&self, id: &RecordId) -> crate::AppError {
        crate::error::StorageError::RecordNotFound {
            table: self.name.to_string(),
            id: id.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl<T: Record + Clone + Send + Sync + 'static> ListService<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.records.read().await.clone())
    }
}

#[async_trait]
impl<T: Record + Clone + Send + Sync + 'static> GetService<T> for InMemoryRepository<T> {
    async fn get(&self, id: &RecordId) -> Result<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.record_id() == *id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }
}

#[async_trait]
impl<T: Record + Clone + Send + Sync + 'static> CreateService<T> for InMemoryRepository<T> {
    async fn create(&self, record: T) -> Result<T> {
        let mut records = self.records.write().await;
        let id = record.record_id();
        if records.iter().any(|r| r.record_id() == id) {
            return Err(crate::error::StorageError::DuplicateRecord {
                table: self.name.to_string(),
                id: id.to_string(),
            }
            .into());
        }
        records.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl<T: Record + Clone + Send + Sync + 'static> UpdateService<T> for InMemoryRepository<T> {
    async fn update(&self, record: T) -> Result<T> {
        let mut records = self.records.write().await;
        let id = record.record_id();
        match records.iter_mut().find(|r| r.record_id() == id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(self.not_found(&id)),
        }
    }
}

#[async_trait]
impl<T: Record + Send + Sync + 'static> DeleteService for InMemoryRepository<T> {
    async fn delete(&self, id: &RecordId) -> Result<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.record_id() != *id);
        if records.len() == before {
            return Err(self.not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Part, sample};
    use crate::error::{AppError, StorageError};

    async fn exercise(repo: &dyn Repository<Part>) {
        let parts = repo.list().await.expect("list");
        assert_eq!(parts.len(), 3);

        let mut part = repo.get(&RecordId::from("2")).await.expect("get");
        part.stock += 5;
        repo.update(part.clone()).await.expect("update");
        assert_eq!(repo.get(&RecordId::from("2")).await.expect("get").stock, 15);

        assert!(matches!(
            repo.create(part).await,
            Err(AppError::Storage(StorageError::DuplicateRecord { .. }))
        ));

        repo.delete(&RecordId::from("1")).await.expect("delete");
        assert!(matches!(
            repo.delete(&RecordId::from("1")).await,
            Err(AppError::Storage(StorageError::RecordNotFound { .. }))
        ));
        let ids: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[tokio::test]
    async fn test_in_memory_repository_crud() {
        let repo = InMemoryRepository::new("parts", sample::parts());
        exercise(&repo).await;
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let repo = InMemoryRepository::new("parts", Vec::<Part>::new());
        assert!(repo.get(&RecordId::from("9")).await.is_err());
    }
}
