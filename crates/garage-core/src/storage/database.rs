//! Local SQLite store.
//!
//! One `database.sqlite` file in the per-user data directory, journal mode
//! WAL. Users live in a relational `users` table; workshop entities are kept
//! as JSON documents keyed by their id.

use std::path::{Path, PathBuf};

use async_sqlite::{Client, ClientBuilder, JournalMode};
use rusqlite::ErrorCode;

use super::Result;
use crate::domain::{NewUser, User, sample};
use crate::error::StorageError;
use crate::storage::repository::{SqliteRepository, StoredRecord};
use crate::utils::file::ensure_parent_exists;

pub const DATABASE_FILE: &str = "database.sqlite";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE
    );
    CREATE TABLE IF NOT EXISTS customers (id TEXT PRIMARY KEY, data TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS vehicles (id TEXT PRIMARY KEY, data TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS services (id TEXT PRIMARY KEY, data TEXT NOT NULL);
    CREATE TABLE IF NOT EXISTS parts (id TEXT PRIMARY KEY, data TEXT NOT NULL);
";

/// `PRAGMA user_version` once the sample data has been loaded
const SEEDED_VERSION: i64 = 1;

/// `<data dir>/garage/database.sqlite`
pub fn default_database_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(StorageError::DataDirNotFound)?;
    Ok(data_dir.join("garage").join(DATABASE_FILE))
}

pub(crate) fn is_constraint_violation(error: &async_sqlite::Error) -> bool {
    matches!(
        error,
        async_sqlite::Error::Rusqlite(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation)
    )
}

#[derive(Clone)]
pub struct Database {
    client: Client,
    path: PathBuf,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").field("path", &self.path).finish()
    }
}

impl Database {
    /// Open (creating if needed) the store at `path` and ensure the schema exists
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        ensure_parent_exists(&path)?;

        log::info!("opening database at {}", path.display());
        let client = ClientBuilder::new()
            .path(&path)
            .journal_mode(JournalMode::Wal)
            .open()
            .await?;

        client.conn(|conn| conn.execute_batch(SCHEMA)).await?;

        Ok(Self { client, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Load the sample users and workshop records into a fresh store.
    ///
    /// Runs once per store file: afterwards `user_version` marks it seeded, so
    /// records deleted later stay deleted. Failures are logged and otherwise
    /// ignored.
    pub async fn seed(&self) {
        match self.user_version().await {
            Ok(version) if version >= SEEDED_VERSION => return,
            Ok(_) => {}
            Err(e) => {
                log::warn!("failed to read store version: {}", e);
                return;
            }
        }

        for user in sample::users() {
            let NewUser { name, email } = user;
            let result = self
                .client
                .conn(move |conn| {
                    conn.execute(
                        "INSERT OR IGNORE INTO users (name, email) VALUES (?1, ?2)",
                        rusqlite::params![name, email],
                    )
                })
                .await;
            if let Err(e) = result {
                log::warn!("failed to seed users: {}", e);
                break;
            }
        }

        self.seed_table(sample::customers()).await;
        self.seed_table(sample::vehicles()).await;
        self.seed_table(sample::services()).await;
        self.seed_table(sample::parts()).await;

        let mark = self
            .client
            .conn(|conn| conn.pragma_update(None, "user_version", SEEDED_VERSION))
            .await;
        match mark {
            Ok(()) => log::info!("seeded sample data into {}", self.path.display()),
            Err(e) => log::warn!("failed to mark store as seeded: {}", e),
        }
    }

    async fn user_version(&self) -> Result<i64> {
        let version = self
            .client
            .conn(|conn| conn.query_row("PRAGMA user_version", [], |row| row.get(0)))
            .await?;
        Ok(version)
    }

    async fn seed_table<T: StoredRecord>(&self, records: Vec<T>) {
        let repository = SqliteRepository::<T>::new(self.clone());
        if let Err(e) = repository.insert_missing(records).await {
            log::warn!("failed to seed {}: {}", T::TABLE, e);
        }
    }

    /// All users in insertion order
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users = self
            .client
            .conn(|conn| {
                let mut stmt = conn.prepare("SELECT id, name, email FROM users ORDER BY id")?;
                let rows = stmt.query_map([], |row| {
                    Ok(User {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                    })
                })?;
                rows.collect::<std::result::Result<Vec<_>, _>>()
            })
            .await?;
        Ok(users)
    }

    /// Insert a user; a taken email fails with [`StorageError::DuplicateEmail`]
    pub async fn add_user(&self, user: NewUser) -> Result<User> {
        let NewUser { name, email } = user;
        let (name_arg, email_arg) = (name.clone(), email.clone());

        let result = self
            .client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO users (name, email) VALUES (?1, ?2)",
                    rusqlite::params![name_arg, email_arg],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await;

        match result {
            Ok(id) => {
                log::debug!("added user {} <{}> as {}", name, email, id);
                Ok(User { id, name, email })
            }
            Err(e) if is_constraint_violation(&e) => Err(StorageError::DuplicateEmail { email }),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn count_users(&self) -> Result<usize> {
        let count: i64 = self
            .client
            .conn(|conn| conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0)))
            .await?;
        Ok(count.max(0) as usize)
    }

    pub async fn journal_mode(&self) -> Result<String> {
        let mode = self
            .client
            .conn(|conn| conn.query_row("PRAGMA journal_mode", [], |row| row.get::<_, String>(0)))
            .await?;
        Ok(mode)
    }
}
