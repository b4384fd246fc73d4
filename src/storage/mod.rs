//! Storage layer for shared-expenses
//!
//! One SQLite connection, opened at startup and handed to every consumer by
//! reference. The connection runs in autocommit mode, so each repository call
//! is its own transaction.

pub mod purchases;
pub mod schema;

pub use purchases::PurchaseRepository;

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};

/// Owns the database connection
pub struct Storage {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Storage {
    /// Open (or create) the database file and make sure the table exists
    pub fn open(path: impl AsRef<Path>) -> ExpenseResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened database");

        let storage = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        storage.initialize()?;
        Ok(storage)
    }

    /// Open a private in-memory database (for tests and dry runs)
    pub fn open_in_memory() -> ExpenseResult<Self> {
        let storage = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        storage.initialize()?;
        Ok(storage)
    }

    /// Create the backing table if absent; safe to call on every start
    pub fn initialize(&self) -> ExpenseResult<()> {
        schema::initialize(&self.conn)
    }

    /// Access the purchases table
    pub fn purchases(&self) -> PurchaseRepository<'_> {
        PurchaseRepository::new(&self.conn)
    }

    /// Location of the database file, `None` when in memory
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
