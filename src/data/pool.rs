//! SQLite connection wrapper (lightweight for CLI usage).

use crate::errors::DataSourceError;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing data file without write access.
    pub fn open_read_only(path: &Path) -> Result<Self, DataSourceError> {
        if !path.exists() {
            return Err(DataSourceError::Missing(path.display().to_string()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| DataSourceError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { conn })
    }

    /// Open (or create) a data file for `init`.
    pub fn open_rw(path: &Path) -> Result<Self, DataSourceError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn table_exists(&self, table: &str) -> Result<bool, DataSourceError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
        let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
        Ok(exists.is_some())
    }
}
