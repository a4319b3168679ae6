//! `SQLite` database connection.
//!
//! The database lives in `minop.db` next to the executable unless configured
//! otherwise (see [`crate::config::Paths`]). It holds two tables:
//! - `host_groups`: named groups used to organise hosts
//! - `hosts`: remote machines with their connection credentials

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::MinopError;

use super::migrations;

/// Database connection wrapper.
///
/// One value owns one connection. Callers construct it once and pass it to
/// whatever needs storage; there is no process-wide instance.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, MinopError> {
        log::info!("Database path: {}", path.display());

        let conn = Connection::open(path).map_err(|e| {
            let err =
                MinopError::Database(format!("Database error: {}: {e}", path.display()));
            log::error!("{err}");
            err
        })?;

        let db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, MinopError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            MinopError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn, path: None };
        db.migrate()?;

        Ok(db)
    }

    fn migrate(&self) -> Result<(), MinopError> {
        migrations::run(&self.conn).inspect_err(|e| log::error!("{e}"))
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, MinopError> {
        migrations::get_version(&self.conn)
    }

    /// Location of the database file, `None` for in-memory databases.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
