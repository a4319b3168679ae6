//! Database migrations for minop.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::MinopError;

/// Current schema version.
pub(crate) const CURRENT_VERSION: i32 = 2;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, MinopError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| MinopError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), MinopError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| MinopError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), MinopError> {
    let current = get_version(conn)?;

    if current > CURRENT_VERSION {
        return Err(MinopError::Database(format!(
            "Unknown schema version {current}; this build supports up to {CURRENT_VERSION}"
        )));
    }

    if current == CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        log::debug!("Applying schema migration v{version}");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), MinopError> {
    match version {
        1 => migrate_v1(conn),
        2 => migrate_v2(conn),
        _ => Err(MinopError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: host groups and hosts.
///
/// `IF NOT EXISTS` lets a database written by the desktop app (which never
/// set `user_version`) be adopted as-is. `hosts.group_id` carries no foreign
/// key to `host_groups.id`.
fn migrate_v1(conn: &Connection) -> Result<(), MinopError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS host_groups (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS hosts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            group_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            ip TEXT NOT NULL,
            username TEXT NOT NULL,
            password TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| MinopError::Database(format!("Create tables error: {e}")))
}

/// Migration v2: SSH port on hosts.
fn migrate_v2(conn: &Connection) -> Result<(), MinopError> {
    if has_column(conn, "hosts", "port")? {
        return Ok(());
    }

    conn.execute_batch("ALTER TABLE hosts ADD COLUMN port INTEGER NOT NULL DEFAULT 22;")
        .map_err(|e| MinopError::Database(format!("Migration v2 failed: {e}")))
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool, MinopError> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .map_err(|e| MinopError::Database(format!("Failed to inspect {table}: {e}")))?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| MinopError::Database(format!("Failed to inspect {table}: {e}")))?;

    for name in names {
        if name.map_err(|e| MinopError::Database(e.to_string()))? == column {
            return Ok(true);
        }
    }

    Ok(false)
}
