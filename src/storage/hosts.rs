//! Host group and host persistence.

use rusqlite::{params, Row};

use super::Database;
use crate::error::MinopError;
use crate::inventory::{Host, HostGroup, NewHost};

const HOST_COLUMNS: &str = "id, name, group_id, ip, username, password, port";

/// Storage for host groups and hosts.
///
/// Every create is a single autocommitted insert.
pub struct HostStorage {
    db: Database,
}

impl HostStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// The underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Insert a host group and return its new id.
    ///
    /// # Errors
    ///
    /// Returns `MinopError::Database` with the engine message if the insert fails.
    pub fn create_host_group(&self, name: &str) -> Result<i64, MinopError> {
        let conn = self.db.connection();

        conn.execute("INSERT INTO host_groups (name) VALUES (?1)", params![name])
            .map_err(|e| write_error("Failed to create host group", &e))?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert a host and return its new id.
    ///
    /// `group_id` is stored as given; it is not checked against existing groups.
    ///
    /// # Errors
    ///
    /// Returns `MinopError::Database` with the engine message if the insert fails.
    pub fn create_host(&self, host: &NewHost) -> Result<i64, MinopError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO hosts (name, group_id, ip, username, password, port)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                host.name,
                host.group_id,
                host.ip,
                host.username,
                host.password,
                host.port,
            ],
        )
        .map_err(|e| write_error("Failed to create host", &e))?;

        Ok(conn.last_insert_rowid())
    }

    /// All host groups sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. An empty table is `Ok(vec![])`.
    pub fn list_host_groups(&self) -> Result<Vec<HostGroup>, MinopError> {
        self.query_groups("SELECT id, name FROM host_groups ORDER BY name, id", [])
    }

    /// Host groups whose name is exactly `name`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_host_groups_by_name(&self, name: &str) -> Result<Vec<HostGroup>, MinopError> {
        self.query_groups(
            "SELECT id, name FROM host_groups WHERE name = ?1 ORDER BY id",
            [name],
        )
    }

    /// All hosts in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_hosts(&self) -> Result<Vec<Host>, MinopError> {
        self.query_hosts(&format!("SELECT {HOST_COLUMNS} FROM hosts ORDER BY id"), [])
    }

    /// Hosts referencing `group_id`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_hosts_in_group(&self, group_id: i64) -> Result<Vec<Host>, MinopError> {
        self.query_hosts(
            &format!("SELECT {HOST_COLUMNS} FROM hosts WHERE group_id = ?1 ORDER BY id"),
            [group_id],
        )
    }

    fn query_groups<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<HostGroup>, MinopError> {
        let mut stmt = self
            .db
            .connection()
            .prepare(sql)
            .map_err(|e| read_error("Failed to prepare query", &e))?;

        let rows = stmt
            .query_map(params, row_to_group)
            .map_err(|e| read_error("Failed to query host groups", &e))?;

        let mut groups = Vec::new();
        for row in rows {
            groups.push(row.map_err(|e| read_error("Failed to read host group", &e))?);
        }

        Ok(groups)
    }

    fn query_hosts<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<Host>, MinopError> {
        let mut stmt = self
            .db
            .connection()
            .prepare(sql)
            .map_err(|e| read_error("Failed to prepare query", &e))?;

        let rows = stmt
            .query_map(params, row_to_host)
            .map_err(|e| read_error("Failed to query hosts", &e))?;

        let mut hosts = Vec::new();
        for row in rows {
            hosts.push(row.map_err(|e| read_error("Failed to read host", &e))?);
        }

        Ok(hosts)
    }
}

fn write_error(context: &str, e: &rusqlite::Error) -> MinopError {
    let err = MinopError::Database(format!("{context}: {e}"));
    log::error!("{err}");
    err
}

fn read_error(context: &str, e: &rusqlite::Error) -> MinopError {
    let err = MinopError::Database(format!("{context}: {e}"));
    log::warn!("{err}");
    err
}

fn row_to_group(row: &Row) -> rusqlite::Result<HostGroup> {
    Ok(HostGroup {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_host(row: &Row) -> rusqlite::Result<Host> {
    Ok(Host {
        id: row.get(0)?,
        name: row.get(1)?,
        group_id: row.get(2)?,
        ip: row.get(3)?,
        username: row.get(4)?,
        password: row.get(5)?,
        port: row.get(6)?,
    })
}
