//! Host inventory records.

use serde::{Deserialize, Serialize};

/// SSH port assumed when none is given.
pub const DEFAULT_PORT: u16 = 22;

/// A named collection of hosts.
///
/// Names are not unique; two groups may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostGroup {
    /// Identifier assigned by the database.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// A remote machine with its connection credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Identifier assigned by the database.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Group this host belongs to. Not checked against `host_groups`.
    pub group_id: i64,
    /// Address used to reach the host.
    pub ip: String,
    /// Login user.
    pub username: String,
    /// Login password, stored in plaintext.
    pub password: String,
    /// SSH port.
    pub port: u16,
}

/// A host that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHost {
    pub name: String,
    pub group_id: i64,
    pub ip: String,
    pub username: String,
    pub password: String,
    pub port: u16,
}

impl NewHost {
    /// Create a host record on the default port.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        group_id: i64,
        ip: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group_id,
            ip: ip.into(),
            username: username.into(),
            password: password.into(),
            port: DEFAULT_PORT,
        }
    }

    /// Set the SSH port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Attach the identifier the database assigned.
    #[must_use]
    pub fn into_host(self, id: i64) -> Host {
        Host {
            id,
            name: self.name,
            group_id: self.group_id,
            ip: self.ip,
            username: self.username,
            password: self.password,
            port: self.port,
        }
    }
}
