//! Parser for the plain-text host list format.
//!
//! ```text
//! # comment
//! root:secret@10.0.0.1          # goes to group "default"
//!
//! [web]
//! deploy:p@ss@word@10.0.0.2:2222
//! ```
//!
//! A host line is `user:password@address[:port]`. The user ends at the first
//! `:` and the password at the last `@`, so passwords may contain both.

use crate::error::MinopError;
use crate::inventory::DEFAULT_PORT;

/// Group that hosts belong to before the first `[section]`.
pub const DEFAULT_GROUP: &str = "default";

/// One host line of a host list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub user: String,
    pub password: String,
    pub address: String,
    pub port: u16,
}

/// A `[section]` of a host list with its hosts in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    pub name: String,
    pub hosts: Vec<HostEntry>,
}

/// Parse a single `user:password@address[:port]` line.
///
/// # Errors
///
/// Returns a message describing the first missing or malformed part.
pub fn parse_host_line(line: &str) -> Result<HostEntry, String> {
    let (user, rest) = line
        .split_once(':')
        .ok_or_else(|| format!("empty username: {line}"))?;

    let (password, rest) = rest
        .rsplit_once('@')
        .ok_or_else(|| format!("empty password: {line}"))?;

    let (address, port) = match rest.split_once(':') {
        Some((address, port)) => (address, Some(port)),
        None => (rest, None),
    };

    if address.is_empty() {
        return Err(format!("empty hostname: {line}"));
    }

    let port = match port {
        None | Some("") => DEFAULT_PORT,
        Some(port) => parse_port(port)?,
    };

    Ok(HostEntry {
        user: user.to_string(),
        password: password.to_string(),
        address: address.to_string(),
        port,
    })
}

fn parse_port(text: &str) -> Result<u16, String> {
    let value: i64 = text
        .parse()
        .map_err(|_| format!("invalid port: {text}"))?;

    u16::try_from(value)
        .ok()
        .filter(|port| *port >= 1)
        .ok_or_else(|| format!("invalid port: {value} not in 1-65535 range"))
}

/// Parse a whole host list.
///
/// Groups come back in order of first appearance; a section name that
/// repeats appends to the earlier group. Groups without hosts are dropped.
///
/// # Errors
///
/// Returns `MinopError::HostList` naming the first bad line.
pub fn parse_host_list(text: &str) -> Result<Vec<GroupEntry>, MinopError> {
    let mut groups: Vec<GroupEntry> = Vec::new();
    let mut current = DEFAULT_GROUP.to_string();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.len() >= 3 && trimmed.starts_with('[') && trimmed.ends_with(']') {
            current = trimmed[1..trimmed.len() - 1].to_string();
            continue;
        }

        let host = parse_host_line(trimmed).map_err(|message| MinopError::HostList {
            line: index + 1,
            message,
        })?;

        match groups.iter_mut().find(|g| g.name == current) {
            Some(group) => group.hosts.push(host),
            None => groups.push(GroupEntry {
                name: current.clone(),
                hosts: vec![host],
            }),
        }
    }

    Ok(groups)
}
