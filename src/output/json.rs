//! JSON output formatting for minop.
//!
//! Host passwords are never written out; hosts go through [`HostView`].

use serde::Serialize;
use serde_json::json;

use crate::error::MinopError;
use crate::features::import::ImportSummary;
use crate::inventory::{Host, HostGroup, HostTree};

/// Serializable view of a host without its password.
#[derive(Debug, Serialize)]
pub struct HostView<'a> {
    pub id: i64,
    pub name: &'a str,
    pub group_id: i64,
    pub ip: &'a str,
    pub username: &'a str,
    pub port: u16,
}

impl<'a> From<&'a Host> for HostView<'a> {
    fn from(host: &'a Host) -> Self {
        Self {
            id: host.id,
            name: &host.name,
            group_id: host.group_id,
            ip: &host.ip,
            username: &host.username,
            port: host.port,
        }
    }
}

/// Format host groups as JSON
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_groups_json(groups: &[HostGroup]) -> Result<String, MinopError> {
    let output = json!({
        "count": groups.len(),
        "items": groups
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format hosts as JSON
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_hosts_json(hosts: &[Host]) -> Result<String, MinopError> {
    let items: Vec<HostView<'_>> = hosts.iter().map(HostView::from).collect();
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a newly created group as JSON
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_group_json(group: &HostGroup) -> Result<String, MinopError> {
    Ok(serde_json::to_string_pretty(group)?)
}

/// Format a newly created host as JSON
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_host_json(host: &Host) -> Result<String, MinopError> {
    Ok(serde_json::to_string_pretty(&HostView::from(host))?)
}

/// Format the group tree as JSON
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_tree_json(tree: &HostTree) -> Result<String, MinopError> {
    let groups: Vec<_> = tree
        .groups
        .iter()
        .map(|node| {
            json!({
                "id": node.group.id,
                "name": node.group.name,
                "hosts": node.hosts.iter().map(HostView::from).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = json!({
        "count": groups.len(),
        "hosts": tree.host_count(),
        "orphaned": tree.orphaned,
        "groups": groups
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format an import summary as JSON
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_import_json(summary: &ImportSummary) -> Result<String, MinopError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
