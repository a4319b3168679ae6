//! Output formatting for minop.
//!
//! This module provides formatters for displaying host inventory data in
//! various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::MinopError;
use crate::features::import::ImportSummary;
use crate::inventory::{Host, HostGroup, HostTree};

pub use json::*;
pub use pretty::*;

/// Format host groups based on output format
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_groups(groups: &[HostGroup], format: OutputFormat) -> Result<String, MinopError> {
    match format {
        OutputFormat::Pretty => Ok(format_groups_pretty(groups)),
        OutputFormat::Json => format_groups_json(groups),
    }
}

/// Format hosts based on output format
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_hosts(hosts: &[Host], format: OutputFormat) -> Result<String, MinopError> {
    match format {
        OutputFormat::Pretty => Ok(format_hosts_pretty(hosts)),
        OutputFormat::Json => format_hosts_json(hosts),
    }
}

/// Format a single host group based on output format
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_group(group: &HostGroup, format: OutputFormat) -> Result<String, MinopError> {
    match format {
        OutputFormat::Pretty => Ok(format_group_pretty(group)),
        OutputFormat::Json => format_group_json(group),
    }
}

/// Format a single host based on output format
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_host(host: &Host, format: OutputFormat) -> Result<String, MinopError> {
    match format {
        OutputFormat::Pretty => Ok(format_host_pretty(host)),
        OutputFormat::Json => format_host_json(host),
    }
}

/// Format the group tree based on output format
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_tree(tree: &HostTree, format: OutputFormat) -> Result<String, MinopError> {
    match format {
        OutputFormat::Pretty => Ok(format_tree_pretty(tree)),
        OutputFormat::Json => format_tree_json(tree),
    }
}

/// Format an import summary based on output format
///
/// # Errors
///
/// Returns `MinopError::Parse` if JSON serialization fails.
pub fn format_import(summary: &ImportSummary, format: OutputFormat) -> Result<String, MinopError> {
    match format {
        OutputFormat::Pretty => Ok(format_import_pretty(summary)),
        OutputFormat::Json => format_import_json(summary),
    }
}
