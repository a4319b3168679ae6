//! Host group CLI command implementation.

use crate::cli::args::{GroupCommands, OutputFormat};
use crate::error::MinopError;
use crate::inventory::HostGroup;
use crate::output::{format_group, format_groups};
use crate::storage::HostStorage;

/// Execute the group command.
///
/// # Errors
///
/// Returns an error if the storage operation fails.
pub fn group(
    storage: &HostStorage,
    cmd: GroupCommands,
    format: OutputFormat,
) -> Result<String, MinopError> {
    match cmd {
        GroupCommands::Add { name } => add_group(storage, &name, format),
        GroupCommands::List => format_groups(&storage.list_host_groups()?, format),
    }
}

fn add_group(storage: &HostStorage, name: &str, format: OutputFormat) -> Result<String, MinopError> {
    if name.trim().is_empty() {
        return Err(MinopError::InvalidInput(
            "Host group name cannot be empty".to_string(),
        ));
    }

    let id = storage.create_host_group(name)?;
    let group = HostGroup {
        id,
        name: name.to_string(),
    };

    format_group(&group, format)
}
