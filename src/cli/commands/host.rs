//! Host CLI command implementation.

use crate::cli::args::{AddHostArgs, HostCommands, OutputFormat};
use crate::error::MinopError;
use crate::inventory::NewHost;
use crate::output::{format_host, format_hosts};
use crate::storage::HostStorage;

/// Execute the host command.
///
/// # Errors
///
/// Returns an error if the group cannot be resolved or the storage operation fails.
pub fn host(
    storage: &HostStorage,
    cmd: HostCommands,
    format: OutputFormat,
) -> Result<String, MinopError> {
    match cmd {
        HostCommands::Add(args) => add_host(storage, args, format),
        HostCommands::List { group: None } => format_hosts(&storage.list_hosts()?, format),
        HostCommands::List { group: Some(group) } => {
            let group_id = resolve_group(storage, &group)?;
            format_hosts(&storage.list_hosts_in_group(group_id)?, format)
        },
    }
}

/// Turn a `--group` argument into a group id.
///
/// The value is matched against group names first. Only when no group has
/// that name is a numeric value taken as an id, without checking it exists.
///
/// # Errors
///
/// Returns `MinopError::NotFound` when nothing matches and the value is not
/// a number, and `MinopError::InvalidInput` when several groups share the name.
pub fn resolve_group(storage: &HostStorage, group: &str) -> Result<i64, MinopError> {
    let matches = storage.find_host_groups_by_name(group)?;
    match matches.as_slice() {
        [] => group
            .parse::<i64>()
            .map_err(|_| MinopError::NotFound(format!("host group '{group}'"))),
        [only] => Ok(only.id),
        many => {
            let ids: Vec<String> = many.iter().map(|g| g.id.to_string()).collect();
            Err(MinopError::InvalidInput(format!(
                "Host group name '{group}' is ambiguous (ids {}); pass an id instead",
                ids.join(", ")
            )))
        },
    }
}

fn add_host(
    storage: &HostStorage,
    args: AddHostArgs,
    format: OutputFormat,
) -> Result<String, MinopError> {
    if args.name.trim().is_empty() {
        return Err(MinopError::InvalidInput("Host name cannot be empty".to_string()));
    }

    let group_id = resolve_group(storage, &args.group)?;
    let new_host = NewHost::new(args.name, group_id, args.ip, args.user, args.password)
        .with_port(args.port);

    let id = storage.create_host(&new_host)?;

    format_host(&new_host.into_host(id), format)
}
