//! Command implementations for minop.
//!
//! Every command takes the storage handle it needs and returns the text to
//! print. An error aborts the command before anything is printed.

mod group;
mod host;

pub use group::group;
pub use host::{host, resolve_group};

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::error::MinopError;
use crate::features::completions::{
    completion_install_instructions, generate_completions, shell_from_str,
};
use crate::features::import;
use crate::inventory::HostTree;
use crate::output::{format_import, format_tree};
use crate::storage::HostStorage;

/// Execute tree command
///
/// # Errors
///
/// Returns an error if either list query fails or output formatting fails.
pub fn tree(storage: &HostStorage, format: OutputFormat) -> Result<String, MinopError> {
    let groups = storage.list_host_groups()?;
    let hosts = storage.list_hosts()?;
    let tree = HostTree::build(groups, hosts);

    if tree.orphaned > 0 {
        log::warn!("{} host(s) reference a missing group", tree.orphaned);
    }

    format_tree(&tree, format)
}

/// Execute import command
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or an insert fails.
pub fn import_hosts(
    storage: &HostStorage,
    file: &Path,
    format: OutputFormat,
) -> Result<String, MinopError> {
    let summary = import::import_file(storage, file)?;
    let target = storage
        .database()
        .path()
        .map_or_else(|| "in-memory database".to_string(), |p| p.display().to_string());
    log::info!(
        "Imported {} host(s) from {} into {target}",
        summary.hosts_created,
        file.display()
    );
    format_import(&summary, format)
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the shell is unknown.
pub fn completions(shell: &str, install: bool) -> Result<String, MinopError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        MinopError::InvalidInput(format!(
            "Unknown shell '{shell}'. Use bash, zsh, fish, powershell or elvish."
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::NewHost;
    use crate::storage::Database;

    fn storage() -> HostStorage {
        HostStorage::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_tree_json_counts() {
        let storage = storage();
        let prod = storage.create_host_group("Prod").unwrap();
        storage
            .create_host(&NewHost::new("web1", prod, "10.0.0.1", "admin", "secret"))
            .unwrap();
        storage
            .create_host(&NewHost::new("ghost", 42, "10.0.0.9", "root", "pw"))
            .unwrap();

        let output = tree(&storage, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["hosts"], 1);
        assert_eq!(value["orphaned"], 1);
    }

    #[test]
    fn test_unknown_shell() {
        let err = completions("tcsh", false).unwrap_err();
        assert!(matches!(err, MinopError::InvalidInput(_)));
    }

    #[test]
    fn test_completion_install_instructions() {
        let output = completions("bash", true).unwrap();
        assert!(output.contains("source <(minop completions bash)"));
    }
}
