//! Import of plain-text host lists into storage.

mod parser;

pub use parser::{parse_host_line, parse_host_list, GroupEntry, HostEntry, DEFAULT_GROUP};

use std::path::Path;

use serde::Serialize;

use crate::error::MinopError;
use crate::inventory::NewHost;
use crate::storage::HostStorage;

/// What an import did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Groups that were newly created.
    pub groups_created: usize,
    /// Groups that already existed and were reused.
    pub groups_reused: usize,
    /// Hosts created.
    pub hosts_created: usize,
}

/// Read and import a host list file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or an insert fails.
pub fn import_file(storage: &HostStorage, path: &Path) -> Result<ImportSummary, MinopError> {
    let text = std::fs::read_to_string(path)?;
    let groups = parse_host_list(&text)?;
    import_groups(storage, &groups)
}

/// Store parsed groups and their hosts.
///
/// A group whose name already exists is reused (oldest match); otherwise it
/// is created. Hosts are named after their address. Each insert commits on
/// its own, so rows written before a failure remain.
///
/// # Errors
///
/// Returns the first storage error encountered.
pub fn import_groups(
    storage: &HostStorage,
    groups: &[GroupEntry],
) -> Result<ImportSummary, MinopError> {
    let mut summary = ImportSummary::default();

    for group in groups {
        let group_id = match storage.find_host_groups_by_name(&group.name)?.first() {
            Some(existing) => {
                summary.groups_reused += 1;
                existing.id
            },
            None => {
                summary.groups_created += 1;
                storage.create_host_group(&group.name)?
            },
        };

        log::debug!(
            "Importing {} host(s) into group {} (id {group_id})",
            group.hosts.len(),
            group.name
        );

        for entry in &group.hosts {
            let host = NewHost::new(
                entry.address.as_str(),
                group_id,
                entry.address.as_str(),
                entry.user.as_str(),
                entry.password.as_str(),
            )
            .with_port(entry.port);
            storage.create_host(&host)?;
            summary.hosts_created += 1;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn storage() -> HostStorage {
        HostStorage::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_import_creates_groups_and_hosts() {
        let storage = storage();
        let groups = parse_host_list("[web]\nroot:pw@10.0.0.1\nroot:pw@10.0.0.2:2222\n").unwrap();

        let summary = import_groups(&storage, &groups).unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                groups_created: 1,
                groups_reused: 0,
                hosts_created: 2,
            }
        );

        let stored = storage.list_host_groups().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "web");

        let hosts = storage.list_hosts().unwrap();
        assert_eq!(hosts[0].name, "10.0.0.1");
        assert_eq!(hosts[0].ip, "10.0.0.1");
        assert_eq!(hosts[0].group_id, stored[0].id);
        assert_eq!(hosts[1].port, 2222);
    }

    #[test]
    fn test_import_reuses_existing_group() {
        let storage = storage();
        let existing = storage.create_host_group("web").unwrap();
        let groups = parse_host_list("[web]\nroot:pw@10.0.0.1\n").unwrap();

        let summary = import_groups(&storage, &groups).unwrap();

        assert_eq!(summary.groups_reused, 1);
        assert_eq!(summary.groups_created, 0);
        assert_eq!(storage.list_host_groups().unwrap().len(), 1);
        assert_eq!(storage.list_hosts().unwrap()[0].group_id, existing);
    }

    #[test]
    fn test_import_file_reads_from_disk() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("host.list");
        std::fs::write(&path, "admin:pw@192.168.0.10\n").unwrap();
        let storage = storage();

        let summary = import_file(&storage, &path).unwrap();

        assert_eq!(summary.hosts_created, 1);
        assert_eq!(storage.list_host_groups().unwrap()[0].name, DEFAULT_GROUP);
    }

    #[test]
    fn test_import_missing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = import_file(&storage(), &temp_dir.path().join("nope.list"));

        assert!(matches!(result, Err(MinopError::Io(_))));
    }

    #[test]
    fn test_parse_error_writes_nothing() {
        let storage = storage();
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("host.list");
        std::fs::write(&path, "[web]\nroot:pw@10.0.0.1\nbad line\n").unwrap();

        assert!(import_file(&storage, &path).is_err());
        assert!(storage.list_host_groups().unwrap().is_empty());
    }
}
