//! Grouping of hosts under their host groups.

use std::collections::HashMap;

use super::{Host, HostGroup};

/// A host group together with the hosts that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    pub group: HostGroup,
    pub hosts: Vec<Host>,
}

/// Hosts arranged under their groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostTree {
    /// Groups in the order they were given.
    pub groups: Vec<GroupNode>,
    /// Number of hosts whose `group_id` matched no group.
    pub orphaned: usize,
}

impl HostTree {
    /// Attach each host to its group.
    ///
    /// Group order is preserved (storage returns them sorted by name) and
    /// hosts keep their relative order. Hosts referring to a missing group
    /// are left out and counted in [`HostTree::orphaned`].
    #[must_use]
    pub fn build(groups: Vec<HostGroup>, hosts: Vec<Host>) -> Self {
        let mut index: HashMap<i64, usize> = HashMap::with_capacity(groups.len());
        let mut nodes: Vec<GroupNode> = Vec::with_capacity(groups.len());

        for group in groups {
            index.insert(group.id, nodes.len());
            nodes.push(GroupNode {
                group,
                hosts: Vec::new(),
            });
        }

        let mut orphaned = 0;
        for host in hosts {
            match index.get(&host.group_id) {
                Some(&i) => nodes[i].hosts.push(host),
                None => orphaned += 1,
            }
        }

        Self {
            groups: nodes,
            orphaned,
        }
    }

    /// Total number of hosts placed in the tree.
    #[must_use]
    pub fn host_count(&self) -> usize {
        self.groups.iter().map(|node| node.hosts.len()).sum()
    }
}
