use colored::Colorize;

use crate::features::import::ImportSummary;
use crate::inventory::{Host, HostGroup, HostTree};

/// Format a list of host groups
pub fn format_groups_pretty(groups: &[HostGroup]) -> String {
    if groups.is_empty() {
        return "Host groups (0)\n  No host groups".to_string();
    }

    let mut output = format!("Host groups ({})\n", groups.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for group in groups {
        output.push_str(&format!(
            "{:>5}  {}\n",
            group.id.to_string().dimmed(),
            group.name.bold()
        ));
    }

    output
}

/// Format a list of hosts as a table
pub fn format_hosts_pretty(hosts: &[Host]) -> String {
    if hosts.is_empty() {
        return "Hosts (0)\n  No hosts".to_string();
    }

    let mut output = format!("Hosts ({})\n", hosts.len());
    output.push_str(&format!(
        "{:>5}  {:<20} {:>5}  {:<22} {}\n",
        "ID", "Name", "Group", "Address", "User"
    ));
    output.push_str(&"─".repeat(64));
    output.push('\n');

    for host in hosts {
        output.push_str(&format!(
            "{:>5}  {:<20} {:>5}  {:<22} {}\n",
            host.id,
            host.name,
            host.group_id,
            address(host),
            host.username
        ));
    }

    output
}

/// Format a newly created host group
pub fn format_group_pretty(group: &HostGroup) -> String {
    format!(
        "{} host group {} (id {})",
        "Created".green(),
        group.name.bold(),
        group.id
    )
}

/// Format a newly created host
pub fn format_host_pretty(host: &Host) -> String {
    format!(
        "{} host {} (id {}) in group {}\n  {}: {}\n  {}: {}",
        "Created".green(),
        host.name.bold(),
        host.id,
        host.group_id,
        "IP".dimmed(),
        address(host),
        "User".dimmed(),
        host.username
    )
}

/// Format groups with their hosts as an indented tree
pub fn format_tree_pretty(tree: &HostTree) -> String {
    if tree.groups.is_empty() && tree.orphaned == 0 {
        return "Hosts (0)\n  No host groups".to_string();
    }

    let mut output = format!(
        "Hosts ({} in {} groups)\n",
        tree.host_count(),
        tree.groups.len()
    );

    for node in &tree.groups {
        output.push_str(&format!(
            "{} {}\n",
            node.group.name.bold(),
            format!("[{}]", node.group.id).dimmed()
        ));

        let last = node.hosts.len().saturating_sub(1);
        for (i, host) in node.hosts.iter().enumerate() {
            let branch = if i == last { "└─" } else { "├─" };
            output.push_str(&format!(
                "  {} {}  {}\n",
                branch,
                host.name,
                format!("{}@{}", host.username, address(host)).dimmed()
            ));
        }
    }

    if tree.orphaned > 0 {
        output.push_str(&format!(
            "{}\n",
            format!("{} host(s) reference a missing group", tree.orphaned).yellow()
        ));
    }

    output
}

/// Format an import summary
pub fn format_import_pretty(summary: &ImportSummary) -> String {
    format!(
        "{} {} host(s): {} group(s) created, {} reused",
        "Imported".green(),
        summary.hosts_created,
        summary.groups_created,
        summary.groups_reused
    )
}

fn address(host: &Host) -> String {
    if host.port == crate::inventory::DEFAULT_PORT {
        host.ip.clone()
    } else {
        format!("{}:{}", host.ip, host.port)
    }
}
