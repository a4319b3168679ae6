use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "minop")]
#[command(about = "Manage a local inventory of remote hosts and host groups")]
#[command(long_about = "minop - host inventory manager

Keeps remote hosts, organised into host groups, in a local SQLite database.
By default the database is `minop.db` next to the minop executable.

QUICK START:
  minop group add Prod                      Create a host group
  minop host add web1 --group Prod \\
      --ip 10.0.0.1 --user admin --password secret
  minop tree                                Show groups with their hosts
  minop import host.list                    Load a plain-text host list

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file, or 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Database file to use instead of the configured one
    #[arg(long, env = "MINOP_DB", global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Configuration file (default: config.yaml next to the executable)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage host groups (add, list)
    ///
    /// # Examples
    ///
    ///   minop group add Prod
    ///   minop group list -o json
    #[command(alias = "g")]
    Group(GroupArgs),

    /// Manage hosts (add, list)
    ///
    /// # Examples
    ///
    ///   minop host add web1 --group Prod --ip 10.0.0.1 --user admin --password secret
    ///   minop host list --group Prod
    #[command(alias = "h")]
    Host(HostArgs),

    /// Show host groups with their hosts
    ///
    /// Groups are sorted by name; hosts keep the order they were added in.
    /// Hosts that reference a missing group are not shown.
    #[command(alias = "t")]
    Tree,

    /// Import hosts from a plain-text host list
    ///
    /// The file holds `[group]` section headers followed by host lines of
    /// the form `user:password@address[:port]`. Lines before the first
    /// section go into the `default` group. Existing groups with the same
    /// name are reused.
    ///
    /// Example: minop import ./host.list
    Import {
        /// Host list file
        file: PathBuf,
    },

    /// Generate shell completions
    ///
    /// Example: minop completions bash > ~/.bash_completion.d/minop
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

#[derive(Args)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommands,
}

/// Host group subcommands.
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a host group
    ///
    /// Names need not be unique.
    Add {
        /// Group name
        name: String,
    },

    /// List host groups sorted by name
    #[command(alias = "ls")]
    List,
}

#[derive(Args)]
pub struct HostArgs {
    #[command(subcommand)]
    pub command: HostCommands,
}

/// Host subcommands.
#[derive(Subcommand)]
pub enum HostCommands {
    /// Add a host to a group
    ///
    /// --group is matched against group names first; a number that names
    /// no group is used as the group id as-is.
    Add(AddHostArgs),

    /// List hosts in the order they were added
    #[command(alias = "ls")]
    List {
        /// Only show hosts of this group (id or name)
        #[arg(long, short = 'g')]
        group: Option<String>,
    },
}

#[derive(Args)]
pub struct AddHostArgs {
    /// Host name
    pub name: String,

    /// Group id or name
    #[arg(long, short = 'g')]
    pub group: String,

    /// Address of the host
    #[arg(long)]
    pub ip: String,

    /// Login user
    #[arg(long, short = 'u')]
    pub user: String,

    /// Login password (stored in plaintext)
    #[arg(long, short = 'p')]
    pub password: String,

    /// SSH port (1-65535)
    #[arg(
        long,
        default_value_t = crate::inventory::DEFAULT_PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_host_add() {
        let cli = Cli::try_parse_from([
            "minop", "host", "add", "web1", "--group", "Prod", "--ip", "10.0.0.1", "-u", "admin",
            "-p", "secret",
        ])
        .unwrap();

        match cli.command {
            Commands::Host(HostArgs {
                command: HostCommands::Add(args),
            }) => {
                assert_eq!(args.name, "web1");
                assert_eq!(args.group, "Prod");
                assert_eq!(args.port, 22);
            },
            _ => panic!("expected host add"),
        }
    }

    #[test]
    fn test_port_zero_rejected() {
        let result = Cli::try_parse_from([
            "minop", "host", "add", "web1", "-g", "Prod", "--ip", "10.0.0.1", "-u", "admin", "-p",
            "secret", "--port", "0",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_global_output_after_subcommand() {
        let cli = Cli::try_parse_from(["minop", "group", "list", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
