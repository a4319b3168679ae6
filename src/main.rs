use clap::Parser;
use colored::Colorize;

use minop::cli::args::{Cli, Commands};
use minop::cli::commands;
use minop::config::{Config, Paths};
use minop::error::MinopError;
use minop::storage::{Database, HostStorage};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MinopError> {
    let cli = Cli::parse();
    let paths = Paths::default();

    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_path)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
        command => {
            let db_path = cli.db.unwrap_or_else(|| config.database_path(&paths));
            Paths::ensure_parent(&db_path)?;
            let storage = HostStorage::with_database(Database::open_at(&db_path)?);

            match command {
                Commands::Group(args) => commands::group(&storage, args.command, format)?,
                Commands::Host(args) => commands::host(&storage, args.command, format)?,
                Commands::Tree => commands::tree(&storage, format)?,
                Commands::Import { file } => commands::import_hosts(&storage, &file, format)?,
                Commands::Completions { .. } => String::new(),
            }
        },
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
