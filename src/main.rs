use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use shared_expenses::cli::{
    handle_export_command, handle_purchase_command, ExportArgs, PurchaseCommands,
};
use shared_expenses::config::{ExpensePaths, Settings};
use shared_expenses::logging;
use shared_expenses::storage::Storage;
use shared_expenses::ExpenseResult;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Shared household expense tracker",
    long_about = "Tracks purchases made by two people on shared cards, compares \
                  each person's spending against a monthly limit, and exports \
                  the records to CSV, XLSX or JSON."
)]
struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true, env = "SHARED_EXPENSES_DB")]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Purchase(PurchaseCommands),

    /// Export purchases to a file
    Export(ExportArgs),

    /// Write the settings file and create the database
    Init,

    /// Show current configuration and paths
    Config,
}

/// Settings for this run, plus the reason defaults were used instead
///
/// With an explicit `--db` the config directory is optional, so a missing
/// home directory or an unreadable settings file falls back to defaults.
fn load_settings(
    paths: &ExpenseResult<ExpensePaths>,
    explicit_db: bool,
) -> Result<(Settings, Option<String>)> {
    let loaded = match paths {
        Ok(paths) => Settings::load_or_create(paths).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match loaded {
        Ok(settings) => Ok((settings, None)),
        Err(reason) if explicit_db => Ok((Settings::default(), Some(reason))),
        Err(reason) => Err(anyhow!(reason)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new();
    let (settings, fallback) = load_settings(&paths, cli.db.is_some())?;

    logging::init(settings.log_format, cli.verbose);
    if let Some(reason) = fallback {
        warn!(%reason, "using default settings");
    }

    let db_path = match (&cli.db, &paths) {
        (Some(db), _) => db.clone(),
        (None, Ok(paths)) => settings.database_path(paths),
        (None, Err(e)) => return Err(anyhow!(e.to_string())),
    };
    debug!(path = %db_path.display(), "resolved database path");

    match cli.command {
        Some(Commands::Purchase(cmd)) => {
            let storage = Storage::open(&db_path)?;
            handle_purchase_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let storage = Storage::open(&db_path)?;
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Init) => {
            let paths = paths?;
            if paths.is_initialized() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }

            Storage::open(&db_path)?;
            println!("Database ready at:   {}", db_path.display());
        }
        Some(Commands::Config) => {
            let paths = paths?;
            println!("Shared Expenses Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Database file:    {}", db_path.display());
            println!("Export directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log format:      {:?}", settings.log_format);
        }
        None => {
            println!("Shared Expenses - household expense tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add --help' to record a purchase.");
        }
    }

    Ok(())
}
