use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finance_tracker::cli::{
    handle_add, handle_budget, handle_export, handle_history, handle_insights, AddArgs,
    BudgetArgs, ExportArgs, HistoryArgs,
};
use finance_tracker::config::paths::DATA_DIR_ENV;
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::services::Session;
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "Record income and expenses, browse and filter your history, \
                  see where the money goes, and check spending against monthly \
                  budget goals. Run without a command to open the dashboard."
)]
struct Cli {
    /// Directory holding settings, logs and transaction data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Record a new transaction
    Add(AddArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    History(HistoryArgs),

    /// Show totals, expenses by category and the monthly trend
    Insights,

    /// Compare a month's spending with budget goals
    Budget(BudgetArgs),

    /// Export transaction history to CSV
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the settings file with current values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match &cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir.clone()),
        None => TrackerPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    init_logging(
        cli.verbose,
        &settings,
        &paths,
        matches!(command, Commands::Tui),
    )?;

    let mut storage = Storage::new(paths.clone())?;
    storage
        .load_all()
        .context("Could not load transaction history")?;

    match command {
        Commands::Tui => finance_tracker::tui::run_tui(&storage, &settings)?,
        Commands::Add(args) => handle_add(&storage, &settings, args)?,
        Commands::History(args) => handle_history(&storage, &settings, args)?,
        Commands::Insights => handle_insights(&storage, &settings)?,
        Commands::Budget(args) => {
            let mut session = Session::new();
            handle_budget(&storage, &settings, &mut session, args)?
        }
        Commands::Export(args) => handle_export(&storage, args)?,
        Commands::Config { init } => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to: {}", paths.settings_file().display());
                println!();
            }
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Log file:          {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}

/// Set up tracing
///
/// Priority: RUST_LOG env var > --verbose flag > settings log level.
/// The dashboard owns the terminal, so it logs to a file instead of stderr.
fn init_logging(verbose: bool, settings: &Settings, paths: &TrackerPaths, tui: bool) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if tui {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())
            .with_context(|| format!("Could not open {}", paths.log_file().display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(log_file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
