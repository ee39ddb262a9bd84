use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use content_tracker_core::constants::ENV_DB_PATH;
use content_tracker_core::{Clock, SystemClock, TrackerConfig};
use content_tracker_service::SequenceTracker;
use content_tracker_storage::{EntryStore, Storage, StorageOptions};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod commands;

#[derive(Parser)]
#[command(name = "content-tracker")]
#[command(about = "Continuation-day tracker for generated content ideas", long_about = None)]
struct Cli {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true, env = ENV_DB_PATH)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    Setup,
    /// Last day number used before today, for one or every category
    CurrentDay { category: Option<String> },
    /// Log today's idea for a category, replacing any earlier one from today
    Log {
        category: String,
        #[arg(allow_negative_numbers = true)]
        day: i64,
        title: String,
    },
    /// Check whether a title was already logged
    Check { title: String },
    /// List logged entries, newest first
    List {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Entry counts and highest day per category
    Stats,
    /// Log a JSON batch of generated ideas
    Import { file: PathBuf },
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }
    Ok(())
}

/// Open the database, running migrations first.
pub(crate) fn open_storage(config: &TrackerConfig, clock: &dyn Clock) -> Result<Storage> {
    ensure_db_dir(&config.db_path)?;
    let options =
        StorageOptions { pool_size: config.pool_size, busy_timeout_ms: config.busy_timeout_ms };
    Storage::with_options(&config.db_path, clock.today(), options)
        .with_context(|| format!("opening database {}", config.db_path.display()))
}

pub(crate) fn open_tracker(config: &TrackerConfig) -> Result<SequenceTracker> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store: Arc<dyn EntryStore> = Arc::new(open_storage(config, clock.as_ref())?);
    Ok(SequenceTracker::new(store, clock, config.categories.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = TrackerConfig::from_env()?;
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }

    match cli.command {
        Commands::Setup => commands::setup::run_setup(&config)?,
        Commands::CurrentDay { category } => {
            commands::query::run_current_day(&config, category.as_deref()).await?;
        },
        Commands::Log { category, day, title } => {
            commands::log::run_log(&config, &category, day, &title).await?;
        },
        Commands::Check { title } => commands::query::run_check(&config, &title).await?,
        Commands::List { category, limit } => {
            commands::query::run_list(&config, category.as_deref(), limit).await?;
        },
        Commands::Stats => commands::query::run_stats(&config).await?,
        Commands::Import { file } => commands::log::run_import(&config, &file).await?,
    }

    Ok(())
}
