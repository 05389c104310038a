use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs, DatabaseConfig};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

use practice_stats::api::dto::{
    BadgeEvaluationDto, DashboardDto, MonthCalendarDto, PracticeEventDto, PracticeLogDto,
    PracticeTimeDto, RecordPracticeReq,
};
use practice_stats::config::PracticeStatsConfig;
use practice_stats::PracticeStats;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const MODULE_NAME: &str = "practice_stats";

/// Expand a sqlite DSN into an absolute-path DSN using a base directory.
/// - Keeps "sqlite::memory:" as-is.
/// - Normalizes backslashes into forward slashes (important on Windows).
/// - File databases get `mode=rwc` so a fresh home dir works on first run.
fn absolutize_sqlite_dsn(dsn: &str, base_dir: &Path, create_dirs: bool) -> Result<String> {
    if dsn.eq_ignore_ascii_case("sqlite::memory:") || dsn.eq_ignore_ascii_case("sqlite://:memory:")
    {
        return Ok("sqlite::memory:".to_string());
    }
    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow!("DSN must start with sqlite:// (got: {})", dsn))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };

    let mut p = PathBuf::from(path_str);
    if p.as_os_str().is_empty() {
        return Err(anyhow!("Empty SQLite path in DSN"));
    }
    if p.is_relative() {
        p = base_dir.join(p);
    }

    if let Some(dir) = p.parent() {
        if create_dirs {
            std::fs::create_dir_all(dir)?;
        }
    }

    let mut out = String::from("sqlite://");
    out.push_str(&p.to_string_lossy().replace('\\', "/"));
    match query {
        Some(q) if q.contains("mode=") => {
            out.push('?');
            out.push_str(q);
        }
        Some(q) => {
            out.push('?');
            out.push_str(q);
            out.push_str("&mode=rwc");
        }
        None => out.push_str("?mode=rwc"),
    }
    Ok(out)
}

/// Practice Stats - practice time, streaks and badges
#[derive(Parser)]
#[command(name = "practice-stats")]
#[command(about = "Practice Stats - practice time, streaks and badges")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use the in-memory store instead of the configured database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard pipeline: buckets, practiced dates, streak, badges
    Dashboard {
        #[arg(short, long)]
        user: Uuid,
    },
    /// Minutes practiced today, this week, this month and in total
    Time {
        #[arg(short, long)]
        user: Uuid,
    },
    /// Award any streak badges the user qualifies for
    Badges {
        #[arg(short, long)]
        user: Uuid,
    },
    /// Save (create or overwrite) the practice log for one day
    Log {
        #[arg(short, long)]
        user: Uuid,
        /// Day of practice (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Minutes practiced
        #[arg(short, long)]
        minutes: u32,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Month view of practiced days
    Calendar {
        #[arg(short, long)]
        user: Uuid,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
    },
    /// Check configuration
    Check,
}

#[derive(Serialize)]
struct LogOutput {
    log: PracticeLogDto,
    events: Vec<PracticeEventDto>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, &config.home_path());
    tracing::debug!("Practice Stats starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => check_config(&config),
        command => run_command(&config, command).await,
    }
}

async fn open_module(config: &AppConfig) -> Result<PracticeStats> {
    let module_cfg: PracticeStatsConfig = config.module_config(MODULE_NAME)?;

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("No database configuration found, using the in-memory store");
        return PracticeStats::in_memory(&module_cfg);
    };

    let dsn = resolve_dsn(db_config, &config.home_path())?;
    let mut opts = ConnectOptions::new(dsn.clone());
    opts.max_connections(db_config.max_conns.unwrap_or(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    tracing::info!("Connecting to database: {}", dsn);
    let conn = Database::connect(opts).await?;
    PracticeStats::with_database(&module_cfg, conn).await
}

fn resolve_dsn(cfg: &DatabaseConfig, base_dir: &Path) -> Result<String> {
    let raw = cfg.url.trim();
    if raw.is_empty() {
        return Err(anyhow!("Database URL not configured"));
    }
    if !raw.starts_with("sqlite:") {
        return Err(anyhow!("Unsupported database type: {}", raw));
    }
    absolutize_sqlite_dsn(raw, base_dir, true)
}

async fn run_command(config: &AppConfig, command: Commands) -> Result<()> {
    let module = open_module(config).await?;
    let client = module.client();

    match command {
        Commands::Dashboard { user } => {
            print_json(&DashboardDto::from(client.dashboard(user).await?))
        }
        Commands::Time { user } => {
            print_json(&PracticeTimeDto::from(client.practice_time(user).await?))
        }
        Commands::Badges { user } => print_json(&BadgeEvaluationDto::from(
            client.evaluate_badges(user).await?,
        )),
        Commands::Log {
            user,
            date,
            minutes,
            notes,
        } => {
            let mut events = module.subscribe();
            let req = RecordPracticeReq {
                log_date: date,
                minutes,
                notes,
            };
            let log = client.record_practice(req.into_new_log(user)).await?;

            let mut published = Vec::new();
            while let Ok(event) = events.try_recv() {
                published.push(PracticeEventDto::from(&event));
            }
            print_json(&LogOutput {
                log: log.into(),
                events: published,
            })
        }
        Commands::Calendar { user, year, month } => print_json(&MonthCalendarDto::from(
            client.practice_calendar(user, year, month).await?,
        )),
        Commands::Check => check_config(config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    let module_cfg: PracticeStatsConfig = config.module_config(MODULE_NAME)?;
    module_cfg.clock_offset()?;
    if let Some(db) = &config.database {
        resolve_dsn(db, &config.home_path())?;
    }

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
