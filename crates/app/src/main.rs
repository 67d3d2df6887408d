use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::report_service::DEFAULT_RENDER_TIMEOUT;
use services::{AppServices, Clock, ReportService, SubmissionService};
use storage::repository::RESULT_HEADERS;
use storage::sheets::SheetsConfig;
use storage::sqlite::SqliteRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://ei-results.sqlite3";
const DEFAULT_RESULTS_LIMIT: u32 = 20;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidLimit { raw: String },
    InvalidTimeout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidLimit { raw } => write!(f, "invalid --limit value: {raw}"),
            ArgsError::InvalidTimeout { raw } => {
                write!(f, "invalid EI_RENDER_TIMEOUT_SECS value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    report_dir: PathBuf,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn report_dir(&self) -> PathBuf {
        self.report_dir.clone()
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        self.services.submissions()
    }

    fn reports(&self) -> Arc<ReportService> {
        self.services.reports()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--db <sqlite_url>] [--report-dir <dir>]");
    eprintln!("  cargo run -p app -- results [--db <sqlite_url>] [--limit <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --report-dir <current directory>");
    eprintln!("  --limit {DEFAULT_RESULTS_LIMIT}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EI_DB_URL, EI_REPORT_DIR, EI_RENDER_TIMEOUT_SECS, RUST_LOG");
    eprintln!("  EI_SHEETS_SPREADSHEET_ID, EI_SHEETS_ACCESS_TOKEN  # ui appends to the sheet when both are set");
    eprintln!("  EI_SHEETS_BASE_URL, EI_SHEETS_RANGE");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Results,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "results" => Some(Self::Results),
            _ => None,
        }
    }
}

struct Args {
    db_url: String,
    report_dir: PathBuf,
    limit: u32,
    render_timeout: Duration,
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("EI_DB_URL")
            .ok()
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut report_dir = std::env::var("EI_REPORT_DIR")
            .ok()
            .map_or_else(current_dir, PathBuf::from);
        let render_timeout = match std::env::var("EI_RENDER_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ArgsError::InvalidTimeout { raw })?,
            Err(_) => DEFAULT_RENDER_TIMEOUT,
        };
        let mut limit = DEFAULT_RESULTS_LIMIT;

        while let Some(arg) = args.next() {
            match (cmd, arg.as_str()) {
                (_, "--db") => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                (Command::Ui, "--report-dir") => {
                    report_dir = PathBuf::from(require_value(args, "--report-dir")?);
                }
                (Command::Results, "--limit") => {
                    let value = require_value(args, "--limit")?;
                    limit = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLimit { raw: value.clone() })?;
                }
                (_, "--help" | "-h") => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            report_dir,
            limit,
            render_timeout,
        })
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir().join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the desktop UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    match cmd {
        Command::Ui => launch_ui(parsed).await,
        Command::Results => print_results(&parsed).await,
    }
}

async fn launch_ui(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let clock = Clock::default_clock();
    let services = if let Some(config) = SheetsConfig::from_env() {
        info!(spreadsheet = %config.spreadsheet_id, "appending results to Google Sheets");
        AppServices::new_google_sheets(config, clock, args.render_timeout)
    } else {
        prepare_sqlite_file(&args.db_url)?;
        info!(db = %args.db_url, "appending results to SQLite");
        AppServices::new_sqlite(&args.db_url, clock, args.render_timeout).await?
    };
    std::fs::create_dir_all(&args.report_dir)?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        report_dir: args.report_dir,
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("EI Self-Assessment")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

async fn print_results(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    prepare_sqlite_file(&args.db_url)?;
    let repo = SqliteRepository::connect(&args.db_url).await?;
    repo.migrate().await?;

    println!("{}", RESULT_HEADERS.join("\t"));
    for row in repo.recent_rows(args.limit).await? {
        println!("{}", row.cells().join("\t"));
    }
    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
