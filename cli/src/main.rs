//! Agro Report — CLI
//!
//! Serves the mock reporting API from the command line, mainly to look at
//! what the detail, list and crop entry screens receive.
//!
//! ```sh
//! agro-report report r-001
//! agro-report assessment a-001
//! agro-report reports --page 2 --per-page 2
//! agro-report check-form '{"farm_name": "", "area_hectares": 0}'
//! agro-report --check
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use agro_report::domain::{BaseApi, CropEntryForm, ReportingApi};
use agro_report::shared::FormValues;
use agro_report::{
    default_config_path, init_tracing, AppConfig, DetailedApi, MockReportingApi, Paginator,
};

/// Agro Report — farm assessment reports over the mock API.
#[derive(Parser, Debug)]
#[command(name = "agro-report", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "AGRO_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a detailed report as JSON.
    Report { id: String },
    /// Print a detailed assessment as JSON.
    Assessment { id: String },
    /// List reports one page at a time.
    Reports {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Defaults to `pagination.items_per_page` from the config.
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Validate crop entry form values (JSON object) as on submit.
    CheckForm { values: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                std::process::exit(1);
            }
            AppConfig::default()
        }
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file    : {}", config_path.display());
        println!("   Log level      : {}", config.logging.level);
        println!("   Items per page : {}", config.pagination.items_per_page);
        println!("   API latency    : {} ms", config.api.simulated_latency_ms);
        return Ok(());
    }

    let Some(command) = cli.command else {
        error!("No command given, see --help");
        return Ok(());
    };

    let base: Arc<BaseApi> = Arc::new(MockReportingApi::from_config(&config.api));
    let api = DetailedApi::new(base);

    match command {
        Command::Report { id } => {
            let report = api.get_report_by_id(&id).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Assessment { id } => {
            let assessment = api.get_assessment_by_id(&id).await?;
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Command::Reports { page, per_page } => {
            let reports = api.list_reports().await?;
            let per_page = per_page.unwrap_or(config.pagination.items_per_page);
            let mut list = Paginator::new(&reports, per_page)?;
            if !list.go_to_page(page) {
                info!("Page {} out of range, showing page {}", page, list.current_page());
            }
            println!("{}", serde_json::to_string_pretty(&list.page())?);
        }
        Command::CheckForm { values } => {
            let values: FormValues = serde_json::from_str(&values)?;
            let mut engine = CropEntryForm::validation_engine();
            let errors = engine.touch_all(&values)?;
            println!("{}", serde_json::to_string_pretty(errors)?);
        }
    }

    Ok(())
}
