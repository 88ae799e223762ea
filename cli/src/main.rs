//! Orchestrating entry point: collect one joke per category, save the
//! batch to a sheet, read it back and display it.
//!
//! Every hard failure kind (configuration, network, API processing,
//! persistence) is caught here, logged as a single line naming the kind,
//! and turned into exit code 1. The closing banner is emitted on every path.

use std::fmt;
use std::process;

use log::{error, info};

use jokes_cli::{config, logging, sheet, transport::UreqTransport};
use jokes_core::{to_rows, ApiClient, ApiError, Collector, COLUMNS};

/// Every failure kind the run can end with, unified for the top-level
/// handler.
#[derive(Debug)]
enum RunError {
    Config(config::ConfigError),
    Api(ApiError),
    Sheet(sheet::SheetError),
}

impl RunError {
    fn kind(&self) -> &'static str {
        match self {
            RunError::Config(_) => "configuration error",
            RunError::Api(ApiError::Network { .. }) => "network error",
            RunError::Api(ApiError::Processing { .. }) => "API processing error",
            RunError::Sheet(_) => "persistence error",
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Config(e) => write!(f, "{e}"),
            RunError::Api(e) => write!(f, "{e}"),
            RunError::Sheet(e) => write!(f, "{e}"),
        }
    }
}

impl From<config::ConfigError> for RunError {
    fn from(e: config::ConfigError) -> Self {
        RunError::Config(e)
    }
}

impl From<ApiError> for RunError {
    fn from(e: ApiError) -> Self {
        RunError::Api(e)
    }
}

impl From<sheet::SheetError> for RunError {
    fn from(e: sheet::SheetError) -> Self {
        RunError::Sheet(e)
    }
}

fn banner() {
    info!("{}", "=".repeat(60));
}

fn run() -> Result<(), RunError> {
    let config = config::load()?;

    let client = ApiClient::new(&config.api_url, Box::new(UreqTransport::new()));
    let collector = Collector::new(client);

    info!("--- phase 1: collect from the API and save ---");
    let jokes = collector.collect_all_jokes()?;
    info!("collected {} jokes", jokes.len());
    sheet::save(&config.output_file, &COLUMNS, &to_rows(&jokes))?;
    info!("--- phase 1 done ---");

    info!("--- phase 2: read back and display ---");
    sheet::read_and_display(&config.output_file)?;
    info!("--- phase 2 done ---");

    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = logging::setup() {
        eprintln!("failed to initialize logging: {e}");
        process::exit(1);
    }

    banner();
    info!("STARTING JOKE EXTRACTION");
    banner();

    let failed = match run() {
        Ok(()) => false,
        Err(e) => {
            error!("run failed ({}): {e}", e.kind());
            true
        }
    };

    banner();
    info!("DONE");
    banner();

    if failed {
        process::exit(1);
    }
}
