use clap::Parser;
use sheet_roster::config::{CliConfig, Settings};
use sheet_roster::server::{build_service, run_server, AppState};
use sheet_roster::utils::logger;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting sheet-roster");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match &config.config {
        Some(path) => Settings::from_file(path),
        None => Settings::from_env(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("configuration failed: {e}");
            std::process::exit(1);
        }
    };

    // Fail fast on malformed credentials instead of serving a broken store.
    let service = match build_service(&settings) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            eprintln!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState {
        roster: Arc::new(service),
    };
    run_server(&config.host, config.port, state).await
}
