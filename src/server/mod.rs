pub mod error;
mod routes;

use crate::adapters::{SheetsClient, TokenProvider};
use crate::config::Settings;
use crate::core::RosterService;
use crate::utils::error::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterService<SheetsClient>>,
}

/// Builds the roster service from settings. Credentials are parsed here so
/// a bad key stops the process at startup.
pub fn build_service(settings: &Settings) -> Result<RosterService<SheetsClient>> {
    let account = settings.load_service_account()?;
    let mut store = SheetsClient::new(
        &settings.spreadsheet_id,
        TokenProvider::service_account(account),
        Duration::from_secs(settings.request_timeout_secs),
    )?;
    if let Some(base_url) = &settings.base_url {
        store = store.with_base_url(base_url);
    }
    Ok(RosterService::new(store, settings.roster_options()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn run_server(host: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
