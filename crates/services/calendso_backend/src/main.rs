// File: services/calendso_backend/src/main.rs
mod app;
mod app_state;

use app::build_app;
use app_state::AppState;
use calendso_common::{config_error, logging, CalendsoError};
use calendso_config::load_config;
use calendso_db::{DbClientFactory, EventTypeRepository, UserRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Logging may not be up yet when config loading fails.
        eprintln!("calendso-backend: {}", e);
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CalendsoError> {
    let config = Arc::new(load_config().map_err(|e| config_error(format!("Failed to load config: {}", e)))?);
    let _log_guard = logging::init_from_config(&config);

    let db_client = DbClientFactory::new().from_app_config(&config).await?;
    info!("Database pool ready");

    let state = AppState::new(config.clone(), db_client);

    if config.database.as_ref().is_some_and(|db| db.init_schema) {
        let profiles = state.profile_state();
        profiles.users.init_schema().await?;
        profiles.event_types.init_schema().await?;
        info!("Database schema initialized");
    }

    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
