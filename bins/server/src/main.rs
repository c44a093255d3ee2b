//! Bunchi API Server
//!
//! Main entry point for the GL posting validation service.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bunchi_api::{AppState, create_router};
use bunchi_core::accounts::{THAI_STANDARD_VERSION, thai_standard};
use bunchi_core::duplicate::DuplicateDetector;
use bunchi_core::ledger::GlValidationEngine;
use bunchi_db::{ClientRepository, DocumentRepository, GlEntryRepository, connect};
use bunchi_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bunchi=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Connect to database
    let db = connect(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Connected to database");

    let chart = Arc::new(thai_standard());
    info!(version = THAI_STANDARD_VERSION, accounts = chart.len(), "Chart of accounts loaded");

    let ledger = Arc::new(GlEntryRepository::new(db.clone()));
    let engine = GlValidationEngine::new(
        Arc::clone(&chart),
        Arc::new(ClientRepository::new(db.clone())),
        ledger.clone(),
    )
    .with_strict_period_lock(config.validation.strict_period_lock);
    let detector = DuplicateDetector::new(Arc::new(DocumentRepository::new(db)))
        .with_window_days(config.validation.duplicate_window_days);

    info!(
        strict_period_lock = config.validation.strict_period_lock,
        duplicate_window_days = config.validation.duplicate_window_days,
        "Validation configured"
    );

    // Create application state
    let state = AppState {
        chart,
        engine: Arc::new(engine),
        detector: Arc::new(detector),
        ledger: Some(ledger),
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
