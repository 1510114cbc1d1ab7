//! Feeburn API Server
//!
//! Main entry point for the Feeburn project finance service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feeburn_api::{AppState, create_router};
use feeburn_core::finance::FinanceEngine;
use feeburn_core::notify::{ChangeNotifier, run_listener};
use feeburn_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feeburn=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    let engine = FinanceEngine::new(config.engine);
    info!(
        stoppage_loss_factor = %config.engine.stoppage_loss_factor,
        "Finance engine configured"
    );

    // Log project changes as they are announced
    let notifier = ChangeNotifier::default();
    tokio::spawn(run_listener(notifier.subscribe(), |change| {
        info!(
            project_id = %change.project_id,
            kind = ?change.kind,
            "Project metrics are stale"
        );
    }));

    // Create router
    let app = create_router(AppState::new(engine, notifier));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
