//! Tidewear HTTP Server
//!
//! Wires the stage services together with their configured fault
//! profiles and serves the shopping and styling surfaces.

use std::{sync::Arc, time::Duration};

use application::{ShoppingService, StylingService};
use infrastructure::{
    AppConfig, DeliveryStage, PackagingStage, PrintingStage, init_telemetry,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first; telemetry settings live in it.
    // Tracing is not up yet, so a load failure is reported after init.
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let _guard = init_telemetry(&config.telemetry)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {e}"))?;

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    run(config).await
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Tidewear v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        "Configuration loaded"
    );

    // Wire the stage services with their fault profiles
    let printing = Arc::new(PrintingStage::new(config.stages.printing));
    let packaging = Arc::new(PackagingStage::new(config.stages.packaging));
    let delivery = Arc::new(DeliveryStage::new(config.stages.delivery));

    let styling = Arc::new(StylingService::new(printing, packaging));
    let styling_port: Arc<dyn application::ports::StylingPort> = styling.clone();
    let shopping = Arc::new(ShoppingService::new(styling_port, delivery));

    let state = AppState {
        shopping,
        styling,
        config: Arc::new(config.clone()),
    };

    // Build router with middleware (first added = outermost)
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
