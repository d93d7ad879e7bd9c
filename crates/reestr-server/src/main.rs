//! # Reestr Server
//!
//! Main entry point for the Reestr organization directory.

use reestr_config::ConfigLoader;
use reestr_core::{telemetry::init_telemetry, ReestrError, ReestrResult};
use reestr_server::{app, startup};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Telemetry may not be up yet when configuration fails.
        eprintln!("Application error: {}", e);
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> ReestrResult<()> {
    let config = ConfigLoader::from_default_location().load()?;

    init_telemetry(&config.observability.telemetry(&config.app.name))?;

    startup::print_banner();
    info!("Starting Reestr server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if config.observability.metrics_enabled {
        reestr_service::metrics::register_metrics();
    }

    let router = app::build_router(&config)?;

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ReestrError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    startup::print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ReestrError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
