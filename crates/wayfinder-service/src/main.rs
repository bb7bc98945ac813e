//! Facility wayfinding HTTP service binary.
//!
//! # Configuration
//!
//! - `WAYFINDER_FACILITY_PATH` - JSON facility definition (default: built-in hospital layout)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8001)
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint settings

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use wayfinder_service::{router, SERVICE_NAME};
use wayfinder_service_shared::{
    init_logging, init_metrics, AppState, AppStateError, LoggingConfig, MetricsConfig,
};

const DEFAULT_PORT: u16 = 8001;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service(SERVICE_NAME);
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let facility_path = env::var("WAYFINDER_FACILITY_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty());
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    info!(
        facility = facility_path.as_deref().unwrap_or("builtin"),
        port = port,
        "starting wayfinding service"
    );

    // A facility that fails validation must never be served.
    let state = load_state(facility_path.as_deref()).map_err(|e| {
        error!(error = %e, "failed to load facility");
        e
    })?;

    let info = state.registry().info();
    info!(
        locations = info.locations,
        connections = info.connections,
        source = state.source(),
        "application state loaded"
    );

    let app = router(state, &metrics_config.path);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

fn load_state(facility_path: Option<&str>) -> Result<AppState, AppStateError> {
    match facility_path {
        Some(path) => AppState::load(path),
        None => AppState::builtin(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
