//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you only want the REST server
//! (with OpenAPI/Swagger UI). The workspace's main `medtrack-run` binary is
//! the production entry point and additionally loads `.env` configuration.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use medtrack_core::{initial_page_size_from_env_value, CoreConfig, MedicineService, SystemClock};

/// Main entry point for the medtrack REST API server.
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:3000).
///
/// # Environment Variables
/// - `MEDTRACK_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `MEDTRACK_PAGE_SIZE`: Initial page size (default: 10)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configured page size is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEDTRACK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting medtrack REST API on {}", addr);

    let page_size = initial_page_size_from_env_value(std::env::var("MEDTRACK_PAGE_SIZE").ok())?;
    let cfg = Arc::new(CoreConfig::new(page_size)?);

    let service = Arc::new(MedicineService::new(cfg, Arc::new(SystemClock)));
    let app = router(AppState { service });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
