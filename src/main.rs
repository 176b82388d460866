//! Main entry point for the medtrack record store service.
//!
//! Constructs the shared record store once at startup and serves the REST
//! API over it. The store lives for the life of the process; there is no
//! separate persistence layer or teardown.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use medtrack_core::{initial_page_size_from_env_value, CoreConfig, MedicineService, SystemClock};

/// Main entry point for the medtrack application.
///
/// # Environment Variables
/// - `MEDTRACK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MEDTRACK_PAGE_SIZE`: Initial page size for the first-page query
///   (default: 10)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medtrack_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("MEDTRACK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting medtrack REST on {}", rest_addr);

    let page_size = initial_page_size_from_env_value(std::env::var("MEDTRACK_PAGE_SIZE").ok())?;
    let cfg = Arc::new(CoreConfig::new(page_size)?);

    let service = Arc::new(MedicineService::new(cfg, Arc::new(SystemClock)));
    let app = router(AppState { service });

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
