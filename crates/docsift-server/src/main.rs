//! Docsift — document metadata extraction server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;
mod worker;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Initialize configuration
    let config = docsift_core::DocsiftConfig::from_env();
    let port = config.port;

    // Build application state
    let state = Arc::new(AppState::new(config));

    // Start background extraction queue
    worker::start_extraction_worker(state.clone());

    // Build router
    let app = routes::build_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Docsift server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
