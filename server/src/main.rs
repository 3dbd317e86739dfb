//! Dealer Server binary.
//!
//! Seeds the record stores on first run, then serves the dealer operations
//! over HTTP until interrupted.

use dealer_server::config::Config;
use dealer_server::{app, init_stores, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dealer_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Dealer Server on {}:{}", config.host, config.port);

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);

    // Stores must be seeded before the first call arrives
    init_stores(&state).await?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
