//! Dealer Server - remote record keeping for a car dealership.
//!
//! Exposes create and lookup operations for Car and Receipt records over
//! HTTP, persisting each record type to its own flat file between runs.
//! Every call is a self-contained load, compute, optionally persist cycle;
//! nothing is cached between calls, so each call observes the latest
//! on-disk state.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod store;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use dealer_engine::{Car, Receipt};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::{bootstrap, FileStore, StoreError};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<FileStore<Car>>,
    pub receipts: Arc<FileStore<Receipt>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state with both stores rooted in the configured data directory.
    pub fn new(config: Config) -> Self {
        let data_dir = Path::new(&config.data_dir);
        Self {
            cars: Arc::new(FileStore::new(data_dir.join("cars.jsonl"))),
            receipts: Arc::new(FileStore::new(data_dir.join("receipts.jsonl"))),
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Seed both stores on first run and log what is on disk.
///
/// Runs before the server accepts calls so that a fresh deployment is
/// queryable immediately. A seeding failure aborts startup.
pub async fn init_stores(state: &AppState) -> Result<(), StoreError> {
    if state
        .cars
        .ensure_initialized(bootstrap::default_cars())
        .await?
    {
        tracing::info!("cars store created with default records");
    }

    let seed_receipts = bootstrap::default_receipts(bootstrap::entropy_seed(), chrono::Utc::now());
    if state.receipts.ensure_initialized(seed_receipts).await? {
        tracing::info!("receipts store created with default records");
    }

    for car in state.cars.read_all()? {
        tracing::info!("car on file: {car}");
    }
    for receipt in state.receipts.read_all()? {
        tracing::info!("receipt on file: {receipt}");
    }

    Ok(())
}
