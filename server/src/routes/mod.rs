//! HTTP route wiring.

mod dealer;
mod health;

use crate::AppState;
use axum::Router;

/// Assemble all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(dealer::routes())
}
