//! HTTP routes.

pub mod health;
pub mod webhook;

use axum::Router;

use crate::state::AppState;

/// Builds the application router with every route mounted.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(webhook::router())
        .with_state(app_state)
}
