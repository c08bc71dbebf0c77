//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use debitflow_core::DebitCalculator;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `calculator` - The debit calculator (injectable clock and all), shared
///   across requests
pub fn create_router(calculator: Arc<DebitCalculator>) -> Router {
    let state = Arc::new(AppState { calculator });

    Router::new()
        .route("/", get(handlers::index))
        .route("/get_next_debit", post(handlers::get_next_debit))
        // Health
        .route("/health", get(handlers::health))
        // Everything else
        .fallback(handlers::not_found)
        // State
        .with_state(state)
}
