//! Request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use debitflow_core::{Debit, DebitCalculator, Loan};

/// Application state.
pub struct AppState {
    /// The debit calculator shared across requests.
    pub calculator: Arc<DebitCalculator>,
}

/// Service info response for the root route.
#[derive(Serialize)]
pub struct ServiceInfo {
    service: String,
    version: String,
}

/// Root handler.
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Request for the next debit calculation.
#[derive(Debug, Deserialize)]
pub struct NextDebitRequest {
    /// The loan to schedule a debit for.
    pub loan: Loan,
}

/// Response carrying the computed debit.
#[derive(Debug, Serialize)]
pub struct NextDebitResponse {
    /// The next scheduled debit.
    pub debit: Debit,
}

/// Compute the next debit date and amount for a loan.
///
/// Input validation failures map to `400 Bad Request`; an empty candidate
/// set is a server-side failure and maps to `500`.
pub async fn get_next_debit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NextDebitRequest>,
) -> Response {
    match state.calculator.next_debit(&request.loan) {
        Ok(debit) => (StatusCode::OK, Json(NextDebitResponse { debit })).into_response(),
        Err(e) if e.is_input_error() => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
        Err(e) => {
            warn!("Next debit calculation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("not found")),
    )
}
