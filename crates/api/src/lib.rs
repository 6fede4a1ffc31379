//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Health check route
//! - Supported currency listing
//! - Currency conversion
//! - JSON error responses built from `AppError`

pub mod routes;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use currency_core::currency::CurrencyService;
use currency_shared::AppError;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion engine over the immutable rate table.
    pub currency: CurrencyService,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Renders an `AppError` as `{"error": code, "message": text}`.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}
