//! Supported currency listing and conversion routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use currency_shared::{AppError, MoneyValue};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::{AppState, error_response};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/currencies/convert", post(convert))
}

/// Response for the supported currency listing.
#[derive(Debug, Serialize)]
pub struct SupportedCurrenciesResponse {
    /// Currency codes in rate table order.
    pub currency_codes: Vec<String>,
}

/// Request body for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Amount to convert.
    pub from: MoneyValue,
    /// Target currency code.
    pub to_code: String,
}

/// GET `/currencies` - List all supported currency codes.
async fn list_currencies(State(state): State<AppState>) -> impl IntoResponse {
    info!("Getting supported currencies...");
    let response = SupportedCurrenciesResponse {
        currency_codes: state.currency.supported_currencies(),
    };
    (StatusCode::OK, Json(json!(response)))
}

/// POST `/currencies/convert` - Convert an amount into another currency.
async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let err = AppError::Validation(rejection.body_text());
            warn!(error = %err, "conversion request rejected");
            return error_response(&err);
        }
    };

    match state.currency.convert(&request.from, &request.to_code) {
        Ok(result) => {
            info!(
                from = %request.from.currency_code,
                to = %request.to_code,
                "conversion request successful"
            );
            (StatusCode::OK, Json(json!(result))).into_response()
        }
        Err(e) => {
            let err = AppError::from(e);
            warn!(
                error = %err,
                from = %request.from.currency_code,
                to = %request.to_code,
                "conversion request failed"
            );
            error_response(&err)
        }
    }
}
