//! HTTP Handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;

use checkout_core::{tier, CheckoutError, CheckoutRequest, CheckoutResponse, Tier};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: state.sessions.is_some(),
    })
}

/// Tier catalog
pub async fn list_tiers() -> Json<&'static [Tier]> {
    Json(tier::all())
}

/// Create a hosted checkout session
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let tier = tier::find_by_price_id(&payload.price_id).ok_or_else(|| {
        let e = CheckoutError::UnknownPrice(payload.price_id.clone());
        tracing::warn!("Checkout rejected: {}", e);
        api_error(StatusCode::BAD_REQUEST, e.to_string(), "UNKNOWN_PRICE")
    })?;

    if !is_http_url(&payload.success_url) || !is_http_url(&payload.cancel_url) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Callback URLs must be absolute http(s) URLs",
            "INVALID_CALLBACK",
        ));
    }

    let sessions = state.sessions.as_ref().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Payments not configured",
            "PAYMENTS_DISABLED",
        )
    })?;

    let session = sessions
        .create_session(tier, &payload, state.price_override(tier.id))
        .await
        .map_err(|e| {
            tracing::error!(tier = tier.id, "Checkout error: {}", e);
            api_error(StatusCode::BAD_GATEWAY, e.user_message(), "CHECKOUT_ERROR")
        })?;

    Ok(Json(session.into()))
}
