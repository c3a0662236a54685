//! Root identity endpoint.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct IdentityResponse {
    pub message: String,
}

/// `GET /` — static identity/health response.
pub async fn identity() -> Json<IdentityResponse> {
    Json(IdentityResponse {
        message: format!("{} API is running", config::APP_NAME),
    })
}
