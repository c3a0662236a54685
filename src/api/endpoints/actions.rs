//! Recommendation endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::recommendations;

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationItem>,
}

#[derive(Serialize)]
pub struct RecommendationItem {
    pub recommendation: String,
}

/// `GET /actions/recommendations` — redesign suggestions for
/// low-completion courses plus the fixed engagement tips.
pub async fn recommendations(
    State(ctx): State<ApiContext>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let recommendations = recommendations::for_store(ctx.store.as_ref()).await?;

    Ok(Json(RecommendationsResponse {
        recommendations: recommendations
            .into_iter()
            .map(|recommendation| RecommendationItem { recommendation })
            .collect(),
    }))
}
