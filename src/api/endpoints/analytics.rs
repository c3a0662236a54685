//! Overview metrics endpoint.

use axum::extract::State;
use axum::Json;

use crate::analytics::{self, OverviewMetrics};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// `GET /analytics/overview` — global counts and overall completion rate.
pub async fn overview(
    State(ctx): State<ApiContext>,
) -> Result<Json<OverviewMetrics>, ApiError> {
    let metrics = analytics::overview(ctx.store.as_ref()).await?;
    Ok(Json(metrics))
}
