//! Per-role completion insights endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::analytics;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Role;

#[derive(Serialize)]
pub struct PatternsResponse {
    pub completion_rate_by_role: Vec<RoleRate>,
}

#[derive(Serialize)]
pub struct RoleRate {
    pub role: Role,
    pub completion_rate: f64,
}

/// `GET /insights/patterns` — completion rate grouped by user role.
pub async fn patterns(
    State(ctx): State<ApiContext>,
) -> Result<Json<PatternsResponse>, ApiError> {
    let groups = analytics::role_insights(ctx.store.as_ref()).await?;

    Ok(Json(PatternsResponse {
        completion_rate_by_role: groups
            .into_iter()
            .map(|g| RoleRate {
                role: g.role,
                completion_rate: g.completion_rate,
            })
            .collect(),
    }))
}
