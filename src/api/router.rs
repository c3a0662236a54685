//! Reporting API router.
//!
//! Four read-only routes, no middleware: the boundary carries no
//! authentication, pagination, or input validation. Every operation is a
//! single stateless computation over a snapshot of the store.

use axum::routing::get;
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the reporting router around a shared store handle.
pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::root::identity))
        .route("/analytics/overview", get(endpoints::analytics::overview))
        .route("/insights/patterns", get(endpoints::insights::patterns))
        .route(
            "/actions/recommendations",
            get(endpoints::actions::recommendations),
        )
        .with_state(ctx)
}
