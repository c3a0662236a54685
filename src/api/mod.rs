//! Reporting endpoint layer.
//!
//! A thin axum wrapper over the analytics computations: a root identity
//! route plus three read-only JSON operations. The router is composable —
//! `api_router()` returns a `Router` that can be mounted on any axum
//! server.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use types::ApiContext;
