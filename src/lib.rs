//! CME Insights — read-only analytics over a CME learning dataset.
//!
//! Reads users, courses, enrollments, and outcomes from MongoDB and exposes
//! three computations over HTTP: global completion-rate overview, completion
//! rate by clinical role, and rule-based course recommendations. A separate
//! `seed-demo` binary populates the store with synthetic records.

pub mod analytics;
pub mod api;
pub mod config;
pub mod models;
pub mod recommendations;
pub mod seed;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a binary: `RUST_LOG` wins, otherwise the default
/// filter from [`config::default_log_filter`].
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
