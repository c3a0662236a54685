//! Store access for the learning dataset.
//!
//! [`LearningStore`] is the read seam the analytics layer computes over;
//! [`MongoStore`] is the production implementation. The seeder's write path
//! lives on `MongoStore` directly so the trait stays read-only.

pub mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Course, Enrollment, User};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the four collections, as consumed by the analytics layer.
///
/// Counts are answered store-side; the join computations fetch whole
/// collections and join in-process. Outcomes have no read path.
#[async_trait]
pub trait LearningStore: Send + Sync {
    async fn count_users(&self) -> Result<u64, StoreError>;
    async fn count_courses(&self) -> Result<u64, StoreError>;
    async fn count_enrollments(&self) -> Result<u64, StoreError>;

    /// Count of enrollments with `status == "completed"`.
    async fn count_completed_enrollments(&self) -> Result<u64, StoreError>;

    async fn fetch_users(&self) -> Result<Vec<User>, StoreError>;
    async fn fetch_courses(&self) -> Result<Vec<Course>, StoreError>;
    async fn fetch_enrollments(&self) -> Result<Vec<Enrollment>, StoreError>;
}
