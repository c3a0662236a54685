//! MongoDB-backed [`LearningStore`].
//!
//! One client per process, constructed in `main` and shared behind `Arc`.
//! Collection names match the dataset the seeder writes.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

use crate::models::{Course, Enrollment, EnrollmentStatus, Outcome, User};

use super::{LearningStore, StoreError};

pub const USERS: &str = "users";
pub const COURSES: &str = "courses";
pub const ENROLLMENTS: &str = "enrollments";
pub const OUTCOMES: &str = "outcomes";

#[derive(Debug, Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connect to the store. The driver defers I/O, so this succeeding does
    /// not prove the server is reachable — call [`ping`](Self::ping) for
    /// that.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            db: client.database(database_name),
        })
    }

    /// Round-trip connectivity check against the selected database.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    fn users(&self) -> Collection<User> {
        self.db.collection(USERS)
    }

    fn courses(&self) -> Collection<Course> {
        self.db.collection(COURSES)
    }

    fn enrollments(&self) -> Collection<Enrollment> {
        self.db.collection(ENROLLMENTS)
    }

    fn outcomes(&self) -> Collection<Outcome> {
        self.db.collection(OUTCOMES)
    }

    // ── Seeder write path ───────────────────────────────────────────────
    // Only the seed-demo binary writes; the serving path never calls these.

    /// Destructively clear all four collections.
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        self.users().delete_many(doc! {}).await?;
        self.courses().delete_many(doc! {}).await?;
        self.enrollments().delete_many(doc! {}).await?;
        self.outcomes().delete_many(doc! {}).await?;
        Ok(())
    }

    pub async fn insert_users(&self, users: &[User]) -> Result<(), StoreError> {
        if users.is_empty() {
            return Ok(());
        }
        self.users().insert_many(users).await?;
        Ok(())
    }

    pub async fn insert_courses(&self, courses: &[Course]) -> Result<(), StoreError> {
        if courses.is_empty() {
            return Ok(());
        }
        self.courses().insert_many(courses).await?;
        Ok(())
    }

    pub async fn insert_enrollments(
        &self,
        enrollments: &[Enrollment],
    ) -> Result<(), StoreError> {
        if enrollments.is_empty() {
            return Ok(());
        }
        self.enrollments().insert_many(enrollments).await?;
        Ok(())
    }

    pub async fn insert_outcomes(&self, outcomes: &[Outcome]) -> Result<(), StoreError> {
        if outcomes.is_empty() {
            return Ok(());
        }
        self.outcomes().insert_many(outcomes).await?;
        Ok(())
    }
}

#[async_trait]
impl LearningStore for MongoStore {
    async fn count_users(&self) -> Result<u64, StoreError> {
        Ok(self.users().count_documents(doc! {}).await?)
    }

    async fn count_courses(&self) -> Result<u64, StoreError> {
        Ok(self.courses().count_documents(doc! {}).await?)
    }

    async fn count_enrollments(&self) -> Result<u64, StoreError> {
        Ok(self.enrollments().count_documents(doc! {}).await?)
    }

    async fn count_completed_enrollments(&self) -> Result<u64, StoreError> {
        let filter = doc! { "status": EnrollmentStatus::Completed.as_str() };
        Ok(self.enrollments().count_documents(filter).await?)
    }

    async fn fetch_users(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>, StoreError> {
        let cursor = self.courses().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn fetch_enrollments(&self) -> Result<Vec<Enrollment>, StoreError> {
        let cursor = self.enrollments().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}
