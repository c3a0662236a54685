//! In-memory [`LearningStore`] for tests: fixed record sets, optional
//! forced failure to exercise the error path.

use async_trait::async_trait;

use crate::models::{Course, Enrollment, User};

use super::{LearningStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    fail: bool,
}

impl MemoryStore {
    pub fn new(users: Vec<User>, courses: Vec<Course>, enrollments: Vec<Enrollment>) -> Self {
        Self {
            users,
            courses,
            enrollments,
            fail: false,
        }
    }

    /// A store whose every operation fails, standing in for a lost
    /// connection.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            Err(StoreError::Unavailable("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LearningStore for MemoryStore {
    async fn count_users(&self) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.users.len() as u64)
    }

    async fn count_courses(&self) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.courses.len() as u64)
    }

    async fn count_enrollments(&self) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.enrollments.len() as u64)
    }

    async fn count_completed_enrollments(&self) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.enrollments.iter().filter(|e| e.is_completed()).count() as u64)
    }

    async fn fetch_users(&self) -> Result<Vec<User>, StoreError> {
        self.check()?;
        Ok(self.users.clone())
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>, StoreError> {
        self.check()?;
        Ok(self.courses.clone())
    }

    async fn fetch_enrollments(&self) -> Result<Vec<Enrollment>, StoreError> {
        self.check()?;
        Ok(self.enrollments.clone())
    }
}
