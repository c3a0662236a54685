use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::enums::EnrollmentStatus;

/// Join record linking a [`User`](super::User) to a
/// [`Course`](super::Course) with a status.
///
/// Referential integrity is assumed, not enforced: an enrollment whose
/// `user_id` or `course_id` does not resolve is dropped by the joins in
/// the analytics layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub course_id: ObjectId,
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
}

impl Enrollment {
    pub fn is_completed(&self) -> bool {
        self.status == EnrollmentStatus::Completed
    }
}
