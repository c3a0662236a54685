use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::enums::OutcomeType;

/// Post-completion measurement tied to a completed enrollment.
///
/// Written by the seed generator, one per completed enrollment. The
/// analytics layer never reads outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub course_id: ObjectId,
    pub outcome_score: i32,
    pub outcome_type: OutcomeType,
}
