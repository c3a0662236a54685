use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::enums::Role;

/// A learner. Produced by the seed generator, read-only everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub specialty: Option<String>,
}
