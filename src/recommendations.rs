//! Rule-based course recommendations.
//!
//! A deterministic filter over per-course completion rates: every course
//! under the threshold gets a redesign suggestion, then a fixed list of
//! engagement tips is appended. No learned or adaptive behavior, no state
//! across calls.

use crate::analytics::{course_insights, round2, CourseCompletion};
use crate::store::{LearningStore, StoreError};

/// Courses completing below this percentage get a redesign suggestion.
pub const LOW_COMPLETION_THRESHOLD: f64 = 50.0;

/// Always appended after the course-specific suggestions, in this order.
pub const ENGAGEMENT_TIPS: [&str; 3] = [
    "Send reminder nudges to learners with incomplete courses.",
    "Personalize course suggestions based on user role and specialty.",
    "Encourage completion by offering micro-certificates for each module.",
];

/// Derive the full recommendation list from per-course tallies.
///
/// Course-specific entries follow the input order; the engagement tips are
/// always present, always last.
pub fn derive(courses: &[CourseCompletion]) -> Vec<String> {
    let mut recommendations: Vec<String> = courses
        .iter()
        .filter(|c| c.completion_rate < LOW_COMPLETION_THRESHOLD)
        .map(|c| {
            format!(
                "Consider redesigning course '{}' - low completion rate ({:.2}%).",
                c.title,
                round2(c.completion_rate)
            )
        })
        .collect();

    recommendations.extend(ENGAGEMENT_TIPS.iter().map(|tip| (*tip).to_string()));
    recommendations
}

/// Fetch course tallies from the store and derive recommendations.
pub async fn for_store(store: &dyn LearningStore) -> Result<Vec<String>, StoreError> {
    let courses = course_insights(store).await?;
    Ok(derive(&courses))
}
