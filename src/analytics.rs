//! Completion-rate analytics — the metrics engine.
//!
//! Pure computations over typed records, plus thin store-driven entry
//! points for the HTTP layer. Joins are in-process hash-joins with
//! inner-join semantics: an enrollment whose foreign key does not resolve
//! is dropped, not reported.

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::models::{Course, Enrollment, Role, User};
use crate::store::{LearningStore, StoreError};

/// `completed / total * 100`, defined as 0 when `total == 0`.
pub fn completion_rate(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ── Overview ────────────────────────────────────────────────────────────

/// Global counts plus the overall completion rate.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewMetrics {
    pub total_users: u64,
    pub total_courses: u64,
    pub total_enrollments: u64,
    pub completion_rate_percentage: f64,
}

/// Assemble the overview from store-side counts.
pub async fn overview(store: &dyn LearningStore) -> Result<OverviewMetrics, StoreError> {
    let total_users = store.count_users().await?;
    let total_courses = store.count_courses().await?;
    let total_enrollments = store.count_enrollments().await?;
    let completed = store.count_completed_enrollments().await?;

    Ok(OverviewMetrics {
        total_users,
        total_courses,
        total_enrollments,
        completion_rate_percentage: round2(completion_rate(completed, total_enrollments)),
    })
}

// ── Completion rate by role ─────────────────────────────────────────────

/// One role group among resolvable enrollments.
///
/// The per-group rate is left unrounded; only the overview and the
/// recommendation strings render to 2 decimals.
#[derive(Debug, Clone, Serialize)]
pub struct RoleCompletion {
    pub role: Role,
    pub total_enrollments: u64,
    pub completed: u64,
    pub completion_rate: f64,
}

/// Join enrollments to users and group completion counts by role.
///
/// Groups are emitted sorted by role string so responses are
/// deterministic. A group can only exist if at least one enrollment
/// resolved to it, so `total_enrollments > 0` for every entry.
pub fn completion_by_role(users: &[User], enrollments: &[Enrollment]) -> Vec<RoleCompletion> {
    let role_by_user: HashMap<ObjectId, Role> =
        users.iter().map(|u| (u.id, u.role)).collect();

    let mut tallies: HashMap<Role, (u64, u64)> = HashMap::new();
    for enrollment in enrollments {
        // Inner join: unresolved user references are dropped.
        let Some(role) = role_by_user.get(&enrollment.user_id) else {
            continue;
        };
        let (total, completed) = tallies.entry(*role).or_default();
        *total += 1;
        if enrollment.is_completed() {
            *completed += 1;
        }
    }

    let mut groups: Vec<RoleCompletion> = tallies
        .into_iter()
        .map(|(role, (total, completed))| RoleCompletion {
            role,
            total_enrollments: total,
            completed,
            completion_rate: completion_rate(completed, total),
        })
        .collect();
    groups.sort_by_key(|g| g.role.as_str());
    groups
}

/// Fetch the joined collections and compute the per-role breakdown.
pub async fn role_insights(store: &dyn LearningStore) -> Result<Vec<RoleCompletion>, StoreError> {
    let users = store.fetch_users().await?;
    let enrollments = store.fetch_enrollments().await?;
    Ok(completion_by_role(&users, &enrollments))
}

// ── Completion rate by course ───────────────────────────────────────────

/// Per-course enrollment tallies. A course with zero enrollments is kept,
/// with a completion rate of 0.
#[derive(Debug, Clone, Serialize)]
pub struct CourseCompletion {
    pub course_id: ObjectId,
    pub title: String,
    pub total_enrollments: u64,
    pub completed: u64,
    pub completion_rate: f64,
}

/// Join every course to its enrollments, preserving course order.
pub fn completion_by_course(
    courses: &[Course],
    enrollments: &[Enrollment],
) -> Vec<CourseCompletion> {
    let mut tallies: HashMap<ObjectId, (u64, u64)> = HashMap::new();
    for enrollment in enrollments {
        let (total, completed) = tallies.entry(enrollment.course_id).or_default();
        *total += 1;
        if enrollment.is_completed() {
            *completed += 1;
        }
    }

    courses
        .iter()
        .map(|course| {
            let (total, completed) = tallies.get(&course.id).copied().unwrap_or((0, 0));
            CourseCompletion {
                course_id: course.id,
                title: course.title.clone(),
                total_enrollments: total,
                completed,
                completion_rate: completion_rate(completed, total),
            }
        })
        .collect()
}

/// Fetch the joined collections and compute the per-course breakdown.
pub async fn course_insights(
    store: &dyn LearningStore,
) -> Result<Vec<CourseCompletion>, StoreError> {
    let courses = store.fetch_courses().await?;
    let enrollments = store.fetch_enrollments().await?;
    Ok(completion_by_course(&courses, &enrollments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnrollmentStatus;
    use crate::store::memory::MemoryStore;

    fn user(role: Role) -> User {
        User {
            id: ObjectId::new(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            role,
            specialty: None,
        }
    }

    fn course(title: &str) -> Course {
        Course {
            id: ObjectId::new(),
            title: title.into(),
            category: None,
        }
    }

    fn enrollment(user_id: ObjectId, course_id: ObjectId, status: EnrollmentStatus) -> Enrollment {
        Enrollment {
            id: ObjectId::new(),
            user_id,
            course_id,
            status,
            completion_date: None,
        }
    }

    #[test]
    fn completion_rate_is_zero_without_enrollments() {
        assert_eq!(completion_rate(0, 0), 0.0);
        // The guard applies even to nonsense inputs.
        assert_eq!(completion_rate(5, 0), 0.0);
    }

    #[test]
    fn completion_rate_stays_within_bounds() {
        for (completed, total) in [(0, 1), (1, 3), (2, 3), (7, 7), (599, 600)] {
            let rate = completion_rate(completed, total);
            assert!((0.0..=100.0).contains(&rate), "rate {rate} out of bounds");
        }
        assert_eq!(completion_rate(7, 7), 100.0);
    }

    #[test]
    fn round2_rounds_half_away() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100.0), 100.0);
    }

    #[tokio::test]
    async fn overview_on_empty_store_reports_zeroes() {
        let store = MemoryStore::default();
        let metrics = overview(&store).await.unwrap();
        assert_eq!(metrics.total_users, 0);
        assert_eq!(metrics.total_courses, 0);
        assert_eq!(metrics.total_enrollments, 0);
        assert_eq!(metrics.completion_rate_percentage, 0.0);
    }

    #[tokio::test]
    async fn overview_rounds_to_two_decimals() {
        let doctor = user(Role::Doctor);
        let c = course("Sepsis Essentials");
        let enrollments = vec![
            enrollment(doctor.id, c.id, EnrollmentStatus::Completed),
            enrollment(doctor.id, c.id, EnrollmentStatus::Completed),
            enrollment(doctor.id, c.id, EnrollmentStatus::Dropped),
        ];
        let store = MemoryStore::new(vec![doctor], vec![c], enrollments);

        let metrics = overview(&store).await.unwrap();
        assert_eq!(metrics.total_enrollments, 3);
        assert_eq!(metrics.completion_rate_percentage, 66.67);
    }

    #[test]
    fn by_role_groups_and_computes_rates() {
        let doctor = user(Role::Doctor);
        let nurse = user(Role::Nurse);
        let c = course("Antibiotic Stewardship");
        let enrollments = vec![
            enrollment(doctor.id, c.id, EnrollmentStatus::Completed),
            enrollment(doctor.id, c.id, EnrollmentStatus::Dropped),
            enrollment(nurse.id, c.id, EnrollmentStatus::Completed),
        ];

        let groups = completion_by_role(&[doctor, nurse], &enrollments);
        assert_eq!(groups.len(), 2);
        // Sorted by role string: doctor before nurse.
        assert_eq!(groups[0].role, Role::Doctor);
        assert_eq!(groups[0].total_enrollments, 2);
        assert_eq!(groups[0].completion_rate, 50.0);
        assert_eq!(groups[1].role, Role::Nurse);
        assert_eq!(groups[1].completion_rate, 100.0);
    }

    #[test]
    fn by_role_drops_unresolved_users() {
        let doctor = user(Role::Doctor);
        let c = course("Stroke Response");
        let enrollments = vec![
            enrollment(doctor.id, c.id, EnrollmentStatus::Completed),
            // References a user that was never stored.
            enrollment(ObjectId::new(), c.id, EnrollmentStatus::Completed),
        ];

        let groups = completion_by_role(&[doctor], &enrollments);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].total_enrollments, 1);

        let grouped: u64 = groups.iter().map(|g| g.total_enrollments).sum();
        assert!(grouped <= enrollments.len() as u64);
    }

    #[test]
    fn by_role_covers_each_resolvable_role_once() {
        let users: Vec<User> = Role::ALL.iter().map(|r| user(*r)).collect();
        let c = course("Pain Management Update");
        let enrollments: Vec<Enrollment> = users
            .iter()
            .map(|u| enrollment(u.id, c.id, EnrollmentStatus::InProgress))
            .collect();

        let groups = completion_by_role(&users, &enrollments);
        assert_eq!(groups.len(), Role::ALL.len());
        let grouped: u64 = groups.iter().map(|g| g.total_enrollments).sum();
        assert_eq!(grouped, enrollments.len() as u64);
    }

    #[test]
    fn by_role_is_empty_without_enrollments() {
        let users = vec![user(Role::Therapist)];
        assert!(completion_by_role(&users, &[]).is_empty());
    }

    #[test]
    fn by_course_keeps_unenrolled_courses_at_zero() {
        let popular = course("Diabetes Foundations");
        let empty = course("Rare Disease Review");
        let doctor = user(Role::Doctor);
        let enrollments = vec![
            enrollment(doctor.id, popular.id, EnrollmentStatus::Completed),
            enrollment(doctor.id, popular.id, EnrollmentStatus::Completed),
            enrollment(doctor.id, popular.id, EnrollmentStatus::Dropped),
        ];

        let results = completion_by_course(&[popular, empty], &enrollments);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].total_enrollments, 3);
        assert!((results[0].completion_rate - 66.666_666).abs() < 0.001);
        assert_eq!(results[1].total_enrollments, 0);
        assert_eq!(results[1].completion_rate, 0.0);
    }

    #[test]
    fn by_course_preserves_course_order() {
        let a = course("A");
        let b = course("B");
        let c = course("C");
        let results = completion_by_course(&[a, b, c], &[]);
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let store = MemoryStore::failing();
        assert!(overview(&store).await.is_err());
        assert!(role_insights(&store).await.is_err());
        assert!(course_insights(&store).await.is_err());
    }
}
