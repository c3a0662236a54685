//! Synthetic seed-data generation for demos.
//!
//! Pure generation, parameterized over the rng so tests can run it
//! deterministically; the `seed-demo` binary owns the store writes.
//! Pools and weights follow the demo dataset this service reports over:
//! 4 clinical roles, 5 specialties, 5 course categories, enrollment status
//! weighted 0.6 completed / 0.3 in-progress / 0.1 dropped, one outcome per
//! completed enrollment.

use chrono::{Datelike, Days, NaiveDate};
use mongodb::bson::oid::ObjectId;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::models::{Course, Enrollment, EnrollmentStatus, Outcome, OutcomeType, Role, User};

pub const DEFAULT_USERS: usize = 200;
pub const DEFAULT_COURSES: usize = 20;
pub const DEFAULT_ENROLLMENTS: usize = 600;

const SPECIALTIES: [&str; 5] = [
    "cardiology",
    "oncology",
    "endocrinology",
    "neurology",
    "orthopedics",
];

const CATEGORIES: [&str; 5] = [
    "cardiology",
    "oncology",
    "diabetes",
    "mental health",
    "orthopedics",
];

const FIRST_NAMES: [&str; 16] = [
    "Ada", "Brian", "Carmen", "Deepa", "Elias", "Farah", "Grace", "Hugo", "Imani", "Jonas",
    "Karin", "Luis", "Mei", "Nadia", "Omar", "Priya",
];

const LAST_NAMES: [&str; 16] = [
    "Alvarez", "Bennett", "Chen", "Dubois", "Eriksen", "Fischer", "Gupta", "Haddad", "Ivanova",
    "Johnson", "Kowalski", "Lindgren", "Moreau", "Nakamura", "Okafor", "Petrov",
];

const TITLE_LEADS: [&str; 8] = [
    "Foundations of",
    "Advances in",
    "Managing",
    "Essentials of",
    "Updates in",
    "Practical",
    "Evidence-Based",
    "Interdisciplinary",
];

const TITLE_TOPICS: [&str; 10] = [
    "Cardiac Care",
    "Oncology Screening",
    "Diabetes Management",
    "Mental Health Triage",
    "Joint Replacement Recovery",
    "Stroke Response",
    "Pain Medicine",
    "Antibiotic Stewardship",
    "Palliative Care",
    "Sleep Disorders",
];

const STATUSES: [EnrollmentStatus; 3] = [
    EnrollmentStatus::Completed,
    EnrollmentStatus::InProgress,
    EnrollmentStatus::Dropped,
];

const STATUS_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];

fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn random_date_in_year(rng: &mut impl Rng, year: i32) -> NaiveDate {
    // Both bounds exist for every year the seeder will ever see.
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    let days = NaiveDate::from_ymd_opt(year, 12, 31)
        .map(|d| d.ordinal())
        .unwrap_or(365);
    start
        .checked_add_days(Days::new(rng.gen_range(0..days) as u64))
        .unwrap_or(start)
}

pub fn generate_users(rng: &mut impl Rng, count: usize) -> Vec<User> {
    (0..count)
        .map(|_| {
            let first = *pick(rng, &FIRST_NAMES);
            let last = *pick(rng, &LAST_NAMES);
            User {
                id: ObjectId::new(),
                name: format!("{first} {last}"),
                email: format!(
                    "{}.{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                role: *pick(rng, &Role::ALL),
                specialty: Some((*pick(rng, &SPECIALTIES)).to_string()),
            }
        })
        .collect()
}

pub fn generate_courses(rng: &mut impl Rng, count: usize) -> Vec<Course> {
    (0..count)
        .map(|_| Course {
            id: ObjectId::new(),
            title: format!("{} {}", pick(rng, &TITLE_LEADS), pick(rng, &TITLE_TOPICS)),
            category: Some((*pick(rng, &CATEGORIES)).to_string()),
        })
        .collect()
}

/// Enroll random users in random courses. Every enrollment gets a random
/// date within `year`, regardless of status (demo data; the analytics never
/// reads the date). Returns empty when there is nothing to reference.
pub fn generate_enrollments(
    rng: &mut impl Rng,
    count: usize,
    users: &[User],
    courses: &[Course],
    year: i32,
) -> Vec<Enrollment> {
    if users.is_empty() || courses.is_empty() {
        return Vec::new();
    }

    // STATUS_WEIGHTS is constant, positive, and non-empty.
    let Ok(status_index) = WeightedIndex::new(STATUS_WEIGHTS) else {
        return Vec::new();
    };

    (0..count)
        .map(|_| Enrollment {
            id: ObjectId::new(),
            user_id: pick(rng, users).id,
            course_id: pick(rng, courses).id,
            status: STATUSES[status_index.sample(rng)],
            completion_date: Some(random_date_in_year(rng, year)),
        })
        .collect()
}

/// One outcome per completed enrollment: score uniform in 60..=100, type
/// uniform over the three outcome categories.
pub fn generate_outcomes(rng: &mut impl Rng, enrollments: &[Enrollment]) -> Vec<Outcome> {
    enrollments
        .iter()
        .filter(|e| e.is_completed())
        .map(|e| Outcome {
            id: ObjectId::new(),
            user_id: e.user_id,
            course_id: e.course_id,
            outcome_score: rng.gen_range(60..=100),
            outcome_type: *pick(rng, &OutcomeType::ALL),
        })
        .collect()
}
