//! One-shot demo seeder.
//!
//! Destructively clears the four collections, then inserts synthetic
//! users, courses, enrollments, and one outcome per completed enrollment.

use std::process::ExitCode;

use chrono::{Datelike, Utc};
use clap::Parser;

use cme_insights::config::Settings;
use cme_insights::seed;
use cme_insights::store::{MongoStore, StoreError};

#[derive(Parser, Debug)]
#[command(
    name = "seed-demo",
    about = "Populate the CME Insights store with synthetic demo data",
    version
)]
struct Args {
    /// Number of users to insert.
    #[arg(long, default_value_t = seed::DEFAULT_USERS)]
    users: usize,

    /// Number of courses to insert.
    #[arg(long, default_value_t = seed::DEFAULT_COURSES)]
    courses: usize,

    /// Number of enrollments to insert.
    #[arg(long, default_value_t = seed::DEFAULT_ENROLLMENTS)]
    enrollments: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    cme_insights::init_tracing();
    let args = Args::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(%err, "configuration error");
            return ExitCode::FAILURE;
        }
    };

    let store = match MongoStore::connect(&settings.mongo_uri, &settings.database_name).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(%err, "cannot construct store client");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(&store, &args).await {
        tracing::error!(%err, "seeding failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(store: &MongoStore, args: &Args) -> Result<(), StoreError> {
    store.ping().await?;
    tracing::info!(database = %store.database_name(), "connected to store");

    store.clear_all().await?;
    tracing::info!("cleared existing collections");

    let mut rng = rand::thread_rng();
    let year = Utc::now().year();

    let users = seed::generate_users(&mut rng, args.users);
    store.insert_users(&users).await?;
    tracing::info!(count = users.len(), "inserted users");

    let courses = seed::generate_courses(&mut rng, args.courses);
    store.insert_courses(&courses).await?;
    tracing::info!(count = courses.len(), "inserted courses");

    let enrollments =
        seed::generate_enrollments(&mut rng, args.enrollments, &users, &courses, year);
    store.insert_enrollments(&enrollments).await?;
    tracing::info!(count = enrollments.len(), "inserted enrollments");

    let outcomes = seed::generate_outcomes(&mut rng, &enrollments);
    store.insert_outcomes(&outcomes).await?;
    tracing::info!(count = outcomes.len(), "inserted outcomes for completed enrollments");

    Ok(())
}
