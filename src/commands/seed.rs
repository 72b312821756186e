//! Seed command - Loads a small starter catalog.
//!
//! Inserts a couple of users and a handful of movies for manual testing,
//! and only when the tables are still empty.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::{movie, user};
use crate::infra::Database;

/// Name and birth date of each sample user
const SAMPLE_USERS: &[(&str, (i32, u32, u32))] = &[
    ("Joana Silva", (1995, 3, 12)),
    ("Pedro Santos", (2012, 8, 30)),
];

/// Name and adults-only flag of each sample movie
const SAMPLE_MOVIES: &[(&str, bool)] = &[
    ("The General", false),
    ("Modern Times", false),
    ("Nosferatu", true),
    ("Metropolis", false),
    ("The Kid", false),
];

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let database = Database::connect_without_migrations(&config).await?;
    let db = database.get_connection();

    let existing =
        user::Entity::find().count(&db).await? + movie::Entity::find().count(&db).await?;
    if existing > 0 {
        tracing::warn!("Database is not empty, skipping seed");
        return Ok(());
    }

    for (name, (year, month, day)) in SAMPLE_USERS {
        let birth_date = NaiveDate::from_ymd_opt(*year, *month, *day)
            .ok_or_else(|| AppError::internal("Invalid sample birth date"))?;

        user::ActiveModel {
            name: Set((*name).to_string()),
            birth_date: Set(birth_date),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    for (name, adults_only) in SAMPLE_MOVIES {
        movie::ActiveModel {
            name: Set((*name).to_string()),
            adults_only: Set(*adults_only),
            rental_id: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    tracing::info!(
        users = SAMPLE_USERS.len(),
        movies = SAMPLE_MOVIES.len(),
        "Seed data inserted"
    );

    Ok(())
}
