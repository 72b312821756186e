//! Migrate command - Drives the database schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // The migration actions control the schema themselves, so the plain
    // connect is used here
    let database = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            database.migrate_up().await?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            database.migrate_down().await?;
            tracing::info!("Rolled back the most recent migration");
        }
        MigrateAction::Status => {
            for entry in database.migration_status().await? {
                let marker = if entry.applied { "applied" } else { "pending" };
                println!("{:<48} {}", entry.name, marker);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running every migration");
            database.migrate_fresh().await?;
            tracing::info!("Database rebuilt from scratch");
        }
    }

    Ok(())
}
