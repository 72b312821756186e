//! Database connection management.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// One entry of the migration status report
pub struct MigrationStatus {
    pub name: String,
    pub applied: bool,
}

/// Owns the SeaORM connection and the schema lifecycle around it
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and bring the schema up to date. The server never runs
    /// against a half-migrated database.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let database = Self::connect_without_migrations(config).await?;
        database.migrate_up().await?;

        tracing::info!("Database connected, schema up to date");
        Ok(database)
    }

    /// Connect only; migration commands drive the schema themselves.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the underlying connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration.
    pub async fn migrate_up(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration only.
    pub async fn migrate_down(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Drop everything and re-run all migrations.
    pub async fn migrate_fresh(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Every defined migration with its applied flag, in definition order.
    pub async fn migration_status(&self) -> Result<Vec<MigrationStatus>, DbErr> {
        use sea_orm::EntityTrait;
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        let report = Migrator::migrations()
            .into_iter()
            .map(|migration| {
                let name = migration.name().to_string();
                let applied = applied.contains(&name);
                MigrationStatus { name, applied }
            })
            .collect();

        Ok(report)
    }
}
