//! Schema migrations, one module per step.
//!
//! Module names follow SeaORM's `m{YYYYMMDD}_{NNNNNN}_{description}`
//! convention; `Migrator` lists them in order.

use sea_orm_migration::prelude::*;

mod m20240110_000001_create_rental_tables;
mod m20240111_000001_add_rental_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240110_000001_create_rental_tables::Migration),
            Box::new(m20240111_000001_add_rental_indexes::Migration),
        ]
    }
}
