//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - SeaORM-backed repositories
//! - The in-memory store used as a test substitute

pub mod db;
pub mod repositories;

pub use db::{Database, MigrationStatus, Migrator};
pub use repositories::{
    InMemoryStore, MovieRepository, MovieStore, RentalRepository, RentalStore, UserRepository,
    UserStore,
};
