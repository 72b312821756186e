//! Movie Rentals API
//!
//! A rental management service built on clean architecture: the ordered
//! business-rule checks guarding every new rental, plus read access to
//! rental records, exposed over HTTP.
//!
//! # Layout
//!
//! - **domain**: users, movies, and rentals with their policy behavior
//! - **services**: the rental-creation checks and rental lookups
//! - **infra**: SeaORM stores, migrations, and the in-memory substitute
//! - **api**: axum routes, handlers, and the validated-JSON extractor
//! - **errors**: the closed `AppError` enum and its wire mapping
//! - **config**, **cli**, **commands**: environment settings and the
//!   `serve` / `migrate` / `seed` entry points
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Load the sample catalog
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Convenience re-exports
pub use api::AppState;
pub use config::Config;
pub use domain::{Movie, Rental, RentalInput, User};
pub use errors::{AppError, AppResult};
