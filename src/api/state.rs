//! Application state - Dependency injection container.
//!
//! Provides centralized access to the application services.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, MovieStore, RentalStore, UserStore};
use crate::services::{RentalManager, RentalService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Rental service
    pub rental_service: Arc<dyn RentalService>,
}

impl AppState {
    /// Create new application state with a manually injected service.
    ///
    /// Tests use this to run the full router over the in-memory store.
    pub fn new(rental_service: Arc<dyn RentalService>) -> Self {
        Self { rental_service }
    }

    /// Wire the SeaORM-backed stores from a live database connection.
    pub fn from_database(database: &Database, config: &Config) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let movies = Arc::new(MovieStore::new(database.get_connection()));
        let rentals = Arc::new(RentalStore::new(database.get_connection()));

        let rental_service = Arc::new(RentalManager::new(
            users,
            movies,
            rentals,
            config.rental_days_per_movie,
        ));

        Self { rental_service }
    }
}
