//! Rental service - Handles rental-related business logic.
//!
//! SOLID (SRP): Rental creation rules and rental lookups only.
//! The creation checks run in a fixed order, and that order is part of the
//! public contract: it decides which error is reported when several
//! preconditions fail at once.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::config::MIN_RENTAL_DAYS;
use crate::domain::{NewRental, Rental, RentalInput};
use crate::errors::{AppError, AppResult};
use crate::infra::{MovieRepository, RentalRepository, UserRepository};

/// Rental service trait for dependency injection.
#[async_trait]
pub trait RentalService: Send + Sync {
    /// Run the rental-creation checks and persist the rental on success
    async fn create_rental(&self, input: RentalInput) -> AppResult<Rental>;

    /// List all rentals, in store order
    async fn get_rentals(&self) -> AppResult<Vec<Rental>>;

    /// Get a single rental by id
    async fn get_rental_by_id(&self, id: i32) -> AppResult<Rental>;
}

/// Concrete implementation of RentalService over the three store ports.
///
/// DIP: depends on the repository traits, never on a concrete store.
pub struct RentalManager {
    users: Arc<dyn UserRepository>,
    movies: Arc<dyn MovieRepository>,
    rentals: Arc<dyn RentalRepository>,
    /// Rental duration granted per movie, in days
    days_per_movie: i64,
}

impl RentalManager {
    /// Create new rental service instance
    pub fn new(
        users: Arc<dyn UserRepository>,
        movies: Arc<dyn MovieRepository>,
        rentals: Arc<dyn RentalRepository>,
        days_per_movie: i64,
    ) -> Self {
        Self {
            users,
            movies,
            rentals,
            days_per_movie,
        }
    }

    /// A user with an open rental may not start another one. Runs before
    /// everything else, including the user-existence lookup.
    async fn ensure_user_can_rent(&self, user_id: i32) -> AppResult<()> {
        let rentals = self.rentals.find_by_user_id(user_id).await?;
        if rentals.iter().any(Rental::is_open) {
            return Err(AppError::PendentRental);
        }
        Ok(())
    }

    /// Per-movie checks: the movie must exist, adult-only titles require an
    /// of-age user (fetched lazily, only when needed), and the movie must
    /// not be held by another rental.
    async fn ensure_movie_rentable(&self, movie_id: i32, user_id: i32) -> AppResult<()> {
        let movie = self
            .movies
            .find_by_id(movie_id)
            .await?
            .ok_or(AppError::MovieNotFound)?;

        if movie.adults_only {
            let user = self
                .users
                .find_by_id(user_id)
                .await?
                .ok_or(AppError::UserNotFound)?;

            if !user.is_of_age(Utc::now().date_naive()) {
                return Err(AppError::InsufficientAge);
            }
        }

        if !movie.is_available() {
            return Err(AppError::MovieInRental);
        }

        Ok(())
    }
}

#[async_trait]
impl RentalService for RentalManager {
    async fn create_rental(&self, input: RentalInput) -> AppResult<Rental> {
        self.ensure_user_can_rent(input.user_id).await?;

        // Request order, stopping at the first movie that fails
        for movie_id in &input.movies_id {
            self.ensure_movie_rentable(*movie_id, input.user_id).await?;
        }

        let date = Utc::now();
        let days = (self.days_per_movie * input.movies_id.len() as i64).max(MIN_RENTAL_DAYS);

        self.rentals
            .create(NewRental {
                user_id: input.user_id,
                date,
                end_date: date + Duration::days(days),
                closed: false,
                movies_id: input.movies_id,
            })
            .await
    }

    async fn get_rentals(&self) -> AppResult<Vec<Rental>> {
        self.rentals.find_all().await
    }

    async fn get_rental_by_id(&self, id: i32) -> AppResult<Rental> {
        self.rentals
            .find_by_id(id)
            .await?
            .ok_or(AppError::RentalNotFound)
    }
}
