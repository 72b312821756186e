//! In-memory store implementing all three repository ports.
//!
//! A single shared state backs users, movies and rentals so that creating
//! a rental can claim its movies the way the SQL store does. The test
//! suite swaps it in behind the service; it also works for local
//! experiments without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MovieRepository, RentalRepository, UserRepository};
use crate::domain::{Movie, NewRental, Rental, User};
use crate::errors::AppResult;

#[derive(Default)]
struct MemoryState {
    users: RwLock<HashMap<i32, User>>,
    movies: RwLock<HashMap<i32, Movie>>,
    /// Kept as a Vec so listing preserves insertion order
    rentals: RwLock<Vec<Rental>>,
}

/// Thread-safe in-memory implementation of the store ports
#[derive(Default, Clone)]
pub struct InMemoryStore {
    state: Arc<MemoryState>,
}

impl InMemoryStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user record
    pub async fn insert_user(&self, user: User) {
        self.state.users.write().await.insert(user.id, user);
    }

    /// Seed a movie record
    pub async fn insert_movie(&self, movie: Movie) {
        self.state.movies.write().await.insert(movie.id, movie);
    }

    /// Seed a rental record as-is; movie pointers are not touched
    pub async fn insert_rental(&self, rental: Rental) {
        self.state.rentals.write().await.push(rental);
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.state.users.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl MovieRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        Ok(self.state.movies.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl RentalRepository for InMemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Rental>> {
        Ok(self.state.rentals.read().await.clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Rental>> {
        Ok(self
            .state
            .rentals
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Rental>> {
        Ok(self
            .state
            .rentals
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, rental: NewRental) -> AppResult<Rental> {
        // Both locks are held across the whole write, mirroring the SQL
        // store's transaction
        let mut rentals = self.state.rentals.write().await;
        let mut movies = self.state.movies.write().await;

        let id = rentals.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = Rental {
            id,
            date: rental.date,
            end_date: rental.end_date,
            user_id: rental.user_id,
            closed: rental.closed,
            movies_id: rental.movies_id,
        };

        for movie_id in &created.movies_id {
            if let Some(movie) = movies.get_mut(movie_id) {
                movie.rental_id = Some(id);
            }
        }

        rentals.push(created.clone());
        Ok(created)
    }
}
