//! Movie repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::movie::Entity as MovieEntity;
use crate::domain::Movie;
use crate::errors::{AppError, AppResult};

/// Movie repository trait for dependency injection.
///
/// Reads only; a movie's rental pointer is updated by the rental store
/// when a rental claims it.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find movie by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>>;
}

/// Concrete implementation of MovieRepository over SeaORM
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for MovieStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        let result = MovieEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Movie::from))
    }
}
