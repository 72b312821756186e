//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::user::Entity as UserEntity;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// User repository trait for dependency injection.
///
/// The rental policy only ever needs a lookup by id, so the port stays
/// that narrow.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }
}
