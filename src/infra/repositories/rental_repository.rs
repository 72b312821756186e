//! Rental repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use super::entities::{movie, rental};
use crate::domain::{NewRental, Rental};
use crate::errors::{AppError, AppResult};

/// Rental repository trait for dependency injection.
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// List all rentals, in store order
    async fn find_all(&self) -> AppResult<Vec<Rental>>;

    /// Find rental by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Rental>>;

    /// List all rentals belonging to a user
    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Rental>>;

    /// Persist a new rental, assigning its id and claiming its movies
    async fn create(&self, rental: NewRental) -> AppResult<Rental>;
}

/// Concrete implementation of RentalRepository over SeaORM
pub struct RentalStore {
    db: DatabaseConnection,
}

impl RentalStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RentalRepository for RentalStore {
    async fn find_all(&self) -> AppResult<Vec<Rental>> {
        let rows = rental::Entity::find()
            .find_with_related(movie::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Rental>> {
        let rows = rental::Entity::find_by_id(id)
            .find_with_related(movie::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().next().map(Rental::from))
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Rental>> {
        let rows = rental::Entity::find()
            .filter(rental::Column::UserId.eq(user_id))
            .find_with_related(movie::Entity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn create(&self, rental: NewRental) -> AppResult<Rental> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let model = rental::ActiveModel {
            date: Set(rental.date),
            end_date: Set(rental.end_date),
            user_id: Set(rental.user_id),
            closed: Set(rental.closed),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(AppError::from)?;

        // Claim the movies in the same transaction so a failure leaves
        // nothing behind
        movie::Entity::update_many()
            .col_expr(movie::Column::RentalId, Expr::value(model.id))
            .filter(movie::Column::Id.is_in(rental.movies_id.clone()))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        txn.commit().await.map_err(AppError::from)?;

        Ok(Rental {
            id: model.id,
            date: model.date,
            end_date: model.end_date,
            user_id: model.user_id,
            closed: model.closed,
            movies_id: rental.movies_id,
        })
    }
}
