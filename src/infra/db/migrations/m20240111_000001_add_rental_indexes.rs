//! Migration: Index the rental lookup paths.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The open-rental check scans a user's rentals on every creation
        // request
        manager
            .create_index(
                Index::create()
                    .name("idx_rentals_user_id")
                    .table(Rentals::Table)
                    .col(Rentals::UserId)
                    .to_owned(),
            )
            .await?;

        // Loading a rental pulls its movie rows through this pointer
        manager
            .create_index(
                Index::create()
                    .name("idx_movies_rental_id")
                    .table(Movies::Table)
                    .col(Movies::RentalId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_movies_rental_id")
                    .table(Movies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_rentals_user_id")
                    .table(Rentals::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Rentals {
    Table,
    UserId,
}

#[derive(Iden)]
enum Movies {
    Table,
    RentalId,
}
