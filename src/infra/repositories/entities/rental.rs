//! Rental database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Rental;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rentals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub user_id: i32,
    pub closed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie::Entity")]
    Movie,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a rental row plus its movie rows to the domain entity
impl From<(Model, Vec<super::movie::Model>)> for Rental {
    fn from((rental, movies): (Model, Vec<super::movie::Model>)) -> Self {
        Rental {
            id: rental.id,
            date: rental.date,
            end_date: rental.end_date,
            user_id: rental.user_id,
            closed: rental.closed,
            movies_id: movies.into_iter().map(|m| m.id).collect(),
        }
    }
}
