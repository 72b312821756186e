//! Movie database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Movie;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub adults_only: bool,
    /// Open rental currently holding this movie (NULL = available)
    pub rental_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rental::Entity",
        from = "Column::RentalId",
        to = "super::rental::Column::Id"
    )]
    Rental,
}

impl Related<super::rental::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rental.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Movie {
    fn from(model: Model) -> Self {
        Movie {
            id: model.id,
            name: model.name,
            adults_only: model.adults_only,
            rental_id: model.rental_id,
        }
    }
}
