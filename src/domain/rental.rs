//! Rental domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rental domain entity
///
/// Never mutated by this service once created; the closed flag is flipped
/// by a return flow that lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    /// Unique rental identifier, assigned by the store on creation
    #[schema(example = 1)]
    pub id: i32,
    /// Creation timestamp
    pub date: DateTime<Utc>,
    /// Scheduled return timestamp
    pub end_date: DateTime<Utc>,
    /// Owning user
    #[schema(example = 1)]
    pub user_id: i32,
    /// True once the rental has been returned
    pub closed: bool,
    /// Movies included, in request order
    pub movies_id: Vec<i32>,
}

impl Rental {
    /// An open rental is still active and blocks its user from renting again
    pub fn is_open(&self) -> bool {
        !self.closed
    }
}

/// Rental creation input, as accepted by the service
#[derive(Debug, Clone)]
pub struct RentalInput {
    pub user_id: i32,
    /// Movie ids in the order they were requested
    pub movies_id: Vec<i32>,
}

/// Fully-checked rental ready to be persisted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewRental {
    pub user_id: i32,
    pub date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub closed: bool,
    pub movies_id: Vec<i32>,
}
