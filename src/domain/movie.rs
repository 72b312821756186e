//! Movie domain entity.

use serde::{Deserialize, Serialize};

/// Movie domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub name: String,
    /// Restricted to users of adult age
    pub adults_only: bool,
    /// The open rental currently holding this movie; `None` when available
    pub rental_id: Option<i32>,
}

impl Movie {
    /// Check if the movie is free to be rented
    pub fn is_available(&self) -> bool {
        self.rental_id.is_none()
    }
}
