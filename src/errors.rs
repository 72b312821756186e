//! The application-wide error type and its HTTP mapping.
//!
//! The rental-policy variants carry fixed messages that are part of the
//! public API contract; clients match on the `name` field of the response
//! body, never on free text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// All failures the service reports
/// SOLID - Open/Closed: new failure kinds are new variants, not edits
#[derive(Error, Debug)]
pub enum AppError {
    // Rental policy
    #[error("The user already have a rental!")]
    PendentRental,

    #[error("Cannot see that movie.")]
    InsufficientAge,

    #[error("Movie already in a rental.")]
    MovieInRental,

    // Lookups; one variant per aggregate so each message stays fixed
    #[error("User not found.")]
    UserNotFound,

    #[error("Movie not found.")]
    MovieNotFound,

    #[error("Rental not found.")]
    RentalNotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Store failures
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body: the flat `{ name, message }` shape clients key on
#[derive(Debug, Serialize)]
struct ErrorResponse {
    name: &'static str,
    message: String,
}

impl AppError {
    /// Get the error name reported to clients
    pub fn name(&self) -> &'static str {
        match self {
            AppError::PendentRental => "PendentRentalError",
            AppError::InsufficientAge => "InsufficientAgeError",
            AppError::MovieInRental => "MovieInRentalError",
            AppError::UserNotFound | AppError::MovieNotFound | AppError::RentalNotFound => {
                "NotFoundError"
            }
            AppError::Validation(_) => "ValidationError",
            AppError::Database(_) => "DatabaseError",
            AppError::Internal(_) => "InternalError",
        }
    }

    /// HTTP status used on the wire
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UserNotFound | AppError::MovieNotFound | AppError::RentalNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::PendentRental | AppError::MovieInRental => StatusCode::CONFLICT,
            AppError::InsufficientAge => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; internal details never leak
    fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "A database error occurred".to_string(),
            AppError::Internal(_) => "An internal error occurred".to_string(),

            // Policy and validation messages go to the client verbatim
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Store and internal failures keep their details on the server side
        if matches!(self, AppError::Database(_) | AppError::Internal(_)) {
            tracing::error!("{:?}", self);
        }

        let body = ErrorResponse {
            name: self.name(),
            message: self.user_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Crate-wide result alias
pub type AppResult<T> = Result<T, AppError>;

/// Shorthand constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
