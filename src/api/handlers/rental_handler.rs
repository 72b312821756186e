//! Rental handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Rental, RentalInput};
use crate::errors::AppResult;

/// Rental creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    /// Renting user id
    #[validate(range(min = 1, message = "userId must be a positive id"))]
    #[schema(example = 1)]
    pub user_id: i32,
    /// Movie ids to rent, in order; at least one is required
    #[validate(length(min = 1, message = "At least one movie is required"))]
    pub movies_id: Vec<i32>,
}

/// Create rental routes
pub fn rental_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals).post(create_rental))
        .route("/:id", get(get_rental))
}

/// Create a new rental
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "Rentals",
    request_body = CreateRentalRequest,
    responses(
        (status = 201, description = "Rental created", body = Rental),
        (status = 400, description = "Validation error"),
        (status = 403, description = "User not old enough for an adult-only movie"),
        (status = 404, description = "User or movie not found"),
        (status = 409, description = "User already has an open rental, or a movie is already rented")
    )
)]
pub async fn create_rental(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRentalRequest>,
) -> AppResult<(StatusCode, Json<Rental>)> {
    let rental = state
        .rental_service
        .create_rental(RentalInput {
            user_id: payload.user_id,
            movies_id: payload.movies_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(rental)))
}

/// List all rentals
#[utoipa::path(
    get,
    path = "/rentals",
    tag = "Rentals",
    responses(
        (status = 200, description = "All rentals, in store order", body = Vec<Rental>)
    )
)]
pub async fn list_rentals(State(state): State<AppState>) -> AppResult<Json<Vec<Rental>>> {
    let rentals = state.rental_service.get_rentals().await?;

    Ok(Json(rentals))
}

/// Get a rental by id
#[utoipa::path(
    get,
    path = "/rentals/{id}",
    tag = "Rentals",
    params(
        ("id" = i32, Path, description = "Rental ID")
    ),
    responses(
        (status = 200, description = "The rental", body = Rental),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Rental>> {
    let rental = state.rental_service.get_rental_by_id(id).await?;

    Ok(Json(rental))
}
