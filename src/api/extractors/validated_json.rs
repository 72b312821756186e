//! Request payload extraction with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// JSON extractor that rejects payloads failing their declared rules.
///
/// Malformed JSON and failed field validations both surface as the API's
/// validation error, so handlers only ever see well-formed input.
///
/// ```rust,ignore
/// async fn create_rental(
///     ValidatedJson(payload): ValidatedJson<CreateRentalRequest>,
/// ) -> AppResult<Json<Rental>> {
///     // payload already passed its `validator` rules
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(reject)?;

        match payload.validate() {
            Ok(()) => Ok(ValidatedJson(payload)),
            Err(errors) => Err(AppError::validation(summarize(&errors))),
        }
    }
}

/// Map axum's JSON rejection onto the flat validation error
fn reject(rejection: JsonRejection) -> AppError {
    AppError::validation(rejection.body_text())
}

/// One comma-separated line out of all failed fields; declared messages
/// take precedence over the generic fallback
fn summarize(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            match &failure.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("{field} is invalid")),
            }
        }
    }
    messages.join(", ")
}
