//! OpenAPI description of the rental endpoints, served through Swagger UI.

use utoipa::OpenApi;

use crate::api::handlers::rental_handler;
use crate::domain::Rental;

/// OpenAPI documentation for the Movie Rentals API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Rentals API",
        version = "0.1.0",
        description = "Rental management service: rental creation rules and rental lookups",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        rental_handler::create_rental,
        rental_handler::list_rentals,
        rental_handler::get_rental,
    ),
    components(
        schemas(
            Rental,
            rental_handler::CreateRentalRequest,
        )
    ),
    tags(
        (name = "Rentals", description = "Rental creation and lookups")
    )
)]
pub struct ApiDoc;
