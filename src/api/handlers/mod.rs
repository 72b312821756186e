//! HTTP request handlers.

pub mod rental_handler;

pub use rental_handler::rental_routes;
