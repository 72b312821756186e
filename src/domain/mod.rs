//! Core domain entities of the rental workflow.
//!
//! DDD: kept free of HTTP and persistence concerns; the only behavior
//! here is what the rental policy itself needs.

pub mod movie;
pub mod rental;
pub mod user;

pub use movie::Movie;
pub use rental::{NewRental, Rental, RentalInput};
pub use user::User;
