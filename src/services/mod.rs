//! Application services: use cases over the repository ports.
//!
//! Services orchestrate domain logic and stores behind trait seams, so
//! callers and tests choose the implementation.

mod rental_service;

pub use rental_service::{RentalManager, RentalService};
