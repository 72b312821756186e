//! Persistence ports and their implementations.
//!
//! Each aggregate gets a narrow trait plus a SeaORM-backed store;
//! `in_memory` is a substitutable implementation of all three ports.

pub(crate) mod entities;
mod in_memory;
mod movie_repository;
mod rental_repository;
mod user_repository;

pub use in_memory::InMemoryStore;
pub use movie_repository::{MovieRepository, MovieStore};
pub use rental_repository::{RentalRepository, RentalStore};
pub use user_repository::{UserRepository, UserStore};
