//! SeaORM entities for the rental schema.
//!
//! Kept apart from the domain types; each model converts into its domain
//! counterpart at the repository boundary.

pub mod movie;
pub mod rental;
pub mod user;
