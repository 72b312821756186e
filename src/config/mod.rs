//! Configuration: environment-backed settings plus fixed policy constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
