//! Application settings loaded from the environment.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_RENTAL_DAYS_PER_MOVIE, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Rental duration granted per movie in a request, in days
    pub rental_days_per_movie: i64,
}

impl Config {
    /// Load configuration from the environment, falling back to the
    /// development defaults. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: string_var("DATABASE_URL", DEFAULT_DATABASE_URL),
            server_host: string_var("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: parsed_var("SERVER_PORT", DEFAULT_SERVER_PORT),
            rental_days_per_movie: parsed_var(
                "RENTAL_DAYS_PER_MOVIE",
                DEFAULT_RENTAL_DAYS_PER_MOVIE,
            ),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

// The connection string embeds credentials, keep it out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("rental_days_per_movie", &self.rental_days_per_movie)
            .finish()
    }
}

fn string_var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Unset and unparsable values both fall back to the default
fn parsed_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
