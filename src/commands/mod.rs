//! Implementations behind the CLI subcommands.

pub mod migrate;
pub mod seed;
pub mod serve;
