//! Shared building blocks for the Creashift binaries and crates.

pub mod types;
pub mod utils;
pub mod env;
