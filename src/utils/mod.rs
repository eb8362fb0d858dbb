/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
