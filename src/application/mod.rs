/// Session management
pub mod auth;
/// Client for the SensorPro API
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
