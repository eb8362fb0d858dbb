//! # SensorPro Client
//!
//! A Rust client for the SensorPro contacts and campaigns REST API.
//!
//! The client takes care of the session lifecycle: it signs in on first use, keeps
//! the session token together with its expiry and the per-organization API endpoint,
//! and signs in again when the token is missing or has expired. Every business
//! operation embeds the current token in the request URL and turns an API-reported
//! failure (`Result.TotalErrors > 0`) into [`error::AppError::SensorPro`].
//!
//! ## Example
//!
//! ```ignore
//! use sensorpro_client::prelude::*;
//! use serde_json::json;
//!
//! let config = Config::from_env()?;
//! let client = Client::new(config)?;
//!
//! // The first call signs in automatically
//! let contacts = client.get_contacts(&json!({})).await?;
//! client.trigger_email(&json!({ "CampaignId": 42 })).await?;
//!
//! client.logout().await;
//! ```

/// Session management, API client, configuration and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and the HTTP transport abstraction
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
