/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # SensorPro Client Prelude
//!
//! Convenient imports for the most commonly used types and traits.
//!
//! ## Usage
//!
//! ```rust
//! use sensorpro_client::prelude::*;
//!
//! let credentials = Credentials::new("api-key", "organization", "user", "password");
//! let config = Config::new(credentials);
//! assert!(config.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the SensorPro API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION AND CLIENT
// ============================================================================

/// Session manager and session
pub use crate::application::auth::{Auth, Session};

/// API client
pub use crate::application::client::Client;

/// Service traits implemented by the client
pub use crate::application::interfaces::campaign::CampaignService;
pub use crate::application::interfaces::contact::ContactService;

// ============================================================================
// MODELS AND TRANSPORT
// ============================================================================

/// The `Result` object of every response
pub use crate::model::responses::ApiResult;

/// HTTP transport abstraction
pub use crate::model::http::{HttpResponse, ReqwestTransport, Transport};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
