/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::application::config::Credentials;
use crate::error::AppError;
use crate::model::responses::ApiResult;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Body of the sign-in request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest<'a> {
    /// Organization the API user belongs to
    pub organization: &'a str,
    /// API user name
    pub user: &'a str,
    /// API user password
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            organization: &credentials.organization,
            user: &credentials.user,
            password: &credentials.password,
        }
    }
}

/// Response from the sign-in endpoint
///
/// `Token` and `APIEndpoint` are only present when `Result` reports no errors.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    /// Session token, embedded in every subsequent request URL
    #[serde(rename = "Token", default)]
    pub token: Option<String>,
    /// Token lifetime in seconds
    #[serde(rename = "ExpiresIn", default)]
    pub expires_in: Option<f64>,
    /// Per-organization API base URL, with a trailing slash
    #[serde(rename = "APIEndpoint", default)]
    pub api_endpoint: Option<String>,
    /// Outcome of the sign-in
    #[serde(rename = "Result")]
    pub result: ApiResult,
}

impl LoginResponse {
    /// Builds the session described by a successful sign-in
    ///
    /// # Arguments
    /// * `now` - Instant the expiry is computed from
    ///
    /// # Returns
    /// * `Ok(Session)` - Session expiring `ExpiresIn` seconds after `now`
    /// * `Err(AppError::SensorPro)` - If `Result` reports errors
    /// * `Err(AppError::Deserialization)` - If the token or endpoint is missing, or
    ///   `ExpiresIn` is negative or too large to compute an expiry from
    pub fn into_session(self, now: DateTime<Utc>) -> Result<Session, AppError> {
        self.result.into_checked()?;

        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Deserialization("Token missing".to_string()))?;
        let api_endpoint = self
            .api_endpoint
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::Deserialization("APIEndpoint missing".to_string()))?;
        let expires_in = self
            .expires_in
            .ok_or_else(|| AppError::Deserialization("ExpiresIn missing".to_string()))?;

        let expires_at = expiry_after(now, expires_in)
            .ok_or_else(|| AppError::Deserialization("ExpiresIn out of range".to_string()))?;
        Ok(Session::new(token, expires_at, api_endpoint))
    }
}

/// `now` plus `expires_in` seconds, or `None` when the lifetime is negative or overflows
fn expiry_after(now: DateTime<Utc>, expires_in: f64) -> Option<DateTime<Utc>> {
    let millis = expires_in * 1000.0;
    if !millis.is_finite() || millis < 0.0 || millis >= i64::MAX as f64 {
        return None;
    }
    let lifetime = Duration::try_milliseconds(millis as i64)?;
    now.checked_add_signed(lifetime)
}
