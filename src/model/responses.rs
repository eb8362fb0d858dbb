/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::http::HttpResponse;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

/// The `Result` object every SensorPro response carries
///
/// Only `TotalErrors` is interpreted; the remaining fields (error codes, messages,
/// per-item details) are endpoint specific and kept exactly as received.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct ApiResult(Value);

impl ApiResult {
    /// Wraps a raw `Result` object
    #[must_use]
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Extracts the `Result` object from a decoded response body
    ///
    /// # Returns
    /// * `Ok(ApiResult)` - The `Result` object of the response
    /// * `Err(AppError::Deserialization)` - If the body has no `Result` object
    pub fn from_response(body: &Value) -> Result<Self, AppError> {
        match body.get("Result") {
            Some(result) if result.is_object() => Ok(Self(result.clone())),
            _ => Err(AppError::Deserialization(
                "response has no Result object".to_string(),
            )),
        }
    }

    /// Number of errors reported by the API; a missing or non-numeric value counts as zero
    ///
    /// A fractional count is rounded up so that any positive value reads as an error.
    #[must_use]
    pub fn total_errors(&self) -> u64 {
        match self.0.get("TotalErrors") {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|v| *v > 0.0).map(|v| v.ceil() as u64))
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Whether the API reported at least one error
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// The raw `Result` object
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Consumes the result and returns the raw `Result` object
    #[must_use]
    pub fn into_raw(self) -> Value {
        self.0
    }

    /// Turns an error-reporting result into [`AppError::SensorPro`]
    pub fn into_checked(self) -> Result<(), AppError> {
        if self.has_errors() {
            return Err(AppError::SensorPro(self));
        }
        Ok(())
    }
}

/// Checks the `Result` object of a decoded response
///
/// # Returns
/// * `Ok(())` - If `Result.TotalErrors` is zero
/// * `Err(AppError::SensorPro)` - If the API reported errors
/// * `Err(AppError::Deserialization)` - If the body has no `Result` object
pub fn check_api_result(body: &Value) -> Result<(), AppError> {
    ApiResult::from_response(body)?.into_checked()
}

/// Decodes the body of a business endpoint response and checks its `Result`
///
/// The body is decoded regardless of the HTTP status since SensorPro reports most
/// failures through `Result`. A body that is not JSON is reported as
/// [`AppError::Transport`] when the status is not a success.
pub fn decode_api_response(response: HttpResponse) -> Result<Value, AppError> {
    let status = response.status;
    let body: Value = match serde_json::from_str(&response.body) {
        Ok(body) => body,
        Err(e) if !status.is_success() => {
            error!("Request failed with status {}: {}", status, e);
            return Err(AppError::Transport(status));
        }
        Err(e) => return Err(AppError::Json(e)),
    };

    check_api_result(&body)?;
    debug!("Response decoded, status {}", status);
    Ok(body)
}
