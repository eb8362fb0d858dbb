/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every operation of the client

use crate::model::responses::ApiResult;
use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the SensorPro client
#[derive(Debug)]
pub enum AppError {
    /// The server answered with a non-success HTTP status
    Transport(StatusCode),
    /// The API reported `Result.TotalErrors > 0`; carries the `Result` object unchanged
    SensorPro(ApiResult),
    /// The HTTP request itself could not be performed
    Network(reqwest::Error),
    /// A body could not be encoded or decoded as JSON
    Json(serde_json::Error),
    /// A JSON body was valid but lacked an expected field
    Deserialization(String),
    /// Invalid configuration or arguments
    InvalidInput(String),
}

impl AppError {
    /// Returns the `Result` object when the API itself reported the failure
    #[must_use]
    pub fn api_result(&self) -> Option<&ApiResult> {
        match self {
            AppError::SensorPro(result) => Some(result),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(status) => write!(f, "transport error: http status {status}"),
            AppError::SensorPro(result) => {
                write!(f, "sensorpro error: {} error(s) reported", result.total_errors())
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}
