use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the contact service
///
/// Payloads and responses are passed through untouched; their shape is defined by
/// the SensorPro contacts API.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Queries contacts
    ///
    /// # Returns
    /// * The full decoded response, including its `Result` object
    async fn get_contacts(&self, body: &Value) -> Result<Value, AppError>;

    /// Adds contacts
    async fn add(&self, body: &Value) -> Result<(), AppError>;

    /// Updates existing contacts
    async fn update(&self, body: &Value) -> Result<(), AppError>;

    /// Changes the opt-out status of contacts
    async fn change_opt_out_status(&self, body: &Value) -> Result<(), AppError>;
}
