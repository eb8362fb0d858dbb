use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the campaign service
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Triggers a transactional email campaign for the contacts in `body`
    async fn trigger_email(&self, body: &Value) -> Result<(), AppError>;
}
