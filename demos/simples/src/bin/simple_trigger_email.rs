use sensorpro_client::prelude::*;
use std::env;
use tracing::{error, info};

/// Adds a contact and triggers a transactional email campaign for it
///
/// Run with: cargo run --bin simple_trigger_email -- <campaign-id> <email>
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = env::args().skip(1);
    let (Some(campaign_id), Some(email)) = (args.next(), args.next()) else {
        error!("Usage: simple_trigger_email <campaign-id> <email>");
        return Ok(());
    };

    let client = Client::from_env()?;

    let contact = json!({ "Contact": [{ "Email": email }] });
    client.add(&contact).await?;
    info!("Contact {} added", email);

    let trigger = json!({
        "CampaignId": campaign_id,
        "Contact": [{ "Email": email }]
    });
    match client.trigger_email(&trigger).await {
        Ok(()) => info!("Campaign {} triggered for {}", campaign_id, email),
        Err(AppError::SensorPro(result)) => error!("SensorPro rejected the trigger: {}", result),
        Err(e) => return Err(e.into()),
    }

    client.logout().await;
    Ok(())
}
