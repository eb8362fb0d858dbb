use sensorpro_client::prelude::*;
use tracing::info;

/// Queries contacts and signs off
///
/// Requires `SENSORPRO_API_KEY`, `SENSORPRO_ORGANIZATION`, `SENSORPRO_USER` and
/// `SENSORPRO_PASSWORD` in the environment or in a `.env` file.
///
/// Run with: cargo run --bin simple_client_example
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Starting simple client example");

    // No request yet: the first call signs in
    let client = Client::from_env()?;

    let contacts = client.get_contacts(&json!({})).await?;
    info!("Contacts: {:#}", contacts);

    client.logout().await;
    Ok(())
}
