use digitalocean_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Starting account example");

    // token comes from DO_API_TOKEN or .env
    let client = Client::from_env()?;

    let account = client.get_account().await?;
    info!("Account: {}", account);
    info!(
        "Droplet limit: {}, floating IP limit: {}",
        account.droplet_limit, account.floating_ip_limit
    );

    let raw = client.execute_raw(endpoints::get_account()).await?;
    info!(
        "Rate limit: {:?} remaining of {:?}",
        raw.ratelimit.remaining, raw.ratelimit.limit
    );

    Ok(())
}
