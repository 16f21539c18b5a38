use digitalocean_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_env()?;

    let query = ListQuery::new().with_per_page(20);
    let droplets = client.get_droplets(Some(&query)).await?;
    info!("Found {} droplets", droplets.len());

    for droplet in &droplets {
        info!(
            "{:>10}  {:<24} {:<8} {:<6} {}",
            droplet.id,
            droplet.name,
            droplet.status,
            droplet.region.slug,
            droplet.public_ipv4().unwrap_or("-")
        );
    }

    if let Some(droplet) = droplets.first() {
        let actions = client.get_droplet_actions(droplet.id, None).await?;
        for action in actions.iter().take(5) {
            info!(
                "  action {} {} {:?}",
                action.id, action.action_type, action.status
            );
        }
    }

    let regions = client.get_regions(None).await?;
    let available: Vec<&str> = regions
        .iter()
        .filter(|r| r.available)
        .map(|r| r.slug.as_str())
        .collect();
    info!("Available regions: {}", serde_json::to_string(&available)?);

    Ok(())
}
