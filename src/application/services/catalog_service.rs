use crate::application::client::Client;
use crate::application::interfaces::{RegionService, SizeService};
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::query::ListQuery;
use crate::presentation::region::Region;
use crate::presentation::size::Size;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl RegionService for Client {
    async fn get_regions(&self, query: Option<&ListQuery>) -> Result<Vec<Region>, AppError> {
        let regions: Vec<Region> = self.execute(endpoints::get_regions(query)).await?;
        debug!("Regions obtained: {}", regions.len());
        Ok(regions)
    }
}

#[async_trait]
impl SizeService for Client {
    async fn get_sizes(&self, query: Option<&ListQuery>) -> Result<Vec<Size>, AppError> {
        let sizes: Vec<Size> = self.execute(endpoints::get_sizes(query)).await?;
        debug!("Sizes obtained: {}", sizes.len());
        Ok(sizes)
    }
}
