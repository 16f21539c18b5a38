use crate::error::AppError;
use crate::model::query::ListQuery;
use crate::presentation::region::Region;
use crate::presentation::size::Size;
use async_trait::async_trait;

/// Interface for the region catalog
#[async_trait]
pub trait RegionService: Send + Sync {
    /// Lists all regions
    async fn get_regions(&self, query: Option<&ListQuery>) -> Result<Vec<Region>, AppError>;
}

/// Interface for the size catalog
#[async_trait]
pub trait SizeService: Send + Sync {
    /// Lists all droplet sizes
    async fn get_sizes(&self, query: Option<&ListQuery>) -> Result<Vec<Size>, AppError>;
}
