/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::query::ListQuery;
use crate::model::requests::CreateDropletRequest;
use crate::presentation::action::Action;
use crate::presentation::droplet::{Droplet, DropletUpgrade, Kernel};
use crate::presentation::image::Image;
use async_trait::async_trait;

/// Interface for the droplet service
#[async_trait]
pub trait DropletService: Send + Sync {
    /// Lists droplets
    ///
    /// # Arguments
    /// * `query` - Paging and filters (for example `tag_name`); `None` fetches
    ///   the first page with the configured page size
    async fn get_droplets(&self, query: Option<&ListQuery>) -> Result<Vec<Droplet>, AppError>;

    /// Creates a droplet
    async fn create_droplet(&self, request: &CreateDropletRequest) -> Result<Droplet, AppError>;

    /// Gets a droplet by id
    async fn get_droplet(&self, droplet_id: u64) -> Result<Droplet, AppError>;

    /// Deletes a droplet
    async fn destroy_droplet(&self, droplet_id: u64) -> Result<(), AppError>;

    /// Lists kernels the droplet can boot
    async fn get_droplet_kernels(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Kernel>, AppError>;

    /// Lists snapshots of a droplet
    async fn get_droplet_snapshots(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Image>, AppError>;

    /// Lists backups of a droplet
    async fn get_droplet_backups(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Image>, AppError>;

    /// Lists actions taken on a droplet
    async fn get_droplet_actions(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Action>, AppError>;

    /// Lists droplets running on the same physical host
    async fn get_droplet_neighbors(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Droplet>, AppError>;

    /// Lists groups of the account's droplets that share a host
    async fn get_droplet_neighbors_report(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Vec<Droplet>>, AppError>;

    /// Lists droplets scheduled for a platform upgrade
    async fn get_droplet_upgrades(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<DropletUpgrade>, AppError>;
}
