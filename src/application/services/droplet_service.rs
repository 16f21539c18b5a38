/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::DropletService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::query::ListQuery;
use crate::model::requests::CreateDropletRequest;
use crate::presentation::action::Action;
use crate::presentation::droplet::{Droplet, DropletUpgrade, Kernel};
use crate::presentation::image::Image;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl DropletService for Client {
    async fn get_droplets(&self, query: Option<&ListQuery>) -> Result<Vec<Droplet>, AppError> {
        let droplets: Vec<Droplet> = self.execute(endpoints::get_droplets(query)).await?;
        debug!("Droplets obtained: {}", droplets.len());
        Ok(droplets)
    }

    async fn create_droplet(&self, request: &CreateDropletRequest) -> Result<Droplet, AppError> {
        info!(
            "Creating droplet {} ({} in {})",
            request.name, request.size, request.region
        );
        let droplet: Droplet = self.execute(endpoints::create_droplet(request)).await?;
        info!("Droplet created: {}", droplet.id);
        Ok(droplet)
    }

    async fn get_droplet(&self, droplet_id: u64) -> Result<Droplet, AppError> {
        self.execute(endpoints::get_droplet(droplet_id)).await
    }

    async fn destroy_droplet(&self, droplet_id: u64) -> Result<(), AppError> {
        info!("Destroying droplet {}", droplet_id);
        self.execute(endpoints::destroy_droplet(droplet_id)).await
    }

    async fn get_droplet_kernels(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Kernel>, AppError> {
        self.execute(endpoints::get_droplet_kernels(droplet_id, query))
            .await
    }

    async fn get_droplet_snapshots(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Image>, AppError> {
        self.execute(endpoints::get_droplet_snapshots(droplet_id, query))
            .await
    }

    async fn get_droplet_backups(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Image>, AppError> {
        self.execute(endpoints::get_droplet_backups(droplet_id, query))
            .await
    }

    async fn get_droplet_actions(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Action>, AppError> {
        self.execute(endpoints::get_droplet_actions(droplet_id, query))
            .await
    }

    async fn get_droplet_neighbors(
        &self,
        droplet_id: u64,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Droplet>, AppError> {
        self.execute(endpoints::get_droplet_neighbors(droplet_id, query))
            .await
    }

    async fn get_droplet_neighbors_report(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Vec<Droplet>>, AppError> {
        let neighbors: Vec<Vec<Droplet>> = self
            .execute(endpoints::get_droplet_neighbors_report(query))
            .await?;
        debug!("Neighbor groups obtained: {}", neighbors.len());
        Ok(neighbors)
    }

    async fn get_droplet_upgrades(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<DropletUpgrade>, AppError> {
        self.execute(endpoints::get_droplet_upgrades(query)).await
    }
}
