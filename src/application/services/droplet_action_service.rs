use crate::application::client::Client;
use crate::application::interfaces::DropletActionService;
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::endpoints;
use crate::model::requests::{
    DropletImageRequest, RenameDropletRequest, ResizeDropletRequest, SnapshotDropletRequest,
};
use crate::presentation::action::Action;
use async_trait::async_trait;
use tracing::info;

impl Client {
    async fn run_droplet_action(
        &self,
        droplet_id: u64,
        endpoint: Endpoint,
    ) -> Result<Action, AppError> {
        info!("Droplet {}: {}", droplet_id, endpoint.callee);
        let action: Action = self.execute(endpoint).await?;
        info!(
            "Droplet {}: action {} ({}) is {:?}",
            droplet_id, action.id, action.action_type, action.status
        );
        Ok(action)
    }
}

#[async_trait]
impl DropletActionService for Client {
    async fn reboot_droplet(&self, droplet_id: u64) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::reboot_droplet(droplet_id))
            .await
    }

    async fn power_cycle_droplet(&self, droplet_id: u64) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::power_cycle_droplet(droplet_id))
            .await
    }

    async fn shutdown_droplet(&self, droplet_id: u64) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::shutdown_droplet(droplet_id))
            .await
    }

    async fn power_off_droplet(&self, droplet_id: u64) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::power_off_droplet(droplet_id))
            .await
    }

    async fn power_on_droplet(&self, droplet_id: u64) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::power_on_droplet(droplet_id))
            .await
    }

    async fn reset_droplet_password(&self, droplet_id: u64) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::reset_droplet_password(droplet_id))
            .await
    }

    async fn resize_droplet(
        &self,
        droplet_id: u64,
        request: &ResizeDropletRequest,
    ) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::resize_droplet(droplet_id, request))
            .await
    }

    async fn snapshot_droplet(
        &self,
        droplet_id: u64,
        request: &SnapshotDropletRequest,
    ) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::snapshot_droplet(droplet_id, request))
            .await
    }

    async fn restore_droplet(
        &self,
        droplet_id: u64,
        request: &DropletImageRequest,
    ) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::restore_droplet(droplet_id, request))
            .await
    }

    async fn rebuild_droplet(
        &self,
        droplet_id: u64,
        request: &DropletImageRequest,
    ) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::rebuild_droplet(droplet_id, request))
            .await
    }

    async fn rename_droplet(
        &self,
        droplet_id: u64,
        request: &RenameDropletRequest,
    ) -> Result<Action, AppError> {
        self.run_droplet_action(droplet_id, endpoints::rename_droplet(droplet_id, request))
            .await
    }
}
