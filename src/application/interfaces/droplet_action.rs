use crate::error::AppError;
use crate::model::requests::{
    DropletImageRequest, RenameDropletRequest, ResizeDropletRequest, SnapshotDropletRequest,
};
use crate::presentation::action::Action;
use async_trait::async_trait;

/// Interface for droplet actions
///
/// Every method starts an asynchronous action and returns it as soon as the
/// API has accepted it. Use [`crate::application::interfaces::ActionService::get_action`]
/// to follow its progress.
#[async_trait]
pub trait DropletActionService: Send + Sync {
    /// Reboots a droplet
    async fn reboot_droplet(&self, droplet_id: u64) -> Result<Action, AppError>;

    /// Power cycles a droplet
    async fn power_cycle_droplet(&self, droplet_id: u64) -> Result<Action, AppError>;

    /// Shuts a droplet down gracefully
    async fn shutdown_droplet(&self, droplet_id: u64) -> Result<Action, AppError>;

    /// Powers a droplet off
    async fn power_off_droplet(&self, droplet_id: u64) -> Result<Action, AppError>;

    /// Powers a droplet on
    async fn power_on_droplet(&self, droplet_id: u64) -> Result<Action, AppError>;

    /// Resets the root password
    async fn reset_droplet_password(&self, droplet_id: u64) -> Result<Action, AppError>;

    /// Resizes a droplet
    async fn resize_droplet(
        &self,
        droplet_id: u64,
        request: &ResizeDropletRequest,
    ) -> Result<Action, AppError>;

    /// Takes a snapshot
    async fn snapshot_droplet(
        &self,
        droplet_id: u64,
        request: &SnapshotDropletRequest,
    ) -> Result<Action, AppError>;

    /// Restores from a backup or snapshot image
    async fn restore_droplet(
        &self,
        droplet_id: u64,
        request: &DropletImageRequest,
    ) -> Result<Action, AppError>;

    /// Rebuilds from an image
    async fn rebuild_droplet(
        &self,
        droplet_id: u64,
        request: &DropletImageRequest,
    ) -> Result<Action, AppError>;

    /// Renames a droplet
    async fn rename_droplet(
        &self,
        droplet_id: u64,
        request: &RenameDropletRequest,
    ) -> Result<Action, AppError>;
}
