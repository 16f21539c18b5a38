use crate::error::AppError;
use crate::model::query::ListQuery;
use crate::model::requests::CreateFloatingIpRequest;
use crate::presentation::action::Action;
use crate::presentation::floating_ip::FloatingIp;
use async_trait::async_trait;

/// Interface for the floating IP service
#[async_trait]
pub trait FloatingIpService: Send + Sync {
    /// Lists floating IPs
    async fn get_floating_ips(&self, query: Option<&ListQuery>)
    -> Result<Vec<FloatingIp>, AppError>;

    /// Gets a floating IP by address
    async fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp, AppError>;

    /// Reserves a floating IP in a region or for a droplet
    async fn create_floating_ip(
        &self,
        request: &CreateFloatingIpRequest,
    ) -> Result<FloatingIp, AppError>;

    /// Releases a floating IP
    async fn destroy_floating_ip(&self, ip: &str) -> Result<(), AppError>;

    /// Assigns a floating IP to a droplet
    async fn assign_floating_ip(&self, ip: &str, droplet_id: u64) -> Result<Action, AppError>;

    /// Unassigns a floating IP from its droplet
    async fn unassign_floating_ip(&self, ip: &str) -> Result<Action, AppError>;
}
