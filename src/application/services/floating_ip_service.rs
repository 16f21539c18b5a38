use crate::application::client::Client;
use crate::application::interfaces::FloatingIpService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::query::ListQuery;
use crate::model::requests::CreateFloatingIpRequest;
use crate::presentation::action::Action;
use crate::presentation::floating_ip::FloatingIp;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl FloatingIpService for Client {
    async fn get_floating_ips(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<FloatingIp>, AppError> {
        let ips: Vec<FloatingIp> = self.execute(endpoints::get_floating_ips(query)).await?;
        debug!("Floating IPs obtained: {}", ips.len());
        Ok(ips)
    }

    async fn get_floating_ip(&self, ip: &str) -> Result<FloatingIp, AppError> {
        self.execute(endpoints::get_floating_ip(ip)).await
    }

    async fn create_floating_ip(
        &self,
        request: &CreateFloatingIpRequest,
    ) -> Result<FloatingIp, AppError> {
        let floating_ip: FloatingIp = self.execute(endpoints::create_floating_ip(request)).await?;
        info!("Floating IP reserved: {}", floating_ip.ip);
        Ok(floating_ip)
    }

    async fn destroy_floating_ip(&self, ip: &str) -> Result<(), AppError> {
        info!("Releasing floating IP {}", ip);
        self.execute(endpoints::destroy_floating_ip(ip)).await
    }

    async fn assign_floating_ip(&self, ip: &str, droplet_id: u64) -> Result<Action, AppError> {
        info!("Assigning floating IP {} to droplet {}", ip, droplet_id);
        self.execute(endpoints::assign_floating_ip(ip, droplet_id))
            .await
    }

    async fn unassign_floating_ip(&self, ip: &str) -> Result<Action, AppError> {
        info!("Unassigning floating IP {}", ip);
        self.execute(endpoints::unassign_floating_ip(ip)).await
    }
}
