use crate::application::client::Client;
use crate::application::interfaces::SshKeyService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::query::ListQuery;
use crate::model::requests::{CreateSshKeyRequest, SshKeyRef, UpdateSshKeyRequest};
use crate::presentation::ssh_key::SshKey;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl SshKeyService for Client {
    async fn get_ssh_keys(&self, query: Option<&ListQuery>) -> Result<Vec<SshKey>, AppError> {
        let keys: Vec<SshKey> = self.execute(endpoints::get_ssh_keys(query)).await?;
        debug!("SSH keys obtained: {}", keys.len());
        Ok(keys)
    }

    async fn add_ssh_key(&self, request: &CreateSshKeyRequest) -> Result<SshKey, AppError> {
        info!("Adding SSH key {}", request.name);
        self.execute(endpoints::add_ssh_key(request)).await
    }

    async fn get_ssh_key(&self, key: &SshKeyRef) -> Result<SshKey, AppError> {
        self.execute(endpoints::get_ssh_key(key)).await
    }

    async fn update_ssh_key(
        &self,
        key: &SshKeyRef,
        request: &UpdateSshKeyRequest,
    ) -> Result<SshKey, AppError> {
        info!("Renaming SSH key {} to {}", key, request.name);
        self.execute(endpoints::update_ssh_key(key, request)).await
    }

    async fn destroy_ssh_key(&self, key: &SshKeyRef) -> Result<(), AppError> {
        info!("Destroying SSH key {}", key);
        self.execute(endpoints::destroy_ssh_key(key)).await
    }
}
