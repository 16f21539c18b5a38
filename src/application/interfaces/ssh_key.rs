use crate::error::AppError;
use crate::model::query::ListQuery;
use crate::model::requests::{CreateSshKeyRequest, SshKeyRef, UpdateSshKeyRequest};
use crate::presentation::ssh_key::SshKey;
use async_trait::async_trait;

/// Interface for the SSH key service
///
/// Keys can be addressed by numeric id or by fingerprint, see [`SshKeyRef`].
#[async_trait]
pub trait SshKeyService: Send + Sync {
    /// Lists keys
    async fn get_ssh_keys(&self, query: Option<&ListQuery>) -> Result<Vec<SshKey>, AppError>;

    /// Uploads a public key
    async fn add_ssh_key(&self, request: &CreateSshKeyRequest) -> Result<SshKey, AppError>;

    /// Gets a key
    async fn get_ssh_key(&self, key: &SshKeyRef) -> Result<SshKey, AppError>;

    /// Renames a key
    async fn update_ssh_key(
        &self,
        key: &SshKeyRef,
        request: &UpdateSshKeyRequest,
    ) -> Result<SshKey, AppError>;

    /// Deletes a key
    async fn destroy_ssh_key(&self, key: &SshKeyRef) -> Result<(), AppError>;
}
