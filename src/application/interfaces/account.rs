use crate::error::AppError;
use crate::presentation::account::Account;
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the account the token belongs to
    async fn get_account(&self) -> Result<Account, AppError>;
}
