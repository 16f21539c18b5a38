use crate::application::client::Client;
use crate::application::interfaces::AccountService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::presentation::account::Account;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl AccountService for Client {
    async fn get_account(&self) -> Result<Account, AppError> {
        info!("Getting account information");
        let account: Account = self.execute(endpoints::get_account()).await?;
        debug!("Account information obtained for {}", account.email);
        Ok(account)
    }
}
