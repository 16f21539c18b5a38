use crate::error::AppError;
use crate::model::query::ListQuery;
use crate::presentation::action::Action;
use async_trait::async_trait;

/// Interface for the action history service
#[async_trait]
pub trait ActionService: Send + Sync {
    /// Lists every action taken on the account
    async fn get_actions(&self, query: Option<&ListQuery>) -> Result<Vec<Action>, AppError>;

    /// Gets one action, typically to poll it until it finishes
    async fn get_action(&self, action_id: u64) -> Result<Action, AppError>;
}
