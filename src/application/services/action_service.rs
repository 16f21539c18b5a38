use crate::application::client::Client;
use crate::application::interfaces::ActionService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::query::ListQuery;
use crate::presentation::action::Action;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActionService for Client {
    async fn get_actions(&self, query: Option<&ListQuery>) -> Result<Vec<Action>, AppError> {
        let actions: Vec<Action> = self.execute(endpoints::get_actions(query)).await?;
        debug!("Actions obtained: {}", actions.len());
        Ok(actions)
    }

    async fn get_action(&self, action_id: u64) -> Result<Action, AppError> {
        let action: Action = self.execute(endpoints::get_action(action_id)).await?;
        debug!("Action {} is {:?}", action.id, action.status);
        Ok(action)
    }
}
