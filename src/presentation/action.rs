/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::presentation::region::Region;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Progress of an asynchronous action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    /// Still running
    #[default]
    InProgress,
    /// Finished successfully
    Completed,
    /// Finished with an error
    Errored,
    /// Anything this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// Record of an asynchronous operation (reboot, resize, transfer...)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Action {
    /// Action id, usable with `get_action` to poll progress
    pub id: u64,
    /// Current status
    pub status: ActionStatus,
    /// Action type (`reboot`, `power_off`, `transfer`...)
    #[serde(rename = "type")]
    pub action_type: String,
    /// Start time
    pub started_at: Option<DateTime<Utc>>,
    /// Completion time, once finished
    pub completed_at: Option<DateTime<Utc>>,
    /// Id of the resource the action applies to
    pub resource_id: Option<u64>,
    /// Kind of resource (`droplet`, `image`, `floating_ip`)
    pub resource_type: String,
    /// Region the action ran in
    pub region: Option<Region>,
    /// Slug of that region
    pub region_slug: Option<String>,
}

impl Action {
    /// Returns true once the action completed or errored
    pub fn is_finished(&self) -> bool {
        matches!(self.status, ActionStatus::Completed | ActionStatus::Errored)
    }

    /// Returns true when the action completed successfully
    pub fn is_completed(&self) -> bool {
        self.status == ActionStatus::Completed
    }
}
