/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Account information of the token owner
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Account {
    /// Maximum number of droplets the account may run
    pub droplet_limit: u32,
    /// Maximum number of floating IPs the account may reserve
    pub floating_ip_limit: u32,
    /// Email address of the owner
    pub email: String,
    /// Unique identifier of the account
    pub uuid: String,
    /// Whether the email address has been verified
    pub email_verified: bool,
    /// Account status (`active`, `warning`, `locked`)
    pub status: String,
    /// Human readable explanation of the status
    pub status_message: String,
}

impl Account {
    /// Returns true when the account can create resources
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
