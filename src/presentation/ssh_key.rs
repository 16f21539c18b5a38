use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A public SSH key stored in the account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SshKey {
    /// Key id
    pub id: u64,
    /// Key fingerprint
    pub fingerprint: String,
    /// Full public key
    pub public_key: String,
    /// Display name
    pub name: String,
}
