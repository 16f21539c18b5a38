use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A DNS zone managed by the account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Domain {
    /// Domain name (`example.com`)
    pub name: String,
    /// Default TTL of the zone
    pub ttl: Option<u32>,
    /// Full zone file
    pub zone_file: Option<String>,
}

/// A record of a DNS zone
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DomainRecord {
    /// Record id
    pub id: u64,
    /// Record type (`A`, `MX`...)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Host name, `@` for the apex
    pub name: String,
    /// Record value
    pub data: String,
    /// Priority (MX, SRV)
    pub priority: Option<u32>,
    /// Port (SRV)
    pub port: Option<u32>,
    /// Weight (SRV)
    pub weight: Option<u32>,
    /// Time to live in seconds
    pub ttl: Option<u32>,
}
