use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A datacenter region
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Region {
    /// Region slug (`nyc3`)
    pub slug: String,
    /// Display name (`New York 3`)
    pub name: String,
    /// Size slugs available in the region
    pub sizes: Vec<String>,
    /// Whether new resources can be created in the region
    pub available: bool,
    /// Features offered (`backups`, `ipv6`, `private_networking`...)
    pub features: Vec<String>,
}
