use crate::presentation::droplet::Droplet;
use crate::presentation::region::Region;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A reserved public IPv4 address that can move between droplets
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FloatingIp {
    /// The address itself
    pub ip: String,
    /// Region the address belongs to
    pub region: Region,
    /// Droplet the address is assigned to, if any
    pub droplet: Option<Droplet>,
}

impl FloatingIp {
    /// Returns true when the address is assigned to a droplet
    pub fn is_assigned(&self) -> bool {
        self.droplet.is_some()
    }
}
