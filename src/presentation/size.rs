use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A droplet size (plan)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Size {
    /// Size slug (`s-1vcpu-1gb`)
    pub slug: String,
    /// Memory in megabytes
    pub memory: u64,
    /// Number of virtual CPUs
    pub vcpus: u32,
    /// Disk size in gigabytes
    pub disk: u64,
    /// Monthly transfer allowance in terabytes
    pub transfer: f64,
    /// Monthly price in USD
    pub price_monthly: f64,
    /// Hourly price in USD
    pub price_hourly: f64,
    /// Region slugs where the size is offered
    pub regions: Vec<String>,
    /// Whether the size can be used for new droplets
    pub available: bool,
}
