/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::presentation::image::Image;
use crate::presentation::region::Region;
use crate::presentation::size::Size;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Lifecycle state of a droplet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DropletStatus {
    /// Being provisioned
    #[default]
    New,
    /// Running
    Active,
    /// Powered off
    Off,
    /// Archived by the platform
    Archive,
    /// Anything this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl DropletStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            DropletStatus::New => "new",
            DropletStatus::Active => "active",
            DropletStatus::Off => "off",
            DropletStatus::Archive => "archive",
            DropletStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DropletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A virtual machine
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Droplet {
    /// Droplet id
    pub id: u64,
    /// Name, also the hostname
    pub name: String,
    /// Memory in megabytes
    pub memory: u64,
    /// Number of virtual CPUs
    pub vcpus: u32,
    /// Disk size in gigabytes
    pub disk: u64,
    /// Whether the droplet is locked against actions
    pub locked: bool,
    /// Lifecycle state
    pub status: DropletStatus,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Enabled features (`backups`, `ipv6`...)
    pub features: Vec<String>,
    /// Ids of the automated backups
    pub backup_ids: Vec<u64>,
    /// Ids of the snapshots
    pub snapshot_ids: Vec<u64>,
    /// Image the droplet was created from
    pub image: Image,
    /// Full size object
    pub size: Option<Size>,
    /// Size slug
    pub size_slug: String,
    /// Public and private addresses
    pub networks: Networks,
    /// Region the droplet runs in
    pub region: Region,
    /// Kernel, for droplets that still use external kernels
    pub kernel: Option<Kernel>,
    /// Window of the next automated backup
    pub next_backup_window: Option<BackupWindow>,
    /// Tags
    pub tags: Vec<String>,
}

impl Droplet {
    /// First public IPv4 address, if any
    pub fn public_ipv4(&self) -> Option<&str> {
        self.networks
            .v4
            .iter()
            .find(|n| n.network_type == "public")
            .map(|n| n.ip_address.as_str())
    }

    /// First private IPv4 address, if any
    pub fn private_ipv4(&self) -> Option<&str> {
        self.networks
            .v4
            .iter()
            .find(|n| n.network_type == "private")
            .map(|n| n.ip_address.as_str())
    }
}

/// Addresses attached to a droplet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Networks {
    /// IPv4 interfaces
    pub v4: Vec<NetworkInterface>,
    /// IPv6 interfaces
    pub v6: Vec<NetworkInterface>,
}

/// One address of a droplet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct NetworkInterface {
    /// Address
    pub ip_address: String,
    /// Netmask: dotted string for IPv4, prefix length for IPv6
    pub netmask: Value,
    /// Gateway address
    pub gateway: String,
    /// `public` or `private`
    #[serde(rename = "type")]
    pub network_type: String,
}

/// A kernel a droplet can boot
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Kernel {
    /// Kernel id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Version string
    pub version: String,
}

/// Time window of an automated backup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BackupWindow {
    /// Window start
    pub start: Option<DateTime<Utc>>,
    /// Window end
    pub end: Option<DateTime<Utc>>,
}

/// A droplet scheduled for a platform upgrade
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DropletUpgrade {
    /// Droplet id
    pub droplet_id: u64,
    /// Scheduled migration time
    pub date_of_migration: Option<DateTime<Utc>>,
    /// Droplet URL
    pub url: String,
}
