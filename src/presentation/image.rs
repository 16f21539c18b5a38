/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Kind of image
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    /// Operating system image (`ubuntu-24-04-x64`)
    Distribution,
    /// One-click application image
    Application,
    /// User snapshot
    #[default]
    Snapshot,
    /// Automated backup
    Backup,
    /// Uploaded custom image
    Custom,
    /// Anything this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// An image: distribution, application, snapshot or backup
///
/// Droplet snapshots and backups are returned as images too.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Image {
    /// Image id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Base distribution (`Ubuntu`)
    pub distribution: String,
    /// Slug, only for public images
    pub slug: Option<String>,
    /// Whether the image is public
    pub public: bool,
    /// Regions where the image is available
    pub regions: Vec<String>,
    /// Minimum disk size in gigabytes for droplets created from it
    pub min_disk_size: u64,
    /// Size of the image in gigabytes
    pub size_gigabytes: f64,
    /// Kind of image
    #[serde(rename = "type")]
    pub image_type: ImageType,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
}
