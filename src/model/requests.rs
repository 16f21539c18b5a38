/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Request bodies sent to the API
//!
//! Every body derives [`validator::Validate`]; the constraints mirror what the
//! API rejects so that invalid calls fail before any network round trip.

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Reference to an image, either by slug (`ubuntu-24-04-x64`) or by numeric id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Numeric image id (snapshots, backups, custom images)
    Id(u64),
    /// Public image slug
    Slug(String),
}

impl From<u64> for ImageRef {
    fn from(id: u64) -> Self {
        ImageRef::Id(id)
    }
}

impl From<&str> for ImageRef {
    fn from(slug: &str) -> Self {
        ImageRef::Slug(slug.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(slug: String) -> Self {
        ImageRef::Slug(slug)
    }
}

/// Reference to an SSH key, either by numeric id or by fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SshKeyRef {
    /// Numeric key id
    Id(u64),
    /// Key fingerprint (`3b:16:bf:...`)
    Fingerprint(String),
}

impl From<u64> for SshKeyRef {
    fn from(id: u64) -> Self {
        SshKeyRef::Id(id)
    }
}

impl From<&str> for SshKeyRef {
    fn from(fingerprint: &str) -> Self {
        SshKeyRef::Fingerprint(fingerprint.to_string())
    }
}

impl std::fmt::Display for SshKeyRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SshKeyRef::Id(id) => write!(f, "{id}"),
            SshKeyRef::Fingerprint(fp) => write!(f, "{fp}"),
        }
    }
}

fn validate_image_ref(image: &ImageRef) -> Result<(), ValidationError> {
    match image {
        ImageRef::Slug(slug) if slug.trim().is_empty() => {
            Err(ValidationError::new("required").with_message(Cow::from("image slug must not be empty")))
        }
        _ => Ok(()),
    }
}

/// Model for creating a new droplet
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct CreateDropletRequest {
    /// Human readable name, also used as hostname
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Region slug (`nyc3`, `ams3`...)
    #[validate(length(min = 1, message = "region is required"))]
    pub region: String,
    /// Size slug (`s-1vcpu-1gb`...)
    #[validate(length(min = 1, message = "size is required"))]
    pub size: String,
    /// Image slug or id
    #[validate(custom(function = "validate_image_ref"))]
    pub image: ImageRef,
    /// SSH keys to embed in the root account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<SshKeyRef>>,
    /// Enable automated backups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<bool>,
    /// Enable IPv6 networking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<bool>,
    /// Enable private networking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_networking: Option<bool>,
    /// Cloud-init user data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

impl CreateDropletRequest {
    /// Create a request with the required fields
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        size: impl Into<String>,
        image: impl Into<ImageRef>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            size: size.into(),
            image: image.into(),
            ssh_keys: None,
            backups: None,
            ipv6: None,
            private_networking: None,
            user_data: None,
        }
    }

    /// Set the SSH keys
    pub fn with_ssh_keys(mut self, ssh_keys: Vec<SshKeyRef>) -> Self {
        self.ssh_keys = Some(ssh_keys);
        self
    }

    /// Enable or disable backups
    pub fn with_backups(mut self, backups: bool) -> Self {
        self.backups = Some(backups);
        self
    }

    /// Enable or disable IPv6
    pub fn with_ipv6(mut self, ipv6: bool) -> Self {
        self.ipv6 = Some(ipv6);
        self
    }

    /// Enable or disable private networking
    pub fn with_private_networking(mut self, private_networking: bool) -> Self {
        self.private_networking = Some(private_networking);
        self
    }

    /// Set the cloud-init user data
    pub fn with_user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }
}

/// Parameters of a resize action
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct ResizeDropletRequest {
    /// Target size slug
    #[validate(length(min = 1, message = "size is required"))]
    pub size: String,
    /// Also resize the disk (irreversible)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<bool>,
}

impl ResizeDropletRequest {
    /// Resize to `size`, leaving the disk untouched
    pub fn new(size: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            disk: None,
        }
    }

    /// Set whether the disk is resized too
    pub fn with_disk(mut self, disk: bool) -> Self {
        self.disk = Some(disk);
        self
    }
}

/// Parameters of a snapshot action
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct SnapshotDropletRequest {
    /// Name of the snapshot, generated by the API when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

/// Parameters of the restore and rebuild actions
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct DropletImageRequest {
    /// Image slug or id to restore from or rebuild with
    #[validate(custom(function = "validate_image_ref"))]
    pub image: ImageRef,
}

/// Parameters of a rename action
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct RenameDropletRequest {
    /// New droplet name
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Parameters of an image transfer action
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct TransferImageRequest {
    /// Destination region slug
    #[validate(length(min = 1, message = "region is required"))]
    pub region: String,
}

/// Model for adding a public SSH key to the account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct CreateSshKeyRequest {
    /// Display name of the key
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Full public key in OpenSSH format
    #[validate(length(min = 1, message = "public_key is required"))]
    pub public_key: String,
}

/// Model for renaming an SSH key
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct UpdateSshKeyRequest {
    /// New display name
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Model for creating a domain with an A record pointing at `ip_address`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct CreateDomainRequest {
    /// Domain name (`example.com`)
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Address of the apex A record
    #[validate(length(min = 1, message = "ip_address is required"))]
    pub ip_address: String,
}

/// Model for creating or replacing a domain record
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct DomainRecordRequest {
    /// Record type (`A`, `AAAA`, `CNAME`, `MX`, `TXT`, `SRV`, `NS`, `CAA`)
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub record_type: String,
    /// Host name, `@` for the apex
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Record value
    #[validate(length(min = 1, message = "data is required"))]
    pub data: String,
    /// Priority (MX, SRV)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Port (SRV)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
    /// Weight (SRV)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl DomainRecordRequest {
    /// Create a record with the required fields
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            data: data.into(),
            priority: None,
            port: None,
            weight: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u32) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the weight
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }
}

fn validate_floating_ip_target(request: &CreateFloatingIpRequest) -> Result<(), ValidationError> {
    let has_region = request
        .region
        .as_deref()
        .is_some_and(|r| !r.trim().is_empty());
    if !has_region && request.droplet_id.is_none() {
        return Err(ValidationError::new("missing_target")
            .with_message(Cow::from("either region or droplet_id is required")));
    }
    Ok(())
}

/// Model for reserving a floating IP, in a region or assigned to a droplet
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_floating_ip_target"))]
pub struct CreateFloatingIpRequest {
    /// Region to reserve the address in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Droplet to assign the address to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub droplet_id: Option<u64>,
}

impl CreateFloatingIpRequest {
    /// Reserve an address in `region`
    pub fn in_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            droplet_id: None,
        }
    }

    /// Reserve an address and assign it to `droplet_id`
    pub fn for_droplet(droplet_id: u64) -> Self {
        Self {
            region: None,
            droplet_id: Some(droplet_id),
        }
    }
}

/// Parameters of a floating IP assign action
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Validate)]
pub struct AssignFloatingIpRequest {
    /// Droplet receiving the address
    pub droplet_id: u64,
}

/// Action parameters that carry nothing but the action type
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NoParams {}

/// Body of every `POST .../actions` request: a fixed `type` plus its parameters
#[derive(Debug, Clone, Serialize)]
pub struct ActionRequest<T> {
    /// Action type, fixed by the operation (`reboot`, `resize`, `assign`...)
    #[serde(rename = "type")]
    pub action_type: String,
    /// Action parameters, flattened next to `type`
    #[serde(flatten)]
    pub params: T,
}

impl ActionRequest<NoParams> {
    /// Action without parameters
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            params: NoParams {},
        }
    }
}

impl<T> ActionRequest<T> {
    /// Action with parameters
    pub fn with_params(action_type: impl Into<String>, params: T) -> Self {
        Self {
            action_type: action_type.into(),
            params,
        }
    }
}

impl<T: Validate> Validate for ActionRequest<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.params.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.action_type.trim().is_empty() {
            errors.add(
                "type",
                ValidationError::new("required").with_message(Cow::from("type is required")),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
