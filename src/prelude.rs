/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # DigitalOcean Client Prelude
//!
//! Brings the client, its service traits, request bodies and response models
//! into scope with a single import.
//!
//! ## Usage
//!
//! ```rust
//! use digitalocean_client::prelude::*;
//!
//! let config = Config::with_token("my-token").with_page_size(50);
//! assert_eq!(config.page_size, 50);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Retry policy
pub use crate::model::retry::RetryConfig;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// API client implementing every service trait
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{
    AccountService, ActionService, DomainService, DropletActionService, DropletService,
    FloatingIpService, ImageService, RegionService, SizeService, SshKeyService,
};

/// Client-side rate limiter
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// REQUESTS AND ENDPOINTS
// ============================================================================

/// Endpoint descriptors
pub use crate::model::endpoint::Endpoint;
pub use crate::model::endpoints;

/// Paging and filters for list operations
pub use crate::model::query::ListQuery;

/// Request bodies
pub use crate::model::requests::{
    ActionRequest, AssignFloatingIpRequest, CreateDomainRequest, CreateDropletRequest,
    CreateFloatingIpRequest, CreateSshKeyRequest, DomainRecordRequest, DropletImageRequest,
    ImageRef, NoParams, RenameDropletRequest, ResizeDropletRequest, SnapshotDropletRequest,
    SshKeyRef, TransferImageRequest, UpdateSshKeyRequest,
};

/// Raw response envelope and header metadata
pub use crate::model::responses::{RateLimitInfo, RawResponse, RequestInfo};

// ============================================================================
// RESPONSE MODELS
// ============================================================================

pub use crate::presentation::account::Account;
pub use crate::presentation::action::{Action, ActionStatus};
pub use crate::presentation::domain::{Domain, DomainRecord};
pub use crate::presentation::droplet::{
    BackupWindow, Droplet, DropletStatus, DropletUpgrade, Kernel, NetworkInterface, Networks,
};
pub use crate::presentation::floating_ip::FloatingIp;
pub use crate::presentation::image::{Image, ImageType};
pub use crate::presentation::region::Region;
pub use crate::presentation::size::Size;
pub use crate::presentation::ssh_key::SshKey;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

/// Async trait support
pub use async_trait::async_trait;

/// HTTP method
pub use reqwest::Method;

/// Tracing macros
pub use tracing::{debug, error, info, trace, warn};
