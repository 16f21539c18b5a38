/// Account service interface
pub mod account;
/// Action service interface
pub mod action;
/// Region and size catalog interfaces
pub mod catalog;
/// Domain and DNS record service interface
pub mod domain;
/// Droplet service interface
pub mod droplet;
/// Droplet action service interface
pub mod droplet_action;
/// Floating IP service interface
pub mod floating_ip;
/// Image service interface
pub mod image;
/// SSH key service interface
pub mod ssh_key;

pub use account::*;
pub use action::*;
pub use catalog::*;
pub use domain::*;
pub use droplet::*;
pub use droplet_action::*;
pub use floating_ip::*;
pub use image::*;
pub use ssh_key::*;
