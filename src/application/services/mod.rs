/// Account service implementation
mod account_service;
/// Action service implementation
mod action_service;
/// Region and size catalog implementations
mod catalog_service;
/// Domain service implementation
mod domain_service;
/// Droplet action service implementation
mod droplet_action_service;
/// Droplet service implementation
mod droplet_service;
/// Floating IP service implementation
mod floating_ip_service;
/// Image service implementation
mod image_service;
/// SSH key service implementation
mod ssh_key_service;

pub use crate::application::interfaces::*;
