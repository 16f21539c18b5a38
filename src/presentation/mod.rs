/// Account information models
pub mod account;
/// Asynchronous action models
pub mod action;
/// DNS domain and record models
pub mod domain;
/// Droplet, kernel and network models
pub mod droplet;
/// Floating IP models
pub mod floating_ip;
/// Image, snapshot and backup models
pub mod image;
/// Region models
pub mod region;
/// Size models
pub mod size;
/// SSH key models
pub mod ssh_key;

pub use account::*;
pub use action::*;
pub use domain::*;
pub use droplet::*;
pub use floating_ip::*;
pub use image::*;
pub use region::*;
pub use size::*;
pub use ssh_key::*;
