/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! One descriptor constructor per API operation
//!
//! The service implementations are thin wrappers over these functions; they
//! are public so that callers can inspect a request or run it through
//! [`crate::application::client::Client::execute_raw`].

use crate::model::endpoint::Endpoint;
use crate::model::query::ListQuery;
use crate::model::requests::{
    ActionRequest, AssignFloatingIpRequest, CreateDomainRequest, CreateDropletRequest,
    CreateFloatingIpRequest, CreateSshKeyRequest, DomainRecordRequest, DropletImageRequest,
    NoParams, RenameDropletRequest, ResizeDropletRequest, SnapshotDropletRequest, SshKeyRef,
    TransferImageRequest, UpdateSshKeyRequest,
};
use serde::Serialize;
use validator::Validate;

// account

/// GET `account`
pub fn get_account() -> Endpoint {
    Endpoint::get("get_account", "account").required("account")
}

// droplets

/// GET `droplets`
pub fn get_droplets(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_droplets", "droplets")
        .paged(query)
        .required("droplets")
}

/// POST `droplets`
pub fn create_droplet(body: &CreateDropletRequest) -> Endpoint {
    Endpoint::post("create_droplet", "droplets")
        .body(body)
        .required("droplet")
}

/// GET `droplets/:droplet_id`
pub fn get_droplet(droplet_id: u64) -> Endpoint {
    Endpoint::get("get_droplet", "droplets/:droplet_id")
        .param("droplet_id", droplet_id)
        .required("droplet")
}

/// DELETE `droplets/:droplet_id`
pub fn destroy_droplet(droplet_id: u64) -> Endpoint {
    Endpoint::delete("destroy_droplet", "droplets/:droplet_id").param("droplet_id", droplet_id)
}

/// GET `droplets/:droplet_id/kernels`
pub fn get_droplet_kernels(droplet_id: u64, query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_droplet_kernels", "droplets/:droplet_id/kernels")
        .param("droplet_id", droplet_id)
        .paged(query)
        .required("kernels")
}

/// GET `droplets/:droplet_id/snapshots`
pub fn get_droplet_snapshots(droplet_id: u64, query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_droplet_snapshots", "droplets/:droplet_id/snapshots")
        .param("droplet_id", droplet_id)
        .paged(query)
        .required("snapshots")
}

/// GET `droplets/:droplet_id/backups`
pub fn get_droplet_backups(droplet_id: u64, query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_droplet_backups", "droplets/:droplet_id/backups")
        .param("droplet_id", droplet_id)
        .paged(query)
        .required("backups")
}

/// GET `droplets/:droplet_id/actions`
pub fn get_droplet_actions(droplet_id: u64, query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_droplet_actions", "droplets/:droplet_id/actions")
        .param("droplet_id", droplet_id)
        .paged(query)
        .required("actions")
}

/// GET `droplets/:droplet_id/neighbors`
pub fn get_droplet_neighbors(droplet_id: u64, query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_droplet_neighbors", "droplets/:droplet_id/neighbors")
        .param("droplet_id", droplet_id)
        .paged(query)
        .required("droplets")
}

/// GET `reports/droplet_neighbors`
pub fn get_droplet_neighbors_report(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_droplet_neighbors_report", "reports/droplet_neighbors")
        .paged(query)
        .required("neighbors")
}

/// GET `droplet_upgrades`; the whole body is the payload
pub fn get_droplet_upgrades(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_droplet_upgrades", "droplet_upgrades").paged(query)
}

/// POST `droplets/:droplet_id/actions`
pub fn droplet_action<T: Serialize + Validate>(
    callee: &'static str,
    droplet_id: u64,
    action: &ActionRequest<T>,
) -> Endpoint {
    Endpoint::post(callee, "droplets/:droplet_id/actions")
        .param("droplet_id", droplet_id)
        .body(action)
        .required("action")
}

/// Droplet action `reboot`
pub fn reboot_droplet(droplet_id: u64) -> Endpoint {
    droplet_action("reboot_droplet", droplet_id, &ActionRequest::<NoParams>::new("reboot"))
}

/// Droplet action `power_cycle`
pub fn power_cycle_droplet(droplet_id: u64) -> Endpoint {
    droplet_action(
        "power_cycle_droplet",
        droplet_id,
        &ActionRequest::<NoParams>::new("power_cycle"),
    )
}

/// Droplet action `shutdown`
pub fn shutdown_droplet(droplet_id: u64) -> Endpoint {
    droplet_action("shutdown_droplet", droplet_id, &ActionRequest::<NoParams>::new("shutdown"))
}

/// Droplet action `power_off`
pub fn power_off_droplet(droplet_id: u64) -> Endpoint {
    droplet_action("power_off_droplet", droplet_id, &ActionRequest::<NoParams>::new("power_off"))
}

/// Droplet action `power_on`
pub fn power_on_droplet(droplet_id: u64) -> Endpoint {
    droplet_action("power_on_droplet", droplet_id, &ActionRequest::<NoParams>::new("power_on"))
}

/// Droplet action `password_reset`
pub fn reset_droplet_password(droplet_id: u64) -> Endpoint {
    droplet_action(
        "reset_droplet_password",
        droplet_id,
        &ActionRequest::<NoParams>::new("password_reset"),
    )
}

/// Droplet action `resize`
pub fn resize_droplet(droplet_id: u64, body: &ResizeDropletRequest) -> Endpoint {
    droplet_action(
        "resize_droplet",
        droplet_id,
        &ActionRequest::with_params("resize", body.clone()),
    )
}

/// Droplet action `snapshot`
pub fn snapshot_droplet(droplet_id: u64, body: &SnapshotDropletRequest) -> Endpoint {
    droplet_action(
        "snapshot_droplet",
        droplet_id,
        &ActionRequest::with_params("snapshot", body.clone()),
    )
}

/// Droplet action `restore`
pub fn restore_droplet(droplet_id: u64, body: &DropletImageRequest) -> Endpoint {
    droplet_action(
        "restore_droplet",
        droplet_id,
        &ActionRequest::with_params("restore", body.clone()),
    )
}

/// Droplet action `rebuild`
pub fn rebuild_droplet(droplet_id: u64, body: &DropletImageRequest) -> Endpoint {
    droplet_action(
        "rebuild_droplet",
        droplet_id,
        &ActionRequest::with_params("rebuild", body.clone()),
    )
}

/// Droplet action `rename`
pub fn rename_droplet(droplet_id: u64, body: &RenameDropletRequest) -> Endpoint {
    droplet_action(
        "rename_droplet",
        droplet_id,
        &ActionRequest::with_params("rename", body.clone()),
    )
}

// regions and sizes

/// GET `regions`
pub fn get_regions(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_regions", "regions")
        .paged(query)
        .required("regions")
}

/// GET `sizes`
pub fn get_sizes(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_sizes", "sizes")
        .paged(query)
        .required("sizes")
}

// images

/// GET `images`
pub fn get_images(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_images", "images")
        .paged(query)
        .required("images")
}

/// GET `images?type=distribution`
pub fn get_distribution_images(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_distribution_images", "images")
        .paged(query)
        .default_query("type", "distribution")
        .required("images")
}

/// GET `images?type=application`
pub fn get_application_images(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_application_images", "images")
        .paged(query)
        .default_query("type", "application")
        .required("images")
}

/// GET `images?private=true`
pub fn get_my_images(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_my_images", "images")
        .paged(query)
        .default_query("private", true)
        .required("images")
}

/// GET `images/:image_id`
pub fn get_image(image_id: u64) -> Endpoint {
    Endpoint::get("get_image", "images/:image_id")
        .param("image_id", image_id)
        .required("image")
}

/// DELETE `images/:image_id`
pub fn destroy_image(image_id: u64) -> Endpoint {
    Endpoint::delete("destroy_image", "images/:image_id").param("image_id", image_id)
}

/// Image action `transfer`
pub fn transfer_image(image_id: u64, body: &TransferImageRequest) -> Endpoint {
    Endpoint::post("transfer_image", "images/:image_id/actions")
        .param("image_id", image_id)
        .body(&ActionRequest::with_params("transfer", body.clone()))
        .required("action")
}

/// Image action `convert`
pub fn convert_image_to_snapshot(image_id: u64) -> Endpoint {
    Endpoint::post("convert_image_to_snapshot", "images/:image_id/actions")
        .param("image_id", image_id)
        .body(&ActionRequest::<NoParams>::new("convert"))
        .required("action")
}

// ssh keys

/// GET `account/keys`
pub fn get_ssh_keys(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_ssh_keys", "account/keys")
        .paged(query)
        .required("ssh_keys")
}

/// POST `account/keys`
pub fn add_ssh_key(body: &CreateSshKeyRequest) -> Endpoint {
    Endpoint::post("add_ssh_key", "account/keys")
        .body(body)
        .required("ssh_key")
}

/// GET `account/keys/:key_id`
pub fn get_ssh_key(key: &SshKeyRef) -> Endpoint {
    Endpoint::get("get_ssh_key", "account/keys/:key_id")
        .param("key_id", key)
        .required("ssh_key")
}

/// PUT `account/keys/:key_id`
pub fn update_ssh_key(key: &SshKeyRef, body: &UpdateSshKeyRequest) -> Endpoint {
    Endpoint::put("update_ssh_key", "account/keys/:key_id")
        .param("key_id", key)
        .body(body)
        .required("ssh_key")
}

/// DELETE `account/keys/:key_id`
pub fn destroy_ssh_key(key: &SshKeyRef) -> Endpoint {
    Endpoint::delete("destroy_ssh_key", "account/keys/:key_id").param("key_id", key)
}

// domains

/// GET `domains`
pub fn get_domains(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_domains", "domains")
        .paged(query)
        .required("domains")
}

/// POST `domains`
pub fn create_domain(body: &CreateDomainRequest) -> Endpoint {
    Endpoint::post("create_domain", "domains")
        .body(body)
        .required("domain")
}

/// GET `domains/:domain_name`
pub fn get_domain(domain_name: &str) -> Endpoint {
    Endpoint::get("get_domain", "domains/:domain_name")
        .param("domain_name", domain_name)
        .required("domain")
}

/// DELETE `domains/:domain_name`
pub fn destroy_domain(domain_name: &str) -> Endpoint {
    Endpoint::delete("destroy_domain", "domains/:domain_name").param("domain_name", domain_name)
}

/// GET `domains/:domain_name/records`
pub fn get_domain_records(domain_name: &str, query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_domain_records", "domains/:domain_name/records")
        .param("domain_name", domain_name)
        .paged(query)
        .required("domain_records")
}

/// POST `domains/:domain_name/records`
pub fn create_domain_record(domain_name: &str, body: &DomainRecordRequest) -> Endpoint {
    Endpoint::post("create_domain_record", "domains/:domain_name/records")
        .param("domain_name", domain_name)
        .body(body)
        .required("domain_record")
}

/// GET `domains/:domain_name/records/:record_id`
pub fn get_domain_record(domain_name: &str, record_id: u64) -> Endpoint {
    Endpoint::get("get_domain_record", "domains/:domain_name/records/:record_id")
        .param("domain_name", domain_name)
        .param("record_id", record_id)
        .required("domain_record")
}

/// PUT `domains/:domain_name/records/:record_id`
pub fn update_domain_record(
    domain_name: &str,
    record_id: u64,
    body: &DomainRecordRequest,
) -> Endpoint {
    Endpoint::put(
        "update_domain_record",
        "domains/:domain_name/records/:record_id",
    )
    .param("domain_name", domain_name)
    .param("record_id", record_id)
    .body(body)
    .required("domain_record")
}

/// DELETE `domains/:domain_name/records/:record_id`
pub fn destroy_domain_record(domain_name: &str, record_id: u64) -> Endpoint {
    Endpoint::delete(
        "destroy_domain_record",
        "domains/:domain_name/records/:record_id",
    )
    .param("domain_name", domain_name)
    .param("record_id", record_id)
}

// actions

/// GET `actions`
pub fn get_actions(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_actions", "actions")
        .paged(query)
        .required("actions")
}

/// GET `actions/:action_id`
pub fn get_action(action_id: u64) -> Endpoint {
    Endpoint::get("get_action", "actions/:action_id")
        .param("action_id", action_id)
        .required("action")
}

// floating ips

/// GET `floating_ips`
pub fn get_floating_ips(query: Option<&ListQuery>) -> Endpoint {
    Endpoint::get("get_floating_ips", "floating_ips")
        .paged(query)
        .required("floating_ips")
}

/// GET `floating_ips/:ip`
pub fn get_floating_ip(ip: &str) -> Endpoint {
    Endpoint::get("get_floating_ip", "floating_ips/:ip")
        .param("ip", ip)
        .required("floating_ip")
}

/// POST `floating_ips`
pub fn create_floating_ip(body: &CreateFloatingIpRequest) -> Endpoint {
    Endpoint::post("create_floating_ip", "floating_ips")
        .body(body)
        .required("floating_ip")
}

/// DELETE `floating_ips/:ip`
pub fn destroy_floating_ip(ip: &str) -> Endpoint {
    Endpoint::delete("destroy_floating_ip", "floating_ips/:ip").param("ip", ip)
}

/// Floating IP action `assign`
pub fn assign_floating_ip(ip: &str, droplet_id: u64) -> Endpoint {
    Endpoint::post("assign_floating_ip", "floating_ips/:ip/actions")
        .param("ip", ip)
        .body(&ActionRequest::with_params(
            "assign",
            AssignFloatingIpRequest { droplet_id },
        ))
        .required("action")
}

/// Floating IP action `unassign`
pub fn unassign_floating_ip(ip: &str) -> Endpoint {
    Endpoint::post("unassign_floating_ip", "floating_ips/:ip/actions")
        .param("ip", ip)
        .body(&ActionRequest::<NoParams>::new("unassign"))
        .required("action")
}
