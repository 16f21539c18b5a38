use digitalocean_client::presentation::account::Account;
use digitalocean_client::presentation::action::{Action, ActionStatus};
use digitalocean_client::presentation::domain::{Domain, DomainRecord};
use digitalocean_client::presentation::floating_ip::FloatingIp;
use digitalocean_client::presentation::image::{Image, ImageType};
use digitalocean_client::presentation::size::Size;
use digitalocean_client::presentation::ssh_key::SshKey;
use serde_json::json;

#[test]
fn test_account_deserialization() {
    let account: Account = serde_json::from_value(json!({
        "droplet_limit": 25,
        "floating_ip_limit": 5,
        "email": "sammy@digitalocean.com",
        "uuid": "b6fr89dbf6d9156cace5f3c78dc9851d957381ef",
        "email_verified": true,
        "status": "active",
        "status_message": ""
    }))
    .unwrap();
    assert_eq!(account.droplet_limit, 25);
    assert!(account.email_verified);
    assert!(account.is_active());
}

#[test]
fn test_action_status_and_helpers() {
    let action: Action = serde_json::from_value(json!({
        "id": 36804636,
        "status": "in-progress",
        "type": "reboot",
        "started_at": "2014-11-14T16:29:21Z",
        "completed_at": null,
        "resource_id": 3164444,
        "resource_type": "droplet",
        "region": {"name": "New York 3", "slug": "nyc3", "sizes": [], "features": [], "available": true},
        "region_slug": "nyc3"
    }))
    .unwrap();
    assert_eq!(action.status, ActionStatus::InProgress);
    assert_eq!(action.action_type, "reboot");
    assert!(!action.is_finished());

    let errored: Action = serde_json::from_value(json!({"id": 1, "status": "errored"})).unwrap();
    assert!(errored.is_finished());
    assert!(!errored.is_completed());

    let unknown: ActionStatus = serde_json::from_value(json!("paused")).unwrap();
    assert_eq!(unknown, ActionStatus::Unknown);
}

#[test]
fn test_image_with_null_slug() {
    let image: Image = serde_json::from_value(json!({
        "id": 7555620,
        "name": "Nifty New Snapshot",
        "distribution": "Ubuntu",
        "slug": null,
        "public": false,
        "regions": ["nyc2", "nyc3"],
        "created_at": "2014-11-04T22:23:02Z",
        "type": "snapshot",
        "min_disk_size": 20,
        "size_gigabytes": 2.34
    }))
    .unwrap();
    assert_eq!(image.slug, None);
    assert_eq!(image.image_type, ImageType::Snapshot);
    assert_eq!(image.size_gigabytes, 2.34);
}

#[test]
fn test_size_and_ssh_key() {
    let size: Size = serde_json::from_value(json!({
        "slug": "s-1vcpu-1gb",
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "transfer": 1.0,
        "price_monthly": 6.0,
        "price_hourly": 0.00893,
        "regions": ["ams3", "nyc3"],
        "available": true
    }))
    .unwrap();
    assert_eq!(size.memory, 1024);
    assert_eq!(size.regions.len(), 2);

    let key: SshKey = serde_json::from_value(json!({
        "id": 512189,
        "fingerprint": "3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa",
        "public_key": "ssh-rsa AEXAMPLE example",
        "name": "My SSH Public Key"
    }))
    .unwrap();
    assert_eq!(key.id, 512189);
}

#[test]
fn test_domain_and_record() {
    let domain: Domain = serde_json::from_value(json!({
        "name": "example.com",
        "ttl": 1800,
        "zone_file": "$ORIGIN example.com."
    }))
    .unwrap();
    assert_eq!(domain.ttl, Some(1800));

    let record: DomainRecord = serde_json::from_value(json!({
        "id": 3352896,
        "type": "MX",
        "name": "@",
        "data": "mail.example.com",
        "priority": 10,
        "port": null,
        "weight": null
    }))
    .unwrap();
    assert_eq!(record.record_type, "MX");
    assert_eq!(record.priority, Some(10));
    assert_eq!(record.port, None);
}

#[test]
fn test_floating_ip_assignment() {
    let unassigned: FloatingIp = serde_json::from_value(json!({
        "ip": "45.55.96.47",
        "droplet": null,
        "region": {"name": "New York 3", "slug": "nyc3", "sizes": [], "features": [], "available": true}
    }))
    .unwrap();
    assert!(!unassigned.is_assigned());

    let assigned: FloatingIp = serde_json::from_value(json!({
        "ip": "45.55.96.47",
        "droplet": {"id": 3164494, "name": "example.com"},
        "region": {"slug": "nyc3"}
    }))
    .unwrap();
    assert!(assigned.is_assigned());
    assert_eq!(assigned.droplet.map(|d| d.id), Some(3164494));
}
