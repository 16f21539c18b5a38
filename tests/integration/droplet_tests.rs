// Integration tests for droplet endpoints

use crate::common;
use digitalocean_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_get_droplets_with_default_paging() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/droplets")
        .match_query(common::default_paging())
        .match_header("authorization", common::bearer().as_str())
        .with_status(200)
        .with_body(
            json!({
                "droplets": [
                    {"id": 1, "name": "web-1", "status": "active"},
                    {"id": 2, "name": "web-2", "status": "off"}
                ],
                "links": {},
                "meta": {"total": 2}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let droplets = client.get_droplets(None).await.unwrap();
    assert_eq!(droplets.len(), 2);
    assert_eq!(droplets[1].status, DropletStatus::Off);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_droplets_with_caller_query() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/droplets")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "3".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
            Matcher::UrlEncoded("tag_name".into(), "web".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"droplets": []}"#)
        .create_async()
        .await;

    let query = ListQuery::new()
        .with_page(3)
        .with_per_page(10)
        .with_filter("tag_name", "web");
    let droplets = client.get_droplets(Some(&query)).await.unwrap();
    assert!(droplets.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_droplet() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("POST", "/droplets")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "web-1",
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": "ubuntu-24-04-x64",
            "ssh_keys": [107149],
            "ipv6": true
        })))
        .with_status(202)
        .with_body(
            json!({
                "droplet": {"id": 3164494, "name": "web-1", "status": "new", "locked": true},
                "links": {"actions": [{"id": 36805096, "rel": "create"}]}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = CreateDropletRequest::new("web-1", "nyc3", "s-1vcpu-1gb", "ubuntu-24-04-x64")
        .with_ssh_keys(vec![SshKeyRef::Id(107149)])
        .with_ipv6(true);
    let droplet = client.create_droplet(&request).await.unwrap();
    assert_eq!(droplet.id, 3164494);
    assert_eq!(droplet.status, DropletStatus::New);
    assert!(droplet.locked);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_destroy_droplet() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("DELETE", "/droplets/3164494")
        .with_status(204)
        .create_async()
        .await;

    client.destroy_droplet(3164494).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_droplet_not_found() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/droplets/1")
        .with_status(404)
        .with_body(r#"{"id":"not_found","message":"The resource you were accessing could not be found."}"#)
        .create_async()
        .await;

    let error = client.get_droplet(1).await.unwrap_err();
    assert!(error.is_not_found());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_droplet_sub_resources() {
    let (mut server, client) = common::create_test_client().await;
    let kernels = server
        .mock("GET", "/droplets/7/kernels")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(r#"{"kernels": [{"id": 231, "name": "DO-recovery-static-fsck", "version": "3.8.0-25-generic"}]}"#)
        .create_async()
        .await;
    let snapshots = server
        .mock("GET", "/droplets/7/snapshots")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(r#"{"snapshots": [{"id": 7938206, "name": "nginx-snapshot", "type": "snapshot"}]}"#)
        .create_async()
        .await;
    let backups = server
        .mock("GET", "/droplets/7/backups")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(r#"{"backups": [{"id": 7622989, "name": "web-1 backup", "type": "backup"}]}"#)
        .create_async()
        .await;
    let actions = server
        .mock("GET", "/droplets/7/actions")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(r#"{"actions": [{"id": 1, "status": "completed", "type": "create"}]}"#)
        .create_async()
        .await;
    let neighbors = server
        .mock("GET", "/droplets/7/neighbors")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(r#"{"droplets": [{"id": 8, "name": "other"}]}"#)
        .create_async()
        .await;

    let found = client.get_droplet_kernels(7, None).await.unwrap();
    assert_eq!(found[0].version, "3.8.0-25-generic");
    let found = client.get_droplet_snapshots(7, None).await.unwrap();
    assert_eq!(found[0].image_type, ImageType::Snapshot);
    let found = client.get_droplet_backups(7, None).await.unwrap();
    assert_eq!(found[0].image_type, ImageType::Backup);
    let found = client.get_droplet_actions(7, None).await.unwrap();
    assert!(found[0].is_completed());
    let found = client.get_droplet_neighbors(7, None).await.unwrap();
    assert_eq!(found[0].id, 8);

    kernels.assert_async().await;
    snapshots.assert_async().await;
    backups.assert_async().await;
    actions.assert_async().await;
    neighbors.assert_async().await;
}

#[tokio::test]
async fn test_get_droplet_neighbors_report() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/reports/droplet_neighbors")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(
            json!({
                "neighbors": [
                    [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let report = client.get_droplet_neighbors_report(None).await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_droplet_upgrades_uses_whole_body() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/droplet_upgrades")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(
            json!([
                {
                    "droplet_id": 123,
                    "date_of_migration": "2015-04-20T00:00:00Z",
                    "url": "https://api.digitalocean.com/v2/droplets/123"
                }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let upgrades = client.get_droplet_upgrades(None).await.unwrap();
    assert_eq!(upgrades.len(), 1);
    assert_eq!(upgrades[0].droplet_id, 123);
    mock.assert_async().await;
}
