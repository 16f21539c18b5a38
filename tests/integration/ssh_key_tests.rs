// Integration tests for SSH key endpoints

use crate::common;
use digitalocean_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

const FINGERPRINT: &str = "3b:16:bf:e4:8b:00:8b:b8:59:8c:a9:d3:f0:19:45:fa";

fn key_body(name: &str) -> String {
    json!({
        "ssh_key": {
            "id": 512190,
            "fingerprint": FINGERPRINT,
            "public_key": "ssh-rsa AEXAMPLE example",
            "name": name
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_list_and_add_ssh_keys() {
    let (mut server, client) = common::create_test_client().await;
    let list = server
        .mock("GET", "/account/keys")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(r#"{"ssh_keys": [], "links": {}, "meta": {"total": 0}}"#)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/account/keys")
        .match_body(Matcher::Json(json!({
            "name": "My SSH Public Key",
            "public_key": "ssh-rsa AEXAMPLE example"
        })))
        .with_status(201)
        .with_body(key_body("My SSH Public Key"))
        .create_async()
        .await;

    assert!(client.get_ssh_keys(None).await.unwrap().is_empty());
    let request = CreateSshKeyRequest {
        name: "My SSH Public Key".to_string(),
        public_key: "ssh-rsa AEXAMPLE example".to_string(),
    };
    let key = client.add_ssh_key(&request).await.unwrap();
    assert_eq!(key.fingerprint, FINGERPRINT);

    list.assert_async().await;
    add.assert_async().await;
}

#[tokio::test]
async fn test_ssh_key_by_id_and_fingerprint() {
    let (mut server, client) = common::create_test_client().await;
    let by_id = server
        .mock("GET", "/account/keys/512190")
        .with_status(200)
        .with_body(key_body("My SSH Public Key"))
        .create_async()
        .await;
    let by_fingerprint = server
        .mock("PUT", format!("/account/keys/{FINGERPRINT}").as_str())
        .match_body(Matcher::Json(json!({"name": "Renamed SSH Key"})))
        .with_status(200)
        .with_body(key_body("Renamed SSH Key"))
        .create_async()
        .await;
    let destroy = server
        .mock("DELETE", "/account/keys/512190")
        .with_status(204)
        .create_async()
        .await;

    let key = client.get_ssh_key(&SshKeyRef::Id(512190)).await.unwrap();
    assert_eq!(key.id, 512190);

    let request = UpdateSshKeyRequest {
        name: "Renamed SSH Key".to_string(),
    };
    let key = client
        .update_ssh_key(&SshKeyRef::from(FINGERPRINT), &request)
        .await
        .unwrap();
    assert_eq!(key.name, "Renamed SSH Key");

    client.destroy_ssh_key(&SshKeyRef::Id(512190)).await.unwrap();

    by_id.assert_async().await;
    by_fingerprint.assert_async().await;
    destroy.assert_async().await;
}
