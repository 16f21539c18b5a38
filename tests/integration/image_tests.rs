// Integration tests for image endpoints

use crate::common;
use digitalocean_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

fn images_body() -> String {
    json!({
        "images": [{
            "id": 6918990,
            "name": "14.04 x64",
            "distribution": "Ubuntu",
            "slug": "ubuntu-14-04-x64",
            "public": true,
            "regions": ["nyc3"],
            "type": "distribution",
            "min_disk_size": 20
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_get_images_by_type() {
    let (mut server, client) = common::create_test_client().await;
    let distribution = server
        .mock("GET", "/images")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "distribution".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(images_body())
        .expect(1)
        .create_async()
        .await;
    let application = server
        .mock("GET", "/images")
        .match_query(Matcher::UrlEncoded("type".into(), "application".into()))
        .with_status(200)
        .with_body(r#"{"images": []}"#)
        .expect(1)
        .create_async()
        .await;
    let private = server
        .mock("GET", "/images")
        .match_query(Matcher::UrlEncoded("private".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"images": []}"#)
        .expect(1)
        .create_async()
        .await;

    let images = client.get_distribution_images(None).await.unwrap();
    assert_eq!(images[0].image_type, ImageType::Distribution);
    assert!(client.get_application_images(None).await.unwrap().is_empty());
    assert!(client.get_my_images(None).await.unwrap().is_empty());

    distribution.assert_async().await;
    application.assert_async().await;
    private.assert_async().await;
}

#[tokio::test]
async fn test_get_all_images() {
    let (mut server, client) = common::create_test_client().await;
    let mock = server
        .mock("GET", "/images")
        .match_query(common::default_paging())
        .with_status(200)
        .with_body(images_body())
        .create_async()
        .await;

    let images = client.get_images(None).await.unwrap();
    assert_eq!(images.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_and_destroy_image() {
    let (mut server, client) = common::create_test_client().await;
    let get = server
        .mock("GET", "/images/7555620")
        .with_status(200)
        .with_body(r#"{"image": {"id": 7555620, "name": "Nifty New Snapshot", "slug": null, "type": "snapshot"}}"#)
        .create_async()
        .await;
    let destroy = server
        .mock("DELETE", "/images/7555620")
        .with_status(204)
        .create_async()
        .await;

    let image = client.get_image(7555620).await.unwrap();
    assert_eq!(image.slug, None);
    client.destroy_image(7555620).await.unwrap();
    get.assert_async().await;
    destroy.assert_async().await;
}

#[tokio::test]
async fn test_image_actions() {
    let (mut server, client) = common::create_test_client().await;
    let transfer = server
        .mock("POST", "/images/7938269/actions")
        .match_body(Matcher::Json(json!({"type": "transfer", "region": "nyc2"})))
        .with_status(201)
        .with_body(r#"{"action": {"id": 36805527, "status": "in-progress", "type": "transfer", "resource_type": "image"}}"#)
        .expect(1)
        .create_async()
        .await;
    let convert = server
        .mock("POST", "/images/7938269/actions")
        .match_body(Matcher::Json(json!({"type": "convert"})))
        .with_status(201)
        .with_body(r#"{"action": {"id": 36805528, "status": "in-progress", "type": "convert", "resource_type": "image"}}"#)
        .expect(1)
        .create_async()
        .await;

    let request = TransferImageRequest {
        region: "nyc2".to_string(),
    };
    let action = client.transfer_image(7938269, &request).await.unwrap();
    assert_eq!(action.action_type, "transfer");
    let action = client.convert_image_to_snapshot(7938269).await.unwrap();
    assert_eq!(action.action_type, "convert");

    transfer.assert_async().await;
    convert.assert_async().await;
}
