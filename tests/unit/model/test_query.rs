use digitalocean_client::model::query::{ListQuery, merge_paging};
use std::collections::BTreeMap;

#[test]
fn test_list_query_to_params() {
    let query = ListQuery::new()
        .with_page(3)
        .with_per_page(20)
        .with_filter("tag_name", "web");
    let params = query.to_params();
    assert_eq!(params.get("page").map(String::as_str), Some("3"));
    assert_eq!(params.get("per_page").map(String::as_str), Some("20"));
    assert_eq!(params.get("tag_name").map(String::as_str), Some("web"));
}

#[test]
fn test_list_query_empty_has_no_params() {
    assert!(ListQuery::new().to_params().is_empty());
}

#[test]
fn test_merge_paging_fills_defaults() {
    let mut query = BTreeMap::new();
    merge_paging(&mut query, 100);
    assert_eq!(query.get("page").map(String::as_str), Some("1"));
    assert_eq!(query.get("per_page").map(String::as_str), Some("100"));
}

#[test]
fn test_merge_paging_keeps_caller_values() {
    let mut query = ListQuery::new().with_page(2).with_per_page(5).to_params();
    merge_paging(&mut query, 100);
    assert_eq!(query.get("page").map(String::as_str), Some("2"));
    assert_eq!(query.get("per_page").map(String::as_str), Some("5"));
}
