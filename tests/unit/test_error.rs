use digitalocean_client::error::AppError;
use digitalocean_client::model::responses::RequestInfo;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_validation() {
    let error = AppError::Validation {
        callee: "create_domain".to_string(),
        method: "POST".to_string(),
        path: "domains".to_string(),
        details: vec![
            "ip_address: ip_address is required".to_string(),
            "name: name is required".to_string(),
        ],
    };
    assert_eq!(
        error.to_string(),
        "validation error when calling \"create_domain\"\n[POST] /domains\n- ip_address: ip_address is required\n- name: name is required"
    );
}

#[test]
fn test_app_error_display_api_with_request_id() {
    let error = AppError::Api {
        status: StatusCode::NOT_FOUND,
        message: "The resource you were accessing could not be found.".to_string(),
        request: RequestInfo {
            id: Some("abc-123".to_string()),
            runtime: None,
        },
    };
    assert_eq!(
        error.to_string(),
        "api error (404 Not Found): The resource you were accessing could not be found. [request id: abc-123]"
    );
}

#[test]
fn test_app_error_display_api_without_request_id() {
    let error = AppError::Api {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: "Name is invalid".to_string(),
        request: RequestInfo::default(),
    };
    assert_eq!(
        error.to_string(),
        "api error (422 Unprocessable Entity): Name is invalid"
    );
}

#[test]
fn test_app_error_display_missing_field() {
    let error = AppError::MissingField {
        field: "droplet".to_string(),
        request: RequestInfo::default(),
    };
    assert_eq!(
        error.to_string(),
        "response was missing required field (droplet)"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("an API token is required".to_string());
    assert_eq!(error.to_string(), "invalid input: an API token is required");
}

#[test]
fn test_app_error_status_and_not_found() {
    let not_found = AppError::Api {
        status: StatusCode::NOT_FOUND,
        message: "missing".to_string(),
        request: RequestInfo::default(),
    };
    assert_eq!(not_found.status(), Some(StatusCode::NOT_FOUND));
    assert!(not_found.is_not_found());

    let invalid = AppError::InvalidInput("x".to_string());
    assert_eq!(invalid.status(), None);
    assert!(!invalid.is_not_found());
}

#[test]
fn test_app_error_from_serde_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error: "));
    assert!(error.source().is_some());
}
