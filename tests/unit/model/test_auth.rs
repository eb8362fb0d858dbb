use assert_json_diff::assert_json_eq;
use chrono::{Duration, Utc};
use sensorpro_client::application::config::Credentials;
use sensorpro_client::error::AppError;
use sensorpro_client::model::auth::{LoginRequest, LoginResponse};
use serde_json::json;

#[test]
fn test_login_request_uses_pascal_case() {
    let credentials = Credentials::new("k", "org", "u", "p");
    let request = LoginRequest::from(&credentials);
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "Organization": "org", "User": "u", "Password": "p" })
    );
}

#[test]
fn test_login_request_omits_api_key() {
    let credentials = Credentials::new("k", "org", "u", "p");
    let value = serde_json::to_value(LoginRequest::from(&credentials)).unwrap();
    assert!(value.get("ApiKey").is_none());
    assert!(!value.to_string().contains("\"k\""));
}

#[test]
fn test_login_response_into_session() {
    let response: LoginResponse = serde_json::from_value(json!({
        "Token": "T1",
        "ExpiresIn": 3600,
        "APIEndpoint": "https://x/",
        "Result": { "TotalErrors": 0 }
    }))
    .unwrap();

    let now = Utc::now();
    let session = response.into_session(now).unwrap();

    assert_eq!(session.token(), "T1");
    assert_eq!(session.api_endpoint(), "https://x/");
    assert_eq!(session.expires_at(), now + Duration::seconds(3600));
    assert!(session.is_valid_at(now));
}

#[test]
fn test_login_response_fractional_expiry() {
    let response: LoginResponse = serde_json::from_value(json!({
        "Token": "T1",
        "ExpiresIn": 1.5,
        "APIEndpoint": "https://x/",
        "Result": { "TotalErrors": 0 }
    }))
    .unwrap();

    let now = Utc::now();
    let session = response.into_session(now).unwrap();
    assert_eq!(session.expires_at(), now + Duration::milliseconds(1500));
}

#[test]
fn test_login_response_with_errors() {
    let response: LoginResponse = serde_json::from_value(json!({
        "Result": { "TotalErrors": 1, "ErrorList": [{ "Message": "Invalid API key" }] }
    }))
    .unwrap();

    match response.into_session(Utc::now()) {
        Err(AppError::SensorPro(result)) => assert_eq!(result.total_errors(), 1),
        other => panic!("Expected SensorPro error, got {other:?}"),
    }
}

#[test]
fn test_login_response_missing_endpoint() {
    let response: LoginResponse = serde_json::from_value(json!({
        "Token": "T1",
        "ExpiresIn": 3600,
        "Result": { "TotalErrors": 0 }
    }))
    .unwrap();

    assert!(matches!(
        response.into_session(Utc::now()),
        Err(AppError::Deserialization(_))
    ));
}

#[test]
fn test_login_response_requires_result() {
    let parsed = serde_json::from_value::<LoginResponse>(json!({ "Token": "T1" }));
    assert!(parsed.is_err());
}

fn login_response_expiring_in(expires_in: serde_json::Value) -> LoginResponse {
    serde_json::from_value(json!({
        "Token": "T1",
        "ExpiresIn": expires_in,
        "APIEndpoint": "https://x/",
        "Result": { "TotalErrors": 0 }
    }))
    .unwrap()
}

#[test]
fn test_login_response_huge_expiry_is_rejected() {
    for expires_in in [json!(1e13), json!(1e300), json!(u64::MAX)] {
        match login_response_expiring_in(expires_in.clone()).into_session(Utc::now()) {
            Err(AppError::Deserialization(msg)) => assert!(msg.contains("ExpiresIn")),
            other => panic!("Expected Deserialization error for {expires_in}, got {other:?}"),
        }
    }
}

#[test]
fn test_login_response_negative_expiry_is_rejected() {
    assert!(matches!(
        login_response_expiring_in(json!(-1)).into_session(Utc::now()),
        Err(AppError::Deserialization(_))
    ));
}

#[test]
fn test_login_response_zero_expiry_expires_immediately() {
    let now = Utc::now();
    let session = login_response_expiring_in(json!(0)).into_session(now).unwrap();
    assert_eq!(session.expires_at(), now);
    assert!(!session.is_valid_at(now));
}
