#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use sensorpro_client::application::config::{Config, Credentials};
use sensorpro_client::error::AppError;
use sensorpro_client::model::http::{HttpResponse, Transport};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const SIGNIN_URL: &str = "https://apinie.sensorpro.net/auth/sys/signin";

/// A request captured by [`FakeTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Transport answering from a script and recording every request
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, AppError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: StatusCode, body: Value) {
        self.push(Ok(HttpResponse::json(status, &body)));
    }

    pub fn push_text(&self, status: StatusCode, body: &str) {
        self.push(Ok(HttpResponse::new(status, body)));
    }

    pub fn push_error(&self, error: AppError) {
        self.push(Err(error));
    }

    pub fn push_login(&self, token: &str, expires_in: u64) {
        self.push_json(StatusCode::OK, login_body(token, expires_in, "https://x/"));
    }

    pub fn push_ok(&self) {
        self.push_json(StatusCode::OK, ok_body());
    }

    fn push(&self, response: Result<HttpResponse, AppError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    pub fn login_count(&self) -> usize {
        self.urls().iter().filter(|u| *u == SIGNIN_URL).count()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: Option<&Value>,
    ) -> Result<HttpResponse, AppError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
            body: body.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::InvalidInput("no scripted response".to_string())))
    }
}

pub fn test_config() -> Config {
    Config::new(Credentials::new("k", "org", "u", "p"))
}

pub fn login_body(token: &str, expires_in: u64, api_endpoint: &str) -> Value {
    json!({
        "Token": token,
        "ExpiresIn": expires_in,
        "APIEndpoint": api_endpoint,
        "Result": { "TotalErrors": 0 }
    })
}

pub fn ok_body() -> Value {
    json!({ "Result": { "TotalErrors": 0 } })
}

pub fn error_body() -> Value {
    json!({
        "Result": {
            "TotalErrors": 1,
            "ErrorList": [{ "ErrorCode": 401, "Message": "Invalid credentials" }]
        }
    })
}
