//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use tower::ServiceExt;

use crudhub_api::{AppState, build_app, build_state};
use crudhub_core::config::AppConfig;
use crudhub_core::types::RecordId;

const TEST_CONFIG: &str = include_str!("../fixtures/test_config.toml");

/// Test application context
pub struct TestApp {
    /// The full Axum app, middleware included
    pub router: Router,
    /// Shared state, for direct repository access
    pub state: AppState,
}

impl TestApp {
    /// A fresh in-memory app with the sample tasks seeded.
    pub async fn new() -> Self {
        Self::with_seed(true).await
    }

    /// A fresh in-memory app, optionally seeded.
    pub async fn with_seed(seed_fixtures: bool) -> Self {
        let mut config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to load test config");
        config.database.seed_fixtures = seed_fixtures;

        let state = build_state(config).await.expect("Failed to build state");
        let router = build_app(state.clone());

        Self { router, state }
    }

    /// GET `path`, optionally sending a cookie header.
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        self.request("GET", path, None, cookie).await
    }

    /// POST an urlencoded form body to `path`.
    pub async fn post_form(&self, path: &str, body: &str) -> TestResponse {
        self.request("POST", path, Some(body), None).await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        form: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if form.is_some() {
            req = req.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        }
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(form.unwrap_or_default().to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body as text
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Every `Set-Cookie` header value.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// `name=value` of the flash cookie set by this response, suitable for
    /// a follow-up `Cookie` header.
    pub fn flash_cookie(&self) -> Option<String> {
        self.set_cookies()
            .into_iter()
            .find(|c| c.starts_with("crudhub_flash="))
            .and_then(|c| c.split(';').next().map(str::to_string))
    }
}

/// Shorthand for a known-valid identifier.
pub fn id(raw: i64) -> RecordId {
    RecordId::new(raw).expect("positive id")
}
