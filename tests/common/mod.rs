//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use sysfas::config::ServerConfig;
use sysfas::render::Templates;
use sysfas::HttpServer;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PRODUCTS: &str =
    r#"{"products":[{"id":"ledger","name":"Ledger","description":"Bookkeeping"}]}"#;
pub const CAPABILITIES: &str = r#"{"capabilities":[{"type":"domain","name":"Finance","description":"Money","capabilities":[{"type":"capability","name":"Invoicing","description":"Bills","capabilities":[],"products":["ledger"],"processes":["billing-run"]}],"products":[],"processes":[]}]}"#;
pub const TEAMS: &str = r#"{"teams":[{"name":"Platform","description":"Core infra","processes":["deploy","oncall"]}]}"#;
pub const ARCHITECTURE: &str =
    r#"{"software-system":{"components":[{"name":"web","description":"Front end"}]}}"#;
pub const PIPELINES: &str = r#"{"pipelines":[{"name":"ci","description":"Build and test"}]}"#;
pub const VALUESTREAMS: &str =
    r#"{"valuestreams":[{"id":"o2c","name":"Order to cash","description":"Sales"}]}"#;

/// A temp data directory holding the given files.
pub fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in files {
        fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

/// A temp data directory with every resource file present.
pub fn full_data_dir() -> TempDir {
    data_dir(&[
        ("products.json", PRODUCTS),
        ("capabilities.json", CAPABILITIES),
        ("teams.json", TEAMS),
        ("architecture.json", ARCHITECTURE),
        ("pipelines.json", PIPELINES),
        ("valuestreams.json", VALUESTREAMS),
    ])
}

pub fn config_for(data: &Path) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.data.dir = data.to_path_buf();
    config
}

/// Router over `data` with the built-in templates.
pub fn app(data: &Path) -> Router {
    app_with(config_for(data))
}

pub fn app_with(config: ServerConfig) -> Router {
    HttpServer::with_templates(config, Templates::builtin()).router()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }
}

/// Send a GET through the router, optionally with an Accept header.
pub async fn get(router: Router, path: &str, accept: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().uri(path);
    if let Some(accept) = accept {
        builder = builder.header(header::ACCEPT, accept);
    }
    let response = router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub const BROWSER: Option<&str> = Some("text/html,application/xhtml+xml,*/*;q=0.8");
pub const JSON: Option<&str> = Some("application/json");
