#![allow(dead_code)]

use serde_json::{json, Value};
use torus::{TorusBuilder, TorusClient};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-bearer-token";
pub const TEST_PUBLIC_KEY: &str = "test-public-key";

/// Client pointed at a local mock server
pub fn create_test_client(server: &MockServer) -> TorusClient {
    TorusBuilder::new()
        .with_credentials(TEST_TOKEN.to_string(), TEST_PUBLIC_KEY.to_string())
        .with_base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Successful envelope around `data`
pub fn envelope(data: Value) -> Value {
    json!({
        "status": 200,
        "message": "successful",
        "data": data,
    })
}

/// Error envelope as the API sends it
pub fn error_envelope(status: u16, details: &str) -> Value {
    json!({
        "status": status,
        "data": null,
        "error": {
            "id": "err-001",
            "details": details,
        },
    })
}
