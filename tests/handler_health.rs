mod common;

use async_trait::async_trait;
use serde_json::json;
use shortlink::infrastructure::store::{KeyValueStore, StoreError, StoreResult};
use std::sync::Arc;
use std::time::Duration;

/// Backend that refuses every command.
struct DownStore;

#[async_trait]
impl KeyValueStore for DownStore {
    async fn incr(&self, _key: &str) -> StoreResult<i64> {
        Err(StoreError::ConnectionError("refused".to_string()))
    }

    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::ConnectionError("refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> StoreResult<()> {
        Err(StoreError::ConnectionError("refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

#[tokio::test]
async fn test_health_ok() {
    let (server, _) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded_when_backend_down() {
    let server = common::create_server_with_store(Arc::new(DownStore));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn test_backend_failure_surfaces_as_503() {
    let server = common::create_server_with_store(Arc::new(DownStore));

    let shorten = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a", "expiration_in_minutes": 5 }))
        .await;
    assert_eq!(shorten.status_code(), 503);
    assert_eq!(
        shorten.json::<serde_json::Value>()["error"]["code"],
        "backend_unavailable"
    );

    assert_eq!(server.get("/1").await.status_code(), 503);
}
