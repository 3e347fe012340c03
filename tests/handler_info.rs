mod common;

use serde_json::json;

#[tokio::test]
async fn test_info_success() {
    let (server, _) = common::create_test_server();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a", "expiration_in_minutes": 60 }))
        .await;

    let response = server
        .get("/api/info")
        .add_query_param("shortlink", "1")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com/a");
    assert_eq!(json["expiration_in_minutes"], 60);
    assert!(json["created_at"].is_string());
    assert!(json["expires_at"].is_string());
}

#[tokio::test]
async fn test_info_without_expiry_omits_expires_at() {
    let (server, _) = common::create_test_server();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a", "expiration_in_minutes": 0 }))
        .await;

    let json = server
        .get("/api/info")
        .add_query_param("shortlink", "1")
        .await
        .json::<serde_json::Value>();

    assert!(json.get("expires_at").is_none());
}

#[tokio::test]
async fn test_info_unknown_code() {
    let (server, _) = common::create_test_server();

    let response = server
        .get("/api/info")
        .add_query_param("shortlink", "zz")
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_info_non_canonical_code_is_not_found() {
    let (server, _) = common::create_test_server();

    for code in ["007", "ZZZZZZZZZZZ"] {
        let response = server
            .get("/api/info")
            .add_query_param("shortlink", code)
            .await;

        response.assert_status_not_found();
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["message"],
            "unknown short code"
        );
    }
}

#[tokio::test]
async fn test_info_invalid_code() {
    let (server, _) = common::create_test_server();

    let response = server
        .get("/api/info")
        .add_query_param("shortlink", "bad code!")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_info_missing_query() {
    let (server, _) = common::create_test_server();

    let response = server.get("/api/info").await;

    assert!(response.status_code().is_client_error());
}
