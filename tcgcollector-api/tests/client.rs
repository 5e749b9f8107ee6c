mod common;

use common::{API_KEY, MockServer, closed_address};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tcgcollector_api::endpoints::health::HealthStatus;
use tcgcollector_api::{
    CallOptions, CancellationToken, Client, EmptyResponse, ErrorKind, Request, TcgApiError,
};

const HEALTHY: &str = r#"{"status":"healthy","version":"1.0.0","timestamp":"2024-01-01T00:00:00Z"}"#;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Widget {
    name: String,
    count: u32,
}

#[tokio::test]
async fn health_check_decodes_status() {
    let server = MockServer::start(200, HEALTHY).await;
    let client = server.client();

    let health = client.send(Request::system().health()).await.unwrap();

    assert_eq!(
        health,
        HealthStatus {
            status: "healthy".into(),
            version: "1.0.0".into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
        }
    );

    let request = server.single_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/health");
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn every_request_carries_standard_headers() {
    let server = MockServer::start(200, HEALTHY).await;

    server.client().send(Request::system().health()).await.unwrap();

    let request = server.single_request();
    assert_eq!(
        request.header("authorization"),
        Some(format!("Bearer {API_KEY}").as_str())
    );
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("accept"), Some("application/json"));
}

#[tokio::test]
async fn api_error_carries_message_code_and_status() {
    let server = MockServer::start(
        400,
        r#"{"message":"Invalid request","code":"INVALID_REQUEST"}"#,
    )
    .await;

    let err = server
        .client()
        .send(Request::audit_log().event_type(1))
        .await
        .unwrap_err();

    assert_eq!(server.single_request().path, "/api/audit-log-event-types/1");
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(
        err.to_string(),
        "API error: Invalid request (code: INVALID_REQUEST)"
    );
}

#[tokio::test]
async fn not_found_is_an_api_error() {
    let server = MockServer::start(404, r#"{"message":"Not found","code":"NOT_FOUND"}"#).await;

    let err = server
        .client()
        .send(Request::cards().get(999))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.api_error().unwrap().code, "NOT_FOUND");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start(200, r#"{"invalid json"#).await;

    let err = server
        .client()
        .send(Request::system().health())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DecodeResponse);
    assert!(err.to_string().starts_with("failed to decode response:"));
}

#[tokio::test]
async fn malformed_error_body_is_an_error_decode_error() {
    let server = MockServer::start(500, "invalid json").await;

    let err = server
        .client()
        .send(Request::system().health())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DecodeErrorResponse);
    assert!(err.to_string().starts_with("failed to decode error response:"));
}

#[tokio::test]
async fn error_envelope_without_code_is_still_an_api_error() {
    let server = MockServer::start(422, r#"{"message":"Name is required"}"#).await;

    let err = server
        .client()
        .send(Request::system().health())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    assert_eq!(err.to_string(), "API error: Name is required (code: )");
}

#[tokio::test]
async fn empty_and_null_error_envelopes_decode_as_blank() {
    for body in ["{}", "null"] {
        let server = MockServer::start(500, body).await;

        let err = server
            .client()
            .send(Request::system().health())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api, "body {body}");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.to_string(), "API error:  (code: )");
    }
}

#[tokio::test]
async fn partial_record_decodes_with_zero_values() {
    let server = MockServer::start(200, r#"{"status":"healthy"}"#).await;

    let health = server.client().send(Request::system().health()).await.unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "");
    assert_eq!(health.timestamp, "");
}

#[tokio::test]
async fn bodyless_action_ignores_malformed_body() {
    let server = MockServer::start(200, r#"{"invalid json"#).await;

    let result = server.client().send(Request::cards().regenerate_slugs()).await;

    assert_eq!(result.unwrap(), EmptyResponse);
    let request = server.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/cards/regenerate-slugs");
}

#[tokio::test]
async fn error_status_wins_over_empty_destination() {
    let server = MockServer::start(
        403,
        r#"{"message":"Forbidden","code":"FORBIDDEN"}"#,
    )
    .await;

    let err = server
        .client()
        .send(Request::collections().delete(5))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn dispatch_round_trips_json_body() {
    let server = MockServer::start(201, r#"{"name":"binder","count":3}"#).await;
    let widget = Widget {
        name: "binder".into(),
        count: 3,
    };

    let created: Widget = server
        .client()
        .dispatch(
            Method::POST,
            "/api/widgets",
            Some(&widget),
            &CallOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(created, widget);
    let request = server.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.json(),
        serde_json::json!({ "name": "binder", "count": 3 })
    );
}

#[tokio::test]
async fn dispatch_preserves_query_in_path() {
    let server = MockServer::start(200, "[]").await;

    let _: Vec<Widget> = server
        .client()
        .dispatch::<(), _>(
            Method::GET,
            "/api/widgets?page=2&pageSize=10",
            None,
            &CallOptions::default(),
        )
        .await
        .unwrap();

    let request = server.single_request();
    assert_eq!(request.path, "/api/widgets");
    assert_eq!(request.query.as_deref(), Some("page=2&pageSize=10"));
}

#[tokio::test]
async fn construction_errors_happen_before_any_io() {
    let server = MockServer::start(200, HEALTHY).await;

    let err = server
        .client()
        .dispatch::<(), EmptyResponse>(
            Method::GET,
            "http://[::1",
            None,
            &CallOptions::default(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Construction);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn cancelled_token_stops_the_call() {
    let server = MockServer::start(200, HEALTHY).await;
    let token = CancellationToken::new();
    token.cancel();

    let err = server
        .client()
        .send_with(Request::system().health(), &CallOptions::new().cancel(token))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.to_string(), "failed to send request: request cancelled");
}

#[tokio::test]
async fn cancellation_interrupts_a_slow_response() {
    let server =
        MockServer::start_with_delay(200, HEALTHY, Some(Duration::from_secs(5))).await;
    let client = server.client();
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = client
        .send_with(Request::system().health(), &CallOptions::new().cancel(token))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
}

#[tokio::test]
async fn per_call_timeout_reports_deadline() {
    let server =
        MockServer::start_with_delay(200, HEALTHY, Some(Duration::from_secs(5))).await;

    let err = server
        .client()
        .send_with(
            Request::system().health(),
            &CallOptions::new().timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().starts_with("failed to send request: deadline exceeded"));
}

#[tokio::test]
async fn client_timeout_bounds_calls_without_deadline() {
    let server =
        MockServer::start_with_delay(200, HEALTHY, Some(Duration::from_secs(5))).await;
    let client = Client::builder(API_KEY)
        .base_url(&server.url())
        .timeout(Duration::from_millis(50))
        .build();

    let err = client.send(Request::system().health()).await.unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let client = Client::builder(API_KEY)
        .base_url(&closed_address().await)
        .build();

    let err = client.send(Request::system().health()).await.unwrap_err();

    assert!(matches!(err, TcgApiError::Send(_)));
    assert!(!err.is_cancelled());
    assert!(err.to_string().starts_with("failed to send request:"));
}

#[tokio::test]
async fn custom_transport_is_used() {
    let server = MockServer::start(200, HEALTHY).await;
    let http = reqwest::Client::builder()
        .user_agent("tcgc-test")
        .build()
        .unwrap();
    let client = Client::builder(API_KEY)
        .base_url(&server.url())
        .http_client(http)
        .build();

    client.send(Request::system().health()).await.unwrap();

    assert_eq!(server.single_request().header("user-agent"), Some("tcgc-test"));
}

#[tokio::test]
async fn shared_client_serves_concurrent_calls() {
    let server = MockServer::start(200, HEALTHY).await;
    let client = Arc::new(server.client());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.send(Request::system().health()).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().status, "healthy");
    }
    assert_eq!(server.requests().len(), 8);
}
