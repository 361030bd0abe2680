use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_journal, Journal, RecordedCall, LARGE_REPLY_PAYLOAD_BYTES, TOKEN_HEADER};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn connector_request(token: Option<&str>, body: &str) -> Request<String> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/connector.php")
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(TOKEN_HEADER, token);
    }
    builder.body(body.to_string()).unwrap()
}

// --- success ---

#[tokio::test]
async fn echoes_method_without_parameters() {
    let resp = app()
        .oneshot(connector_request(Some("t"), "method=getOrderSources"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, json!({"status": "SUCCESS", "method": "getOrderSources"}));
}

#[tokio::test]
async fn echoes_decoded_parameters() {
    let resp = app()
        .oneshot(connector_request(
            Some("t"),
            "method=getOrders&parameters=%7B%22order_id%22%3A123%7D",
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["parameters"], json!({"order_id": 123}));
}

// --- connector-style errors ---

#[tokio::test]
async fn missing_token_is_reported_in_body() {
    let resp = app()
        .oneshot(connector_request(None, "method=getOrders"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ERROR");
    assert_eq!(body["error_code"], "ERROR_BAD_TOKEN");
}

#[tokio::test]
async fn missing_method_is_unknown_method() {
    let resp = app().oneshot(connector_request(Some("t"), "")).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["error_code"], "ERROR_UNKNOWN_METHOD");
}

#[tokio::test]
async fn malformed_parameters_are_rejected() {
    let resp = app()
        .oneshot(connector_request(Some("t"), "method=getOrders&parameters=not-json"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["error_code"], "ERROR_PARAMETERS");
}

// --- html error page ---

#[tokio::test]
async fn html_error_is_not_json() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/html-error")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = body_bytes(resp).await;
    assert!(bytes.starts_with(b"<html>"));
    assert!(serde_json::from_slice::<Value>(&bytes).is_err());
}

// --- large reply ---

#[tokio::test]
async fn large_reply_exceeds_ten_mebibytes() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/large-reply")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["payload"].as_str().unwrap().len(), LARGE_REPLY_PAYLOAD_BYTES);
    assert!(LARGE_REPLY_PAYLOAD_BYTES > 10 * 1024 * 1024);
}

// --- journal ---

#[tokio::test]
async fn journal_records_each_call() {
    let journal = Journal::default();
    let app = app_with_journal(journal.clone());

    app.clone()
        .oneshot(connector_request(Some("abc"), "method=getSeries"))
        .await
        .unwrap();
    app.oneshot(connector_request(None, "method=getOrders&parameters=%7B%7D"))
        .await
        .unwrap();

    let calls = journal.read().await;
    assert_eq!(
        *calls,
        vec![
            RecordedCall {
                token: Some("abc".to_string()),
                method: Some("getSeries".to_string()),
                parameters: None,
            },
            RecordedCall {
                token: None,
                method: Some("getOrders".to_string()),
                parameters: Some("{}".to_string()),
            },
        ]
    );
}
