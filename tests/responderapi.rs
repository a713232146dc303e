#[path = "support.rs"]
mod support;

use base64::prelude::{Engine as _, BASE64_STANDARD};
use serde_json::Value;

#[tokio::test]
async fn get_root_with_no_params_returns_200_default_record() {
    let base = support::spawn(echo_services::responder::handle).await;

    let resp = reqwest::get(&base).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "GET");
    assert_eq!(body["content_length"], 0);
    assert_eq!(body["params"], serde_json::json!({ "random_delay": {} }));
    assert_eq!(body["url_path"], "/");
}

#[tokio::test]
async fn status_code_param_is_reflected_in_status_and_params() {
    let base = support::spawn(echo_services::responder::handle).await;

    let resp = reqwest::get(format!("{base}/?status_code=402")).await.unwrap();
    assert_eq!(resp.status(), 402);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["params"]["status_code"], 402);
    assert_eq!(body["url_path"], "/?status_code=402");
}

#[tokio::test]
async fn post_body_is_reflected_as_base64_with_correct_length() {
    let base = support::spawn(echo_services::responder::handle).await;

    let payload = serde_json::json!({ "payload": "Request body" }).to_string();
    assert_eq!(payload.len(), 27);

    let client = reqwest::Client::new();
    let resp = client.post(&base).body(payload.clone()).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();

    assert_eq!(body["content_length"], 27);
    assert_eq!(body["request_body"], "eyJwYXlsb2FkIjogIlJlcXVlc3QgYm9keSJ9");
    assert_eq!(
        BASE64_STANDARD
            .decode(body["request_body"].as_str().unwrap())
            .unwrap(),
        payload.into_bytes()
    );
}

#[tokio::test]
async fn expected_headers_populates_found_headers() {
    let base = support::spawn(echo_services::responder::handle).await;

    let custom = BASE64_STANDARD.encode("Custom-Header");
    let other = BASE64_STANDARD.encode("Some-Other-Header");

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{base}/?expected_headers={custom},{other}"))
        .header("Custom-Header", "2024SEP01")
        .header("Some-Other-Header", "Anything")
        .header("Content-Type", "application/example")
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    let found = body["found_headers"].as_array().unwrap();
    let found: Vec<&str> = found.iter().map(|v| v.as_str().unwrap()).collect();

    assert!(found.contains(&"Custom-Header: 2024SEP01"));
    assert!(found.contains(&"Some-Other-Header: Anything"));
    assert!(!found.iter().any(|h| h.starts_with("Content-Type")));
}

#[tokio::test]
async fn headers_directive_sets_response_headers() {
    let base = support::spawn(echo_services::responder::handle).await;

    let directive = BASE64_STANDARD.encode("X-Responder: hello");
    let resp = reqwest::get(format!("{base}/?headers={directive}")).await.unwrap();

    assert_eq!(resp.headers().get("x-responder").unwrap(), "hello");
}

#[tokio::test]
async fn no_body_yields_empty_response() {
    let base = support::spawn(echo_services::responder::handle).await;

    let resp = reqwest::get(format!("{base}/?no_body")).await.unwrap();
    let body = resp.bytes().await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn body_directive_overrides_default_record() {
    let base = support::spawn(echo_services::responder::handle).await;

    let directive = BASE64_STANDARD.encode("hello, world");
    let resp = reqwest::get(format!("{base}/?body={directive}")).await.unwrap();
    let body = resp.text().await.unwrap();
    assert_eq!(body, "hello, world");
}

#[tokio::test]
async fn delay_param_blocks_for_at_least_the_requested_duration() {
    let base = support::spawn(echo_services::responder::handle).await;

    let start = std::time::Instant::now();
    let _resp = reqwest::get(format!("{base}/?delay=50")).await.unwrap();
    assert!(start.elapsed() >= std::time::Duration::from_millis(50));
}

#[tokio::test]
async fn malformed_status_code_returns_400_plain_text() {
    let base = support::spawn(echo_services::responder::handle).await;

    let resp = reqwest::get(format!("{base}/?status_code=nope")).await.unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/plain; charset=utf-8"
    );
}
