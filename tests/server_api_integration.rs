//! Integration tests for the HTTP API, driven through the router with
//! `tower::ServiceExt::oneshot` against an in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use server::routes::strings::{ListStringsResponse, NaturalLanguageResponse};
use server::{ServerConfig, ServerState, build_router};
use string_analyzer::sha256_hex;
use tower::ServiceExt;

/// Status code, parsed JSON body (Null when empty) and raw body length.
type TestResponse = (u16, Value, usize);

fn create_test_state() -> Arc<ServerState> {
    Arc::new(ServerState::new(ServerConfig::in_memory()).expect("Failed to create test state"))
}

async fn send(state: &Arc<ServerState>, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(Body::from(body.unwrap_or_default().to_string()))
        .unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json, bytes.len())
}

async fn create(state: &Arc<ServerState>, value: &str) -> TestResponse {
    let body = json!({ "value": value }).to_string();
    send(state, "POST", "/strings", Some(&body)).await
}

fn encode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[tokio::test]
async fn create_returns_record_with_properties() {
    let state = create_test_state();
    let (status, body, _) = create(&state, "racecar").await;

    assert_eq!(status, 201);
    assert_eq!(body["id"], sha256_hex("racecar"));
    assert_eq!(body["value"], "racecar");
    assert_eq!(body["properties"]["length"], 7);
    assert_eq!(body["properties"]["is_palindrome"], true);
    assert_eq!(body["properties"]["unique_characters"], 4);
    assert_eq!(body["properties"]["word_count"], 1);
    assert_eq!(body["properties"]["sha256_hash"], sha256_hex("racecar"));
    assert_eq!(
        body["properties"]["character_frequency_map"],
        json!({"r": 2, "a": 2, "c": 2, "e": 1})
    );
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn duplicate_create_is_conflict() {
    let state = create_test_state();
    assert_eq!(create(&state, "hello").await.0, 201);

    let (status, body, _) = create(&state, "hello").await;
    assert_eq!(status, 409);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn missing_value_is_bad_request() {
    let state = create_test_state();
    let (status, body, _) = send(&state, "POST", "/strings", Some(r#"{"text": "hi"}"#)).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, _, _) = send(&state, "POST", "/strings", Some("not json")).await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let state = create_test_state();
    let limit = ServerConfig::in_memory().max_body_size();
    let body = json!({ "value": "a".repeat(limit * 2) }).to_string();

    let (status, json, _) = send(&state, "POST", "/strings", Some(&body)).await;
    assert_eq!(status, 413);
    assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn body_without_json_content_type_is_unsupported() {
    let state = create_test_state();
    let request = Request::builder()
        .method("POST")
        .uri("/strings")
        .body(Body::from(r#"{"value": "hello"}"#))
        .unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status().as_u16(), 415);
    assert_eq!(state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn non_string_value_is_unprocessable() {
    let state = create_test_state();
    for body in [r#"{"value": 42}"#, r#"{"value": null}"#, r#"{"value": ["a"]}"#] {
        let (status, json, _) = send(&state, "POST", "/strings", Some(body)).await;
        assert_eq!(status, 422, "{body}");
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
    }
}

#[tokio::test]
async fn get_round_trips_created_record() {
    let state = create_test_state();
    let (_, created, _) = create(&state, "hello world!").await;

    let (status, fetched, _) =
        send(&state, "GET", &format!("/strings/{}", encode("hello world!")), None).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_is_not_found() {
    let state = create_test_state();
    let (status, body, _) = send(&state, "GET", "/strings/missing", None).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let state = create_test_state();
    create(&state, "ephemeral").await;

    let (status, _, len) = send(&state, "DELETE", "/strings/ephemeral", None).await;
    assert_eq!(status, 204);
    assert_eq!(len, 0);

    assert_eq!(send(&state, "GET", "/strings/ephemeral", None).await.0, 404);
    assert_eq!(send(&state, "DELETE", "/strings/ephemeral", None).await.0, 404);
}

#[tokio::test]
async fn list_with_filters() {
    let state = create_test_state();
    for value in ["racecar", "level", "hello", "taco cat", "noon at noon"] {
        assert_eq!(create(&state, value).await.0, 201);
    }

    let (status, body, _) = send(&state, "GET", "/strings", None).await;
    assert_eq!(status, 200);
    let all: ListStringsResponse = serde_json::from_value(body).unwrap();
    assert_eq!(all.count, 5);
    assert!(all.filters_applied.is_empty());

    let (status, body, _) = send(
        &state,
        "GET",
        "/strings?is_palindrome=true&word_count=1&min_length=6",
        None,
    )
    .await;
    assert_eq!(status, 200);
    let filtered: ListStringsResponse = serde_json::from_value(body).unwrap();
    let values: Vec<_> = filtered.data.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["racecar"]);
    assert_eq!(filtered.count, 1);
    assert_eq!(filtered.filters_applied.min_length, Some(6));

    let (_, body, _) = send(&state, "GET", "/strings?contains_character=T", None).await;
    let with_t: ListStringsResponse = serde_json::from_value(body).unwrap();
    let mut values: Vec<_> = with_t.data.iter().map(|r| r.value.as_str()).collect();
    values.sort();
    assert_eq!(values, vec!["noon at noon", "taco cat"]);
}

#[tokio::test]
async fn list_rejects_invalid_filters() {
    let state = create_test_state();
    for uri in [
        "/strings?min_length=-1",
        "/strings?min_length=5&max_length=2",
        "/strings?contains_character=ab",
        "/strings?is_palindrome=maybe",
        "/strings?word_count=many",
    ] {
        let (status, _, _) = send(&state, "GET", uri, None).await;
        assert_eq!(status, 400, "{uri}");
    }
}

#[tokio::test]
async fn natural_language_filter() {
    let state = create_test_state();
    for value in ["racecar", "level", "hello", "taco cat"] {
        create(&state, value).await;
    }

    let (status, body, _) = send(
        &state,
        "GET",
        "/strings/filter-by-natural-language?query=all%20single%20word%20palindromic%20strings",
        None,
    )
    .await;
    assert_eq!(status, 200);
    let response: NaturalLanguageResponse = serde_json::from_value(body).unwrap();
    let mut values: Vec<_> = response.data.iter().map(|r| r.value.as_str()).collect();
    values.sort();
    assert_eq!(values, vec!["level", "racecar"]);
    assert_eq!(response.count, 2);
    assert_eq!(
        response.interpreted_query.original,
        "all single word palindromic strings"
    );
    assert_eq!(response.interpreted_query.parsed_filters.word_count, Some(1));
    assert_eq!(
        response.interpreted_query.parsed_filters.is_palindrome,
        Some(true)
    );
}

#[tokio::test]
async fn natural_language_errors() {
    let state = create_test_state();

    let (status, _, _) = send(
        &state,
        "GET",
        "/strings/filter-by-natural-language?query=tell%20me%20a%20joke",
        None,
    )
    .await;
    assert_eq!(status, 400);

    let (status, _, _) = send(&state, "GET", "/strings/filter-by-natural-language", None).await;
    assert_eq!(status, 400);

    let (status, body, _) = send(
        &state,
        "GET",
        "/strings/filter-by-natural-language?query=longer%20than%2010%20and%20shorter%20than%203",
        None,
    )
    .await;
    assert_eq!(status, 422);
    assert_eq!(body["error"]["code"], "CONFLICTING_FILTERS");
}

#[tokio::test]
async fn health_and_readiness() {
    let state = create_test_state();
    create(&state, "one").await;

    let (status, body, _) = send(&state, "GET", "/health", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");

    let (status, body, _) = send(&state, "GET", "/ready", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["components"]["store"], "memory");
    assert_eq!(body["stored_strings"], 1);

    let (status, body, _) = send(&state, "GET", "/metadata", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["stored_strings"], 1);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let state = create_test_state();
    let (status, body, _) = send(&state, "GET", "/nope", None).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn request_id_is_echoed() {
    let state = create_test_state();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();

    let response = build_router(state).oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn concurrent_creates_of_same_value_yield_one_success() {
    let state = create_test_state();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move { create(&state, "contended").await.0 })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|&&s| s == 201).count(), 1);
    assert_eq!(statuses.iter().filter(|&&s| s == 409).count(), 7);
}
