//! HTTP-level tests: the full router and middleware stack driven in-process

use axum::Router;
use axum::body::Body;
use axum::routing::get;
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shared::ErrorBody;
use shared::models::{ShiftFilter, ShiftStatus};
use shift_server::api;
use shift_server::{Config, ServerState, ShiftStore, TransitionPolicy};

fn empty_state(policy: TransitionPolicy) -> ServerState {
    ServerState::new(
        Config::with_overrides(0, false, policy),
        ShiftStore::new(policy),
    )
}

fn seeded_state() -> ServerState {
    ServerState::initialize(&Config::default())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, json)
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

fn assert_json_error(headers: &HeaderMap, body: &str) -> ErrorBody {
    let content_type = headers[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/json"), "{content_type}");
    serde_json::from_str(body).unwrap()
}

fn sample_payload() -> Value {
    json!({
        "venueName": "X",
        "pay": 40,
        "industry": "hospitality",
        "city": "Beograd",
        "date": "2024-01-01T00:00:00Z",
        "startTime": "08:00",
        "endTime": "16:00",
        "role": "Konobar"
    })
}

#[tokio::test]
async fn test_marketplace_lifecycle() {
    let app = api::build_app(empty_state(TransitionPolicy::Permissive));

    let (status, _, created) = send(&app, Method::POST, "/api/shifts", Some(sample_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "open");
    assert_eq!(created["venueName"], "X");
    assert_eq!(created["pay"], 40);
    assert!(created["pay"].is_u64());
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 9);

    let (status, _, listed) = send(
        &app,
        Method::GET,
        "/api/shifts?industry=hospitality&city=Beograd",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());

    let (status, _, applied) =
        send(&app, Method::POST, &format!("/api/shifts/{id}/apply"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(applied["status"], "pending");

    let (status, _, approved) =
        send(&app, Method::POST, &format!("/api/shifts/{id}/approve"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "booked");

    let (status, _, body) = send(&app, Method::GET, "/api/shifts/unknown-id/apply", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Shift not found" }));
}

#[tokio::test]
async fn test_list_returns_seed_in_insertion_order() {
    let state = seeded_state();
    let expected = state.store.list(&ShiftFilter::default());
    let app = api::build_app(state);

    let (status, _, listed) = send(&app, Method::GET, "/api/shifts", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    let expected_ids: Vec<&str> = expected.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, expected_ids);
    assert_eq!(ids.first(), Some(&"b1"));
}

#[tokio::test]
async fn test_list_filters() {
    let state = seeded_state();
    let app = api::build_app(state.clone());

    let (_, _, healthcare) = send(&app, Method::GET, "/api/shifts?industry=healthcare", None).await;
    let healthcare = healthcare.as_array().unwrap().clone();
    assert!(!healthcare.is_empty());
    assert!(healthcare.iter().all(|s| s["industry"] == "healthcare"));

    let (_, _, novi_sad) = send(&app, Method::GET, "/api/shifts?city=Novi%20Sad", None).await;
    let novi_sad = novi_sad.as_array().unwrap().clone();
    assert!(!novi_sad.is_empty());
    assert!(novi_sad.iter().all(|s| s["city"] == "Novi Sad"));

    let (_, _, both) = send(
        &app,
        Method::GET,
        "/api/shifts?industry=hospitality&city=Kragujevac",
        None,
    )
    .await;
    let expected = state.store.list(&ShiftFilter {
        industry: Some("hospitality".into()),
        city: Some("Kragujevac".into()),
    });
    assert_eq!(both.as_array().unwrap().len(), expected.len());

    // Empty value is no constraint
    let (_, _, all) = send(&app, Method::GET, "/api/shifts?industry=&city=", None).await;
    assert_eq!(all.as_array().unwrap().len(), state.store.len());
}

#[tokio::test]
async fn test_unknown_filter_value_returns_empty_list() {
    let app = api::build_app(seeded_state());

    let (status, _, body) = send(&app, Method::GET, "/api/shifts?industry=retail", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _, body) = send(&app, Method::GET, "/api/shifts?city=Zagreb", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_trailing_slash_collection_route() {
    let app = api::build_app(empty_state(TransitionPolicy::Permissive));

    let (status, _, created) = send(&app, Method::POST, "/api/shifts/", Some(sample_payload())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _, listed) = send(&app, Method::GET, "/api/shifts/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_create_ignores_client_id_and_status() {
    let state = empty_state(TransitionPolicy::Permissive);
    let app = api::build_app(state.clone());

    let mut payload = sample_payload();
    payload["id"] = json!("mine");
    payload["status"] = json!("booked");
    payload["workerId"] = json!("w-9");

    let (status, _, created) = send(&app, Method::POST, "/api/shifts", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], "mine");
    assert_eq!(created["status"], "open");
    assert!(created.get("workerId").is_none());
    assert!(!state.store.contains("mine"));
}

#[tokio::test]
async fn test_create_accepts_sparse_and_unvalidated_fields() {
    let app = api::build_app(empty_state(TransitionPolicy::Permissive));

    let (status, _, created) = send(
        &app,
        Method::POST,
        "/api/shifts",
        Some(json!({ "pay": -5, "date": "not-a-date", "startTime": "22:00", "endTime": "06:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["pay"], -5);
    assert_eq!(created["date"], "not-a-date");
    assert!(created.get("venueName").is_none());

    let (status, _, created) = send(&app, Method::POST, "/api/shifts", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "open");
}

#[tokio::test]
async fn test_create_rejects_malformed_json_with_error_body() {
    let state = empty_state(TransitionPolicy::Permissive);
    let app = api::build_app(state.clone());

    let (status, headers, body) = send_raw(
        &app,
        Method::POST,
        "/api/shifts",
        Some("application/json"),
        "{not json",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = assert_json_error(&headers, &body);
    assert!(error.error.starts_with("Invalid JSON body"), "{}", error.error);

    let (status, headers, body) = send_raw(
        &app,
        Method::POST,
        "/api/shifts",
        Some("application/json"),
        "[1, 2]",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = assert_json_error(&headers, &body);
    assert_eq!(error.error, "Request body must be a JSON object");

    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_create_stores_unknown_enum_values_and_wrong_types() {
    let state = empty_state(TransitionPolicy::Permissive);
    let app = api::build_app(state.clone());

    let (status, _, created) = send(
        &app,
        Method::POST,
        "/api/shifts",
        Some(json!({ "venueName": "X", "industry": "retail", "city": "Zagreb" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["industry"], "retail");
    assert_eq!(created["city"], "Zagreb");

    let (status, _, created) = send(
        &app,
        Method::POST,
        "/api/shifts",
        Some(json!({ "venueName": "X", "pay": "40", "startTime": 800 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["pay"], "40");
    assert_eq!(created["startTime"], 800);

    // unknown industry is listable by its raw value
    let (_, _, listed) = send(&app, Method::GET, "/api/shifts?industry=retail", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(state.store.len(), 2);
}

#[tokio::test]
async fn test_create_keeps_extra_keys() {
    let state = empty_state(TransitionPolicy::Permissive);
    let app = api::build_app(state.clone());

    let (status, _, created) = send(
        &app,
        Method::POST,
        "/api/shifts",
        Some(json!({ "venueName": "X", "notes": "bring apron", "perks": { "meal": true } })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["notes"], "bring apron");
    assert_eq!(created["perks"], json!({ "meal": true }));

    let id = created["id"].as_str().unwrap();
    let (_, _, listed) = send(&app, Method::GET, "/api/shifts", None).await;
    assert_eq!(listed[0]["id"], id);
    assert_eq!(listed[0]["notes"], "bring apron");
}

#[tokio::test]
async fn test_create_echoes_numbers_as_sent() {
    let app = api::build_app(empty_state(TransitionPolicy::Permissive));

    let (status, _, body) = send_raw(
        &app,
        Method::POST,
        "/api/shifts",
        Some("application/json"),
        r#"{"pay":40,"distance":1.5}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.contains(r#""pay":40,"#) || body.contains(r#""pay":40}"#), "{body}");
    assert!(body.contains(r#""distance":1.5"#), "{body}");
}

#[tokio::test]
async fn test_create_without_content_type_stores_empty_record() {
    let state = empty_state(TransitionPolicy::Permissive);
    let app = api::build_app(state.clone());

    let (status, _, body) = send_raw(
        &app,
        Method::POST,
        "/api/shifts",
        None,
        r#"{"venueName":"X"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(created["status"], "open");
    assert!(created.get("venueName").is_none());
    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn test_apply_and_approve_unknown_id() {
    let app = api::build_app(seeded_state());

    for action in ["apply", "approve"] {
        let (status, _, body) =
            send(&app, Method::POST, &format!("/api/shifts/nope/{action}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Shift not found" }));
    }
}

#[tokio::test]
async fn test_apply_records_worker() {
    let state = seeded_state();
    let app = api::build_app(state.clone());

    let (status, _, applied) = send(
        &app,
        Method::POST,
        "/api/shifts/b1/apply",
        Some(json!({ "workerId": "w-1", "workerName": "Ana" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(applied["status"], "pending");
    assert_eq!(applied["workerId"], "w-1");
    assert_eq!(applied["workerName"], "Ana");

    let stored = state.store.get("b1").unwrap();
    assert_eq!(stored.worker_id.as_deref(), Some("w-1"));
}

#[tokio::test]
async fn test_apply_rejects_malformed_body() {
    let state = seeded_state();
    let app = api::build_app(state.clone());

    let (status, headers, body) = send_raw(
        &app,
        Method::POST,
        "/api/shifts/b1/apply",
        Some("application/json"),
        "[1, 2",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&headers, &body);

    let (status, _, _) = send_raw(
        &app,
        Method::POST,
        "/api/shifts/b1/apply",
        Some("application/json"),
        r#"{"workerId": 5}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.store.get("b1").unwrap().status, ShiftStatus::Open);
}

#[tokio::test]
async fn test_apply_unknown_id_wins_over_malformed_body() {
    let app = api::build_app(seeded_state());

    let (status, headers, body) = send_raw(
        &app,
        Method::POST,
        "/api/shifts/nope/apply",
        Some("application/json"),
        "{not json",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error = assert_json_error(&headers, &body);
    assert_eq!(error, ErrorBody::new("Shift not found"));
}

#[tokio::test]
async fn test_permissive_transitions() {
    let state = seeded_state();
    let app = api::build_app(state.clone());

    // approve straight from open
    let (status, _, body) = send(&app, Method::POST, "/api/shifts/b1/approve", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "booked");

    // approve again stays booked
    let (status, _, body) = send(&app, Method::POST, "/api/shifts/b1/approve", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "booked");

    // apply on a booked shift moves it back to pending
    let (status, _, body) = send(&app, Method::POST, "/api/shifts/b1/apply", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn test_strict_transitions_conflict() {
    let state = empty_state(TransitionPolicy::Strict);
    let app = api::build_app(state.clone());

    let (_, _, created) = send(&app, Method::POST, "/api/shifts", Some(sample_payload())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _, body) =
        send(&app, Method::POST, &format!("/api/shifts/{id}/approve"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["details"]["from"], "open");
    assert_eq!(body["details"]["to"], "booked");

    let (status, _, _) = send(&app, Method::POST, &format!("/api/shifts/{id}/apply"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(&app, Method::POST, &format!("/api/shifts/{id}/apply"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _, body) =
        send(&app, Method::POST, &format!("/api/shifts/{id}/approve"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "booked");
}

#[tokio::test]
async fn test_get_on_action_routes_never_mutates() {
    let state = seeded_state();
    let app = api::build_app(state.clone());

    for action in ["apply", "approve"] {
        let (status, headers, body) =
            send(&app, Method::GET, &format!("/api/shifts/b1/{action}"), None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers[header::ALLOW], "POST");
        assert!(body["error"].is_string());
    }

    assert_eq!(state.store.get("b1").unwrap().status, ShiftStatus::Open);
}

#[tokio::test]
async fn test_health() {
    let state = seeded_state();
    let expected = state.store.len();
    let app = api::build_app(state);

    let (status, _, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "shift-server");
    assert_eq!(body["shifts"], expected);
    assert_eq!(body["transitions"], "permissive");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = api::build_app(seeded_state());

    let (status, _, body) = send(&app, Method::GET, "/api/venues", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = api::build_app(seeded_state());

    let (_, headers, _) = send(&app, Method::GET, "/health", None).await;
    assert!(headers.contains_key("x-request-id"));

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn test_handler_panic_becomes_opaque_500() {
    async fn explode() -> &'static str {
        panic!("store invariant broken")
    }

    let router = api::build_router().route("/boom", get(explode));
    let app = api::with_middleware(router).with_state(seeded_state());

    let (status, _, body) = send(&app, Method::GET, "/boom", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));

    // the app keeps serving after a panic
    let (status, _, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
