//! Integration tests for the quiz HTTP API.
//!
//! These tests drive the full router (layers included) through `oneshot`:
//! 1. Questions are served without scoring data
//! 2. Scoring reproduces the classification rules end to end
//! 3. Submissions validate before delivery and survive CRM failures
//! 4. Profile lookups fall back and distinguish misses from failures

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use style_quiz::adapters::{build_router, InMemoryProfileStore, MockCrmGateway, QuizAppState};
use style_quiz::config::ServerConfig;
use style_quiz::domain::quiz::QuestionBank;
use style_quiz::ports::{ContentStoreError, DeliveryError};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    crm: MockCrmGateway,
    profiles: InMemoryProfileStore,
}

fn test_app() -> TestApp {
    let crm = MockCrmGateway::new();
    let profiles = InMemoryProfileStore::new();
    let state = QuizAppState::new(Arc::new(QuestionBank::embedded().unwrap()))
        .with_crm(Arc::new(crm.clone()))
        .with_profiles(Arc::new(profiles.clone()));

    TestApp {
        router: build_router(state, &ServerConfig::default()),
        crm,
        profiles,
    }
}

fn bare_app() -> Router {
    let state = QuizAppState::new(Arc::new(QuestionBank::embedded().unwrap()));
    build_router(state, &ServerConfig::default())
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn all_romantic() -> Value {
    json!({
        "answers": {
            "jewelry": "a",
            "colors": "b",
            "fabrics": "c",
            "grooming": "b",
            "personality": ["a3", "b4", "c4"],
            "outfits": "a",
            "vibes": "b"
        }
    })
}

fn romantic_result() -> Value {
    json!({
        "primary": "romantic",
        "description": "You're mostly Romantic."
    })
}

// =============================================================================
// Questions
// =============================================================================

#[tokio::test]
async fn questions_are_listed_in_order() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/quiz/questions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 7);
    let ids: Vec<&str> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["jewelry", "colors", "fabrics", "grooming", "personality", "outfits", "vibes"]
    );
    assert_eq!(body["questions"][6]["type"], "image");
    assert!(body["questions"][0]["options"][0].get("archetype").is_none());
}

// =============================================================================
// Scoring
// =============================================================================

#[tokio::test]
async fn all_romantic_answers_score_romantic_only() {
    let app = test_app();
    let (status, body) = send(&app.router, post_json("/api/quiz/score", all_romantic())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primary"], "romantic");
    assert!(body.get("secondary").is_none());
    assert!(body.get("tertiary").is_none());
    assert_eq!(body["description"], "You're mostly Romantic.");
    assert_eq!(body["scores"]["romantic"], 22);
    assert_eq!(body["scores"]["bold"], 0);
}

#[tokio::test]
async fn empty_answers_are_unprocessable() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json("/api/quiz/score", json!({ "answers": {} })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_code"], "EMPTY_RANKING");
}

#[tokio::test]
async fn mixed_answers_produce_three_archetypes() {
    // natural 6, bold 3, rebellious 3; catalog order puts bold second
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json(
            "/api/quiz/score",
            json!({"answers": {"jewelry": "d", "colors": "e", "outfits": "e", "fabrics": "d"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primary"], "natural");
    assert!(body["description"]
        .as_str()
        .unwrap()
        .starts_with("You're mostly Natural with"));
}

#[tokio::test]
async fn repeated_multi_select_ids_count_once() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json(
            "/api/quiz/score",
            json!({"answers": {"personality": ["a4", "a4", "a4", "a4", "a4", "a4", "a4", "a4", "a4", "a4"]}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primary"], "bold");
    assert_eq!(body["scores"]["bold"], 1);
}

#[tokio::test]
async fn multi_select_over_cap_is_rejected() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json(
            "/api/quiz/score",
            json!({"answers": {"personality": ["a1", "a2", "a3", "a4", "a5", "a6", "b1"]}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "SELECTION_LIMIT_REACHED");
}

#[tokio::test]
async fn array_for_single_select_question_is_rejected() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json(
            "/api/quiz/score",
            json!({"answers": {"jewelry": ["a", "b", "c", "d", "e", "f"], "vibes": ["a", "a", "a"]}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "INVALID_ANSWER");
}

#[tokio::test]
async fn malformed_score_body_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/quiz/score")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
}

// =============================================================================
// Submission
// =============================================================================

#[tokio::test]
async fn submission_is_forwarded_to_crm() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json(
            "/api/submit-quiz",
            json!({
                "name": "Rose",
                "email": "rose@example.com",
                "result": romantic_result(),
                "timestamp": "2024-05-01T10:00:00Z"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Quiz results submitted successfully");

    let contacts = app.crm.contacts();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].primary_archetype, "romantic");
    assert_eq!(contacts[0].secondary_archetype, "");
    assert_eq!(app.crm.call_count("ensure_tag"), 1);
    assert_eq!(app.crm.call_count("tag_contact"), 1);
}

#[tokio::test]
async fn missing_email_is_rejected_without_crm_call() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        post_json(
            "/api/submit-quiz",
            json!({"name": "Rose", "result": romantic_result()}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "email");
    assert!(app.crm.calls().is_empty());
}

#[tokio::test]
async fn crm_failure_still_reports_success() {
    let app = test_app();
    app.crm
        .set_method_error("upsert_contact", DeliveryError::rejected(503, "maintenance"));

    let (status, body) = send(
        &app.router,
        post_json(
            "/api/submit-quiz",
            json!({"name": "Rose", "email": "rose@example.com", "result": romantic_result()}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(!app.crm.was_called("ensure_tag"));
}

#[tokio::test]
async fn submission_without_crm_succeeds() {
    let (status, body) = send(
        &bare_app(),
        post_json(
            "/api/submit-quiz",
            json!({"name": "Rose", "email": "rose@example.com", "result": romantic_result()}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

// =============================================================================
// Style Profiles
// =============================================================================

#[tokio::test]
async fn profile_lookup_falls_back_to_pair() {
    let app = test_app();
    app.profiles
        .insert("bold-classic", "rec2", json!({"title": "Bold & Classic"}));

    let (status, body) = send(
        &app.router,
        get("/api/style-profile?primary=bold&secondary=classic&tertiary=natural"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "rec2");
    assert_eq!(body["fields"]["title"], "Bold & Classic");
    assert_eq!(
        app.profiles.lookups(),
        vec!["bold-classic-natural", "bold-classic"]
    );
}

#[tokio::test]
async fn profile_lookup_miss_is_not_found() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/style-profile?primary=bold")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "PROFILE_NOT_FOUND");
}

#[tokio::test]
async fn profile_lookup_requires_primary() {
    let app = test_app();
    let (status, body) = send(&app.router, get("/api/style-profile?secondary=bold")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "primary");
    assert!(app.profiles.lookups().is_empty());
}

#[tokio::test]
async fn profile_lookup_rejects_unknown_archetype() {
    let app = test_app();
    let (status, _) = send(&app.router, get("/api/style-profile?primary=gothic")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_store_failure_is_server_error() {
    let app = test_app();
    app.profiles
        .fail_with(ContentStoreError::Network("timeout".into()));

    let (status, body) = send(&app.router, get("/api/style-profile?primary=bold")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error_code"], "CONTENT_STORE_ERROR");
}

#[tokio::test]
async fn unconfigured_profile_store_is_server_error() {
    let (status, body) = send(&bare_app(), get("/api/style-profile?primary=bold")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error_code"], "CONTENT_STORE_NOT_CONFIGURED");
}
