//! Integration tests for the HTTP check-in gateway.
//!
//! A local axum server stands in for the persistence service so the reqwest
//! client is exercised over real sockets:
//! 1. Request bodies use the service's wire names
//! 2. Responses are read leniently
//! 3. Failures map to `PersistenceError`

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use echo_checkin::adapters::{HttpCheckInGateway, HttpGatewayConfig};
use echo_checkin::domain::checkin::Entry;
use echo_checkin::domain::dashboard::{count_series, weekly_trend};
use echo_checkin::domain::foundation::{EntryId, Timestamp, UserId};
use echo_checkin::domain::reflection::{Reflection, ReflectionMode, ReflectionResponses};
use echo_checkin::ports::{CheckInGateway, NewCheckIn, PersistenceError, ReflectionReceipt};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Requests the stand-in service received
#[derive(Clone, Default)]
struct Received {
    bodies: Arc<Mutex<Vec<(String, Value)>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl Received {
    fn bodies(&self) -> Vec<(String, Value)> {
        self.bodies.lock().unwrap().clone()
    }
}

async fn submit_mood(
    State(received): State<Received>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    received.bodies.lock().unwrap().push(("mood".into(), body));
    (StatusCode::CREATED, Json(json!({"ok": true, "id": "665f1c2e"})))
}

async fn submit_reflection(
    State(received): State<Received>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let missing = body.get("entryId").map_or(true, Value::is_null);
    received.bodies.lock().unwrap().push(("reflection".into(), body));
    if missing {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "entryId required"})));
    }
    (StatusCode::CREATED, Json(json!({"ok": true})))
}

async fn dashboard_data(
    State(received): State<Received>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    received.queries.lock().unwrap().push(query);
    Json(json!({
        "weeklyTrend": {"labels": ["Mon", "Tue", "Wed"], "values": [4, null, "5"]},
        "moodFrequency": {"labels": ["Awful", "Low", "Okay", "Good", "Great"], "values": [0, 1, 0, 3, 1]},
        "tagFrequency": {"labels": ["anxious", "grateful"], "values": [2]},
        "journalCount": 2
    }))
}

async fn recent_entries(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let user = query.get("userId").cloned().unwrap_or_default();
    Json(json!({
        "entries": [
            {"id": "e2", "mood": "good", "intensity": 4, "note": user,
             "tags": ["grateful"], "at": "2024-05-15T09:00:00.000Z"},
            {"id": "e1", "mood": "low", "intensity": 2, "note": "",
             "tags": [], "at": "2024-05-14T21:00:00.000Z"}
        ]
    }))
}

async fn spawn_service(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn stand_in() -> (HttpCheckInGateway, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/submit-mood", post(submit_mood))
        .route("/submit-reflection", post(submit_reflection))
        .route("/dashboard-data", get(dashboard_data))
        .route("/recent-entries", get(recent_entries))
        .with_state(received.clone());
    let base_url = spawn_service(app).await;
    let gateway = HttpCheckInGateway::new(HttpGatewayConfig::new(base_url)).unwrap();
    (gateway, received)
}

fn user() -> UserId {
    UserId::new("0b7c6f5e-anon").unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn submit_check_in_posts_wire_body_and_returns_id() {
    let (gateway, received) = stand_in().await;
    let entry = Entry::from_raw(
        user(),
        "low",
        4,
        "tired after work",
        &["exhausted", "stressed"],
        Timestamp::parse_rfc3339("2024-05-15T18:30:00Z").unwrap(),
    )
    .unwrap();

    let id = gateway.submit_check_in(&NewCheckIn::from(&entry)).await.unwrap();

    assert_eq!(id.unwrap().as_str(), "665f1c2e");
    let (kind, body) = received.bodies().remove(0);
    assert_eq!(kind, "mood");
    assert_eq!(body["mood"], "low");
    assert_eq!(body["intensity"], 4);
    assert_eq!(body["note"], "tired after work");
    assert_eq!(body["tags"], json!(["exhausted", "stressed"]));
    assert_eq!(body["userId"], "0b7c6f5e-anon");
    assert!(body["at"].as_str().unwrap().starts_with("2024-05-15T18:30:00"));
}

#[tokio::test]
async fn reflection_without_entry_id_is_rejected() {
    let (gateway, received) = stand_in().await;
    let mut reflection = Reflection {
        entry_id: None,
        mode: ReflectionMode::Vent,
        responses: ReflectionResponses {
            q1: "the commute".into(),
            q2: String::new(),
        },
    };

    let receipt = gateway.submit_reflection(&reflection).await.unwrap();
    assert_eq!(receipt, ReflectionReceipt::Rejected(400));

    reflection.entry_id = Some(EntryId::new("665f1c2e").unwrap());
    let receipt = gateway.submit_reflection(&reflection).await.unwrap();
    assert_eq!(receipt, ReflectionReceipt::Accepted);

    let (_, body) = received.bodies().remove(1);
    assert_eq!(
        body,
        json!({
            "entryId": "665f1c2e",
            "mode": "vent",
            "responses": {"q1": "the commute", "q2": ""}
        })
    );
}

#[tokio::test]
async fn dashboard_is_read_leniently() {
    let (gateway, received) = stand_in().await;

    let payload = gateway.fetch_dashboard(&user()).await.unwrap();

    let query = received.queries.lock().unwrap()[0].clone();
    assert_eq!(query.get("userId").map(String::as_str), Some("0b7c6f5e-anon"));

    let trend = weekly_trend(payload.weekly_trend.as_ref());
    assert_eq!(trend.values(), vec![Some(4.0), None, Some(5.0)]);
    assert_eq!(count_series(payload.mood_frequency.as_ref()).counts(), &[0, 1, 0, 3, 1]);
    // Misaligned tag series is treated as no data.
    assert!(count_series(payload.tag_frequency.as_ref()).is_empty());
    assert_eq!(payload.journal_count, Some(2));
}

#[tokio::test]
async fn recent_entries_are_returned_in_service_order() {
    let (gateway, _received) = stand_in().await;

    let entries = gateway.fetch_recent_entries(&user()).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id.as_deref(), Some("e2"));
    assert_eq!(entries[0].note.as_str(), "0b7c6f5e-anon");
    assert_eq!(entries[1].note_preview(), None);
}

#[tokio::test]
async fn server_error_is_unexpected_status() {
    let app = Router::new().route(
        "/dashboard-data",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
    );
    let base_url = spawn_service(app).await;
    let gateway = HttpCheckInGateway::new(HttpGatewayConfig::new(base_url)).unwrap();

    let err = gateway.fetch_dashboard(&user()).await.unwrap_err();

    match err {
        PersistenceError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "db down");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let app = Router::new().route("/recent-entries", get(|| async { "<html>oops</html>" }));
    let base_url = spawn_service(app).await;
    let gateway = HttpCheckInGateway::new(HttpGatewayConfig::new(base_url)).unwrap();

    let err = gateway.fetch_recent_entries(&user()).await.unwrap_err();

    assert!(matches!(err, PersistenceError::MalformedBody(_)));
}

#[tokio::test]
async fn slow_service_times_out() {
    let app = Router::new().route(
        "/dashboard-data",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let base_url = spawn_service(app).await;
    let gateway = HttpCheckInGateway::new(
        HttpGatewayConfig::new(base_url).with_timeout(Duration::from_secs(1)),
    )
    .unwrap();

    let err = gateway.fetch_dashboard(&user()).await.unwrap_err();

    assert!(matches!(err, PersistenceError::Timeout(1)));
}

#[tokio::test]
async fn submit_mood_without_body_still_succeeds() {
    let app = Router::new().route("/submit-mood", post(|| async { StatusCode::NO_CONTENT }));
    let base_url = spawn_service(app).await;
    let gateway = HttpCheckInGateway::new(HttpGatewayConfig::new(base_url)).unwrap();
    let entry = Entry::from_raw(user(), "good", 3, "", &[], Timestamp::now()).unwrap();

    let id = gateway.submit_check_in(&NewCheckIn::from(&entry)).await.unwrap();

    assert!(id.is_none());
}
