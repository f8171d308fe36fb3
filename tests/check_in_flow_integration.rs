//! Integration tests for the full check-in flow.
//!
//! Walks a user through check-in, reflection and dashboard against the
//! in-memory persistence service:
//! 1. The reflection step opens before the service answers
//! 2. The reflection carries the entry id assigned by the service
//! 3. The dashboard reflects what was stored

use chrono::NaiveDate;
use std::sync::Arc;

use echo_checkin::adapters::{InMemoryCheckInGateway, StaticIdentityProvider};
use echo_checkin::application::{
    GetDashboardHandler, GetDashboardQuery, GetReflectionMessagesHandler, PersistOutcome,
    SaveReflectionHandler, SaveReflectionOutcome, SubmitCheckInCommand, SubmitCheckInHandler,
};
use echo_checkin::domain::checkin::{EntryDraft, Mood, Tag};
use echo_checkin::domain::dashboard::InsightKind;
use echo_checkin::domain::foundation::{Timestamp, UserId};
use echo_checkin::domain::reflection::messages::{HEAVY, THANK_YOU, UNSURE};
use echo_checkin::domain::reflection::ReflectionMode;
use echo_checkin::domain::session::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct App {
    store: SessionStore,
    gateway: Arc<InMemoryCheckInGateway>,
    submit: SubmitCheckInHandler,
    messages: GetReflectionMessagesHandler,
    reflect: SaveReflectionHandler,
    dashboard: GetDashboardHandler,
}

fn app() -> App {
    let store = SessionStore::new();
    let identity = Arc::new(StaticIdentityProvider::new(UserId::new("anon-flow").unwrap()));
    let gateway = Arc::new(InMemoryCheckInGateway::new());
    App {
        submit: SubmitCheckInHandler::new(store.clone(), identity.clone(), gateway.clone()),
        messages: GetReflectionMessagesHandler::new(store.clone()),
        reflect: SaveReflectionHandler::new(store.clone(), gateway.clone()),
        dashboard: GetDashboardHandler::new(identity, gateway.clone()),
        store,
        gateway,
    }
}

fn draft(mood: Mood, intensity: i64, note: &str, tags: &[Tag]) -> EntryDraft {
    let mut draft = EntryDraft::new();
    draft.select_mood(mood).set_intensity(intensity).set_note(note);
    for tag in tags {
        draft.toggle_tag(*tag);
    }
    draft
}

fn today() -> GetDashboardQuery {
    GetDashboardQuery {
        today: Timestamp::now().date(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn check_in_then_reflect_then_dashboard() {
    let app = app();
    assert_eq!(app.messages.handle(), vec![THANK_YOU, UNSURE]);

    // Check-in
    let submitted = app
        .submit
        .handle(SubmitCheckInCommand {
            draft: draft(Mood::Awful, 5, "everything at once", &[Tag::Overwhelmed]),
        })
        .await
        .unwrap();
    assert_eq!(app.messages.handle(), vec![THANK_YOU, HEAVY]);

    let entry_id = match submitted.persistence.await.unwrap() {
        PersistOutcome::Assigned(id) => id,
        other => panic!("expected an assigned id, got {other:?}"),
    };
    assert_eq!(app.store.snapshot().entry_id(), Some(&entry_id));

    // Reflection
    let mut reflection = app.reflect.open_draft();
    reflection.choose_mode(ReflectionMode::Grounding).unwrap();
    reflection.answer(0, "the rain").unwrap();
    reflection.answer(1, "my desk").unwrap();
    assert_eq!(
        app.reflect.handle(&mut reflection).await.unwrap(),
        SaveReflectionOutcome::Saved
    );

    let stored = app.gateway.reflections().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].entry_id.as_ref(), Some(&entry_id));
    assert_eq!(stored[0].responses.q2, "my desk");

    // Dashboard
    let overview = app.dashboard.handle(today()).await.unwrap();
    assert!(overview.has_check_ins);
    assert_eq!(overview.most_frequent_mood.as_deref(), Some("Awful"));
    assert_eq!(overview.most_frequent_tag.as_deref(), Some("overwhelmed"));
    assert_eq!(overview.insight.kind, InsightKind::Mood);
    assert!(overview.insight.text.contains("difficult moments"));
    assert_eq!(overview.journal_count, 1);
    assert!(!overview.weekly_trend.is_empty());
}

#[tokio::test]
async fn offline_check_in_still_allows_reflection_attempt() {
    let app = app();
    app.gateway.set_offline(true);

    let submitted = app
        .submit
        .handle(SubmitCheckInCommand {
            draft: draft(Mood::Good, 2, "", &[]),
        })
        .await
        .unwrap();
    assert_eq!(submitted.persistence.await.unwrap(), PersistOutcome::Failed);
    assert!(app.store.snapshot().entry_id().is_none());

    let mut reflection = app.reflect.open_draft();
    reflection.choose_mode(ReflectionMode::Encouragement).unwrap();
    assert_eq!(
        app.reflect.handle(&mut reflection).await.unwrap(),
        SaveReflectionOutcome::Failed
    );

    // Back online, the service refuses a reflection with no entry.
    app.gateway.set_offline(false);
    assert_eq!(
        app.reflect.handle(&mut reflection).await.unwrap(),
        SaveReflectionOutcome::Rejected(400)
    );
    assert!(!reflection.is_saved());
}

#[tokio::test]
async fn dashboard_filters_recent_entries_by_tag() {
    let app = app();
    for (mood, tags) in [
        (Mood::Low, vec![Tag::Anxious, Tag::Lonely]),
        (Mood::Good, vec![Tag::Grateful]),
        (Mood::Neutral, vec![Tag::Anxious]),
    ] {
        let submitted = app
            .submit
            .handle(SubmitCheckInCommand {
                draft: draft(mood, 3, "", &tags),
            })
            .await
            .unwrap();
        submitted.persistence.await.unwrap();
    }

    let overview = app.dashboard.handle(today()).await.unwrap();

    assert_eq!(overview.recent_entries.len(), 3);
    assert_eq!(overview.recent_entries.filter_by_tag(Some("anxious")).len(), 2);
    assert_eq!(overview.recent_entries.filter_by_tag(Some("proud")).len(), 0);
    assert_eq!(overview.recent_entries.filter_by_tag(None).len(), 3);
    assert_eq!(overview.journal_count, 0);
}

#[tokio::test]
async fn empty_history_shows_empty_state() {
    let app = app();
    let query = GetDashboardQuery {
        today: NaiveDate::from_ymd_opt(2024, 2, 16).unwrap(),
    };

    let overview = app.dashboard.handle(query).await.unwrap();

    assert!(!overview.has_check_ins);
    assert_eq!(overview.insight.kind, InsightKind::StartTracking);
    assert_eq!(overview.mood_frequency.total(), 0);
    assert_eq!(overview.quote, echo_checkin::domain::dashboard::quote::QUOTES[0]);
}
