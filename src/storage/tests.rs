use crate::game::errors::GameError;
use crate::game::models::{GameSession, Progress};
use crate::map::tests::fake_divisions;
use crate::storage::consts::SESSION_ID_LENGTH;
use crate::storage::interface::{SessionGameFlowHandler, SessionInfoSerializer, SessionRepo};
use crate::storage::sessions::HashMapSessionsStorage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;

async fn storage_with_session(total_rounds: u64) -> (HashMapSessionsStorage, String) {
    let storage = HashMapSessionsStorage::default();
    let mut rng = StdRng::seed_from_u64(99);
    let session = GameSession::start(Arc::new(fake_divisions()), 30.0, total_rounds, &mut rng)
        .expect("Failed to start a session.");
    let session_id = storage.create(session).await;
    (storage, session_id)
}

#[tokio::test]
async fn test_create_generates_distinct_ids() {
    let (storage, first_id) = storage_with_session(5).await;
    let mut rng = StdRng::seed_from_u64(100);
    let session = GameSession::start(Arc::new(fake_divisions()), 30.0, 5, &mut rng)
        .expect("Failed to start a session.");
    let second_id = storage.create(session).await;

    assert_eq!(first_id.len(), SESSION_ID_LENGTH);
    assert!(first_id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first_id, second_id);
    assert!(storage.exists(&first_id).await);
    assert!(storage.exists(&second_id).await);
    assert!(!storage.exists("missing").await);
}

#[tokio::test]
async fn test_missing_session_is_reported() {
    let storage = HashMapSessionsStorage::default();
    let missing = || GameError::SessionNotFound(String::from("missing"));

    assert_eq!(storage.view("missing").await.err(), Some(missing()));
    assert_eq!(storage.reveal("missing").await.err(), Some(missing()));
    assert_eq!(storage.next_round("missing").await.err(), Some(missing()));
    assert_eq!(
        storage.select_division("missing", "Goa").await.err(),
        Some(missing())
    );
    assert_eq!(
        storage.submit_guess("missing", "Goa").await.err(),
        Some(missing())
    );
}

#[tokio::test]
async fn test_next_round_starts_rounds_until_finished() {
    let (storage, session_id) = storage_with_session(2).await;

    storage
        .submit_guess(&session_id, "Assam")
        .await
        .expect("Guess should be accepted.");
    let progress = storage
        .next_round(&session_id)
        .await
        .expect("Round was revealed.");
    assert_eq!(progress, Progress::NextRound);
    let view = storage.view(&session_id).await.expect("Session exists.");
    assert_eq!(view.state, "roundActive");
    assert_eq!(view.current_round_index, 2);

    storage
        .reveal(&session_id)
        .await
        .expect("Reveal should be accepted.");
    let progress = storage
        .next_round(&session_id)
        .await
        .expect("Round was revealed.");
    assert_eq!(progress, Progress::Finished);
    let view = storage.view(&session_id).await.expect("Session exists.");
    assert_eq!(view.state, "finished");
    assert!(view.round.is_none());
}

#[tokio::test]
async fn test_view_shows_truth_only_after_reveal() {
    let (storage, session_id) = storage_with_session(1).await;

    let view = storage.view(&session_id).await.expect("Session exists.");
    let round = view.round.expect("A round is active.");
    assert!(round.truth.is_none());

    let outcome = storage
        .reveal(&session_id)
        .await
        .expect("Reveal should be accepted.");
    let view = storage.view(&session_id).await.expect("Session exists.");
    assert!(view.round.expect("The round is revealed.").truth.is_some());
    assert_eq!(view.outcome, Some(outcome));
}

#[tokio::test]
async fn test_finished_sessions_are_dropped_after_ttl() {
    let storage = HashMapSessionsStorage::with_finished_session_ttl(Duration::from_millis(20));
    let mut rng = StdRng::seed_from_u64(5);
    let finished = GameSession::start(Arc::new(fake_divisions()), 30.0, 1, &mut rng)
        .expect("Failed to start a session.");
    let ongoing = GameSession::start(Arc::new(fake_divisions()), 30.0, 1, &mut rng)
        .expect("Failed to start a session.");
    let finished_id = storage.create(finished).await;
    let ongoing_id = storage.create(ongoing).await;

    storage
        .reveal(&finished_id)
        .await
        .expect("Reveal should be accepted.");
    let progress = storage
        .next_round(&finished_id)
        .await
        .expect("Round was revealed.");
    assert_eq!(progress, Progress::Finished);
    assert!(storage.exists(&finished_id).await);

    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(!storage.exists(&finished_id).await);
    assert!(storage.exists(&ongoing_id).await);
}
