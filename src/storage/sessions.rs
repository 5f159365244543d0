use crate::game::errors::GameError;
use crate::game::models::{GameSession, GuessOutcome, Progress, SessionStatus};
use crate::game::services::responses::SessionView;
use crate::storage::consts::{FINISHED_SESSION_TTL, SESSION_ID_LENGTH};
use crate::storage::interface::{
    ISessionStorage, SessionGameFlowHandler, SessionInfoSerializer, SessionRepo,
};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, GameSession>>>,
    finished_session_ttl: Duration,
}

impl Default for HashMapSessionsStorage {
    fn default() -> Self {
        Self::with_finished_session_ttl(FINISHED_SESSION_TTL)
    }
}

impl HashMapSessionsStorage {
    pub fn with_finished_session_ttl(finished_session_ttl: Duration) -> Self {
        Self {
            storage: Arc::default(),
            finished_session_ttl,
        }
    }

    fn schedule_removal(&self, session_id: &str) {
        let storage_handle = self.storage.clone();
        let session_id = session_id.to_string();
        let ttl = self.finished_session_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut storage_guard = storage_handle.write().await;
            if storage_guard
                .get(&session_id)
                .is_some_and(GameSession::is_finished)
            {
                storage_guard.remove(&session_id);
                tracing::info!(task = "session_removed", session_id = %session_id);
            }
        });
    }
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn exists(&self, session_id: &str) -> bool {
        self.storage.read().await.contains_key(session_id)
    }

    async fn create(&self, session: GameSession) -> String {
        let mut storage_guard = self.storage.write().await;
        let mut session_id = generate_session_id();
        while storage_guard.contains_key(&session_id) {
            session_id = generate_session_id();
        }
        tracing::info!(
            task = "session_started",
            session_id = %session_id,
            total_rounds = session.total_rounds(),
        );
        storage_guard.insert(session_id.clone(), session);
        session_id
    }
}

impl SessionGameFlowHandler for HashMapSessionsStorage {
    async fn select_division(&self, session_id: &str, division: &str) -> Result<(), GameError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .ok_or_else(|| GameError::SessionNotFound(session_id.to_string()))?
            .select_division(division)
    }

    async fn submit_guess(
        &self,
        session_id: &str,
        division: &str,
    ) -> Result<GuessOutcome, GameError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(session_id)
            .ok_or_else(|| GameError::SessionNotFound(session_id.to_string()))?;
        let outcome = session.evaluate_guess(division)?;
        log_outcome(session_id, session, &outcome);
        Ok(outcome)
    }

    async fn reveal(&self, session_id: &str) -> Result<GuessOutcome, GameError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(session_id)
            .ok_or_else(|| GameError::SessionNotFound(session_id.to_string()))?;
        let was_active = matches!(session.status(), SessionStatus::RoundActive { .. });
        let outcome = session.reveal()?;
        if was_active {
            log_outcome(session_id, session, &outcome);
        }
        Ok(outcome)
    }

    async fn next_round(&self, session_id: &str) -> Result<Progress, GameError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(session_id)
            .ok_or_else(|| GameError::SessionNotFound(session_id.to_string()))?;
        let progress = session.advance_or_finish()?;
        match progress {
            Progress::NextRound => {
                let round = session.start_round(&mut rand::thread_rng())?;
                tracing::info!(
                    task = "round_started",
                    session_id = %session_id,
                    round_index = round.index,
                    total_rounds = session.total_rounds(),
                );
            }
            Progress::Finished => {
                tracing::info!(
                    task = "session_finished",
                    session_id = %session_id,
                    cumulative_score = session.cumulative_score(),
                );
                self.schedule_removal(session_id);
            }
        }
        Ok(progress)
    }
}

impl SessionInfoSerializer for HashMapSessionsStorage {
    async fn view(&self, session_id: &str) -> Result<SessionView, GameError> {
        self.storage
            .read()
            .await
            .get(session_id)
            .map(|session| SessionView::new(session_id, session))
            .ok_or_else(|| GameError::SessionNotFound(session_id.to_string()))
    }
}

fn log_outcome(session_id: &str, session: &GameSession, outcome: &GuessOutcome) {
    tracing::info!(
        task = "guess_evaluated",
        session_id = %session_id,
        round_index = session.current_round_index(),
        guessed_division = %outcome.guessed_division_name,
        is_exact_match = outcome.is_exact_match,
        distance_km = outcome.distance_km,
        points_awarded = outcome.points_awarded,
        cumulative_score = session.cumulative_score(),
    );
}

fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LENGTH)
        .map(char::from)
        .collect()
}
