use crate::game::errors::GameError;
use crate::game::models::{GameSession, GuessOutcome, Progress};
use crate::game::services::responses::SessionView;

pub trait ISessionStorage:
    SessionRepo + SessionGameFlowHandler + SessionInfoSerializer + Clone + Send + Sync + 'static
{
}

pub trait SessionRepo {
    async fn exists(&self, session_id: &str) -> bool;

    async fn create(&self, session: GameSession) -> String;
}

pub trait SessionGameFlowHandler {
    async fn select_division(&self, session_id: &str, division: &str) -> Result<(), GameError>;

    async fn submit_guess(&self, session_id: &str, division: &str)
        -> Result<GuessOutcome, GameError>;

    async fn reveal(&self, session_id: &str) -> Result<GuessOutcome, GameError>;

    /// Finishes the session after its last round, otherwise starts the next one.
    async fn next_round(&self, session_id: &str) -> Result<Progress, GameError>;
}

pub trait SessionInfoSerializer {
    async fn view(&self, session_id: &str) -> Result<SessionView, GameError>;
}
