use crate::game::errors::GameErrorCode;
use crate::game::models::{GameSession, GuessOutcome, Progress, SessionStatus};
use crate::map::models::{Division, LatLng};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionsResponse {
    pub error: bool,
    pub divisions: Vec<String>,
}

/// Client-facing state of a session. The truth of a round is only included
/// once the round is revealed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub state: &'static str,
    pub total_rounds: u64,
    pub current_round_index: u64,
    pub cumulative_score: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GuessOutcome>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub index: u64,
    pub sampled_point: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truth: Option<Division>,
}

impl SessionView {
    pub fn new(session_id: &str, session: &GameSession) -> Self {
        let (round, selection, outcome) = match session.status() {
            SessionStatus::RoundActive { round, selection } => (
                Some(RoundView {
                    index: round.index,
                    sampled_point: round.sampled_point,
                    truth: None,
                }),
                selection.clone(),
                None,
            ),
            SessionStatus::RoundRevealed { round, outcome } => (
                Some(RoundView {
                    index: round.index,
                    sampled_point: round.sampled_point,
                    truth: Some(round.truth.clone()),
                }),
                None,
                Some(outcome.clone()),
            ),
            SessionStatus::NotStarted | SessionStatus::Finished => (None, None, None),
        };
        Self {
            session_id: session_id.to_string(),
            state: session.status().name(),
            total_rounds: session.total_rounds(),
            current_round_index: session.current_round_index(),
            cumulative_score: session.cumulative_score(),
            round,
            selection,
            outcome,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDivisionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GuessOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
}
