use crate::game::errors::GameError;
use crate::game::scoring;
use crate::map::consts::SAMPLING_SHRINK_FACTOR;
use crate::map::divisions::Divisions;
use crate::map::models::{Division, LatLng};
use crate::map::sampler;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

#[derive(Copy, Clone, Debug)]
pub struct GameSettings {
    pub rounds_per_game: u64,
    pub sampling_radius_km: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Starts at 1.
    pub index: u64,
    pub truth: Division,
    pub sampled_point: LatLng,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    pub guessed_division_name: String,
    pub is_exact_match: bool,
    pub distance_km: f64,
    pub points_awarded: u64,
}

#[derive(Clone, Debug)]
pub enum SessionStatus {
    NotStarted,
    RoundActive {
        round: Round,
        /// Division picked by the player but not submitted yet.
        selection: Option<String>,
    },
    RoundRevealed {
        round: Round,
        outcome: GuessOutcome,
    },
    Finished,
}

impl SessionStatus {
    pub fn name(&self) -> &'static str {
        match self {
            SessionStatus::NotStarted => "notStarted",
            SessionStatus::RoundActive { .. } => "roundActive",
            SessionStatus::RoundRevealed { .. } => "roundRevealed",
            SessionStatus::Finished => "finished",
        }
    }
}

/// What follows a revealed round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Progress {
    NextRound,
    Finished,
}

/// A single player's game. All transitions go through its methods.
#[derive(Clone, Debug)]
pub struct GameSession {
    divisions: Arc<Divisions>,
    sampling_radius_km: f64,
    total_rounds: u64,
    current_round_index: u64,
    cumulative_score: u64,
    status: SessionStatus,
}

impl GameSession {
    pub fn new(
        divisions: Arc<Divisions>,
        sampling_radius_km: f64,
        total_rounds: u64,
    ) -> Result<Self, GameError> {
        if total_rounds == 0 {
            return Err(GameError::InvalidRoundCount);
        }
        Ok(Self {
            divisions,
            sampling_radius_km,
            total_rounds,
            current_round_index: 0,
            cumulative_score: 0,
            status: SessionStatus::NotStarted,
        })
    }

    /// Creates a session and moves it straight into its first round.
    pub fn start<R>(
        divisions: Arc<Divisions>,
        sampling_radius_km: f64,
        total_rounds: u64,
        rng: &mut R,
    ) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
    {
        let mut session = Self::new(divisions, sampling_radius_km, total_rounds)?;
        session.start_round(rng)?;
        Ok(session)
    }

    pub fn start_round<R>(&mut self, rng: &mut R) -> Result<Round, GameError>
    where
        R: Rng + ?Sized,
    {
        let can_start = match self.status {
            SessionStatus::NotStarted => true,
            SessionStatus::RoundRevealed { .. } => self.current_round_index < self.total_rounds,
            _ => false,
        };
        if !can_start {
            return Err(self.sequence_violation("start a round"));
        }
        self.current_round_index += 1;
        // Repeats across rounds are allowed.
        let truth = self.divisions.random(rng).clone();
        let sampled_point = sampler::uniform_point_in_disk(
            rng,
            truth.centroid,
            self.sampling_radius_km,
            SAMPLING_SHRINK_FACTOR,
        );
        let round = Round {
            index: self.current_round_index,
            truth,
            sampled_point,
        };
        self.status = SessionStatus::RoundActive {
            round: round.clone(),
            selection: None,
        };
        Ok(round)
    }

    pub fn select_division(&mut self, name: &str) -> Result<(), GameError> {
        if !matches!(self.status, SessionStatus::RoundActive { .. }) {
            return Err(self.sequence_violation("select a division"));
        }
        if self.divisions.find(name).is_none() {
            return Err(GameError::InvalidDivisionName(name.to_string()));
        }
        if let SessionStatus::RoundActive { selection, .. } = &mut self.status {
            *selection = Some(name.to_string());
        }
        Ok(())
    }

    pub fn evaluate_guess(&mut self, name: &str) -> Result<GuessOutcome, GameError> {
        let round = match &self.status {
            SessionStatus::RoundActive { round, .. } => round.clone(),
            _ => return Err(self.sequence_violation("evaluate a guess")),
        };
        let guessed = self
            .divisions
            .find(name)
            .ok_or_else(|| GameError::InvalidDivisionName(name.to_string()))?;
        let outcome = scoring::evaluate(&round, guessed);
        self.cumulative_score += outcome.points_awarded;
        self.status = SessionStatus::RoundRevealed {
            round,
            outcome: outcome.clone(),
        };
        Ok(outcome)
    }

    /// Evaluates the current selection, falling back to the first division.
    /// A revealed round keeps its outcome and is not scored twice.
    pub fn reveal(&mut self) -> Result<GuessOutcome, GameError> {
        let name = match &self.status {
            SessionStatus::RoundActive { selection, .. } => selection
                .clone()
                .unwrap_or_else(|| self.divisions.first().name.clone()),
            SessionStatus::RoundRevealed { outcome, .. } => return Ok(outcome.clone()),
            _ => return Err(self.sequence_violation("reveal the round")),
        };
        self.evaluate_guess(&name)
    }

    pub fn advance_or_finish(&mut self) -> Result<Progress, GameError> {
        if !matches!(self.status, SessionStatus::RoundRevealed { .. }) {
            return Err(self.sequence_violation("advance"));
        }
        if self.current_round_index >= self.total_rounds {
            self.status = SessionStatus::Finished;
            return Ok(Progress::Finished);
        }
        Ok(Progress::NextRound)
    }

    pub fn total_rounds(&self) -> u64 {
        self.total_rounds
    }

    pub fn current_round_index(&self) -> u64 {
        self.current_round_index
    }

    pub fn cumulative_score(&self) -> u64 {
        self.cumulative_score
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, SessionStatus::Finished)
    }

    fn sequence_violation(&self, attempted: &'static str) -> GameError {
        GameError::SequenceViolation {
            attempted,
            state: self.status.name(),
        }
    }
}
