use crate::game::consts::{MAX_SCORE, POINTS_LOST_PER_KM};
use crate::game::models::{GuessOutcome, Round};
use crate::map::geodesy::haversine_distance_km;
use crate::map::models::Division;

pub fn points_for(is_exact_match: bool, distance_km: f64) -> u64 {
    if is_exact_match {
        return MAX_SCORE;
    }
    (MAX_SCORE as f64 - distance_km * POINTS_LOST_PER_KM)
        .round()
        .max(0.0) as u64
}

/// Distance is measured from the sampled point to the guessed division's
/// centroid, so an exact match usually shows a nonzero distance.
pub fn evaluate(round: &Round, guessed: &Division) -> GuessOutcome {
    let is_exact_match = guessed.name == round.truth.name;
    let distance_km = haversine_distance_km(round.sampled_point, guessed.centroid);
    GuessOutcome {
        guessed_division_name: guessed.name.clone(),
        is_exact_match,
        distance_km,
        points_awarded: points_for(is_exact_match, distance_km),
    }
}
