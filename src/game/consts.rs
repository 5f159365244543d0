pub const MAX_SCORE: u64 = 5000;
pub const POINTS_LOST_PER_KM: f64 = 8.0;
