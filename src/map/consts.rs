pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Sampled points are kept this far inside the sampling disk.
pub const SAMPLING_SHRINK_FACTOR: f64 = 0.95;
