use crate::map::geodesy::destination_point;
use crate::map::models::LatLng;
use rand::Rng;

/// Draws a point uniformly (by area) from the disk of radius
/// `radius_km * shrink_factor` around `center`.
pub fn uniform_point_in_disk<R>(
    rng: &mut R,
    center: LatLng,
    radius_km: f64,
    shrink_factor: f64,
) -> LatLng
where
    R: Rng + ?Sized,
{
    let u: f64 = rng.gen();
    // sqrt keeps the radial density proportional to the ring area.
    let distance_km = u.sqrt() * radius_km * shrink_factor;
    let bearing_deg = rng.gen_range(0.0..360.0);
    destination_point(center, bearing_deg, distance_km)
}
