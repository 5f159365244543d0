use crate::map::consts::EARTH_RADIUS_KM;
use crate::map::models::LatLng;

/// Point reached by travelling `distance_km` from `origin` along the initial
/// compass `bearing_deg` (0 is north, clockwise) on a spherical earth.
pub fn destination_point(origin: LatLng, bearing_deg: f64, distance_km: f64) -> LatLng {
    let delta = distance_km / EARTH_RADIUS_KM;
    let theta = bearing_deg.to_radians();
    let phi_1 = origin.lat.to_radians();
    let lambda_1 = origin.lng.to_radians();

    let sin_phi_2 = phi_1.sin() * delta.cos() + phi_1.cos() * delta.sin() * theta.cos();
    let phi_2 = sin_phi_2.clamp(-1.0, 1.0).asin();
    let lambda_2 = lambda_1
        + (theta.sin() * delta.sin() * phi_1.cos()).atan2(delta.cos() - phi_1.sin() * sin_phi_2);

    LatLng::new(phi_2.to_degrees(), normalize_lng(lambda_2.to_degrees()))
}

/// Great-circle distance in kilometers.
pub fn haversine_distance_km(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat.to_radians();
    let phi_2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Wraps a longitude into `(-180, 180]`.
fn normalize_lng(lng: f64) -> f64 {
    let wrapped = (lng + 540.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}
