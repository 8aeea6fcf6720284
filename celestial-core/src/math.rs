use crate::constants::HALF_PI;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// `asin` with the argument clamped to [-1, 1].
///
/// Rounding can push a unit-vector component a hair past ±1; this returns
/// ±π/2 instead of NaN in that case. NaN input still yields NaN.
#[inline]
pub fn asin_clamped(x: f64) -> f64 {
    if x >= 1.0 {
        HALF_PI
    } else if x <= -1.0 {
        -HALF_PI
    } else {
        libm::asin(x)
    }
}

/// Great-circle distance between two points on the unit sphere (haversine form).
///
/// Longitudes/latitudes are in radians, result in radians within [0, π].
/// The haversine term is held at 1 so antipodal points do not produce NaN.
pub fn haversine_separation(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let half_dlat = 0.5 * (lat2 - lat1);
    let half_dlon = 0.5 * (lon2 - lon1);
    let a = libm::sin(half_dlat).powi(2)
        + libm::cos(lat1) * libm::cos(lat2) * libm::sin(half_dlon).powi(2);
    2.0 * libm::asin(libm::sqrt(a.min(1.0)))
}
