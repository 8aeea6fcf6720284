//! Geodetic to geocentric conversion on the WGS84 ellipsoid.
//!
//! The geomagnetic field model is expanded about Earth's center, so it needs
//! the observer's geocentric radius and latitude rather than the geodetic
//! values a GPS fix provides. At mid-latitudes the two latitudes differ by
//! about 11 arcminutes.

use crate::constants::{WGS84_ECCENTRICITY_SQUARED, WGS84_SEMI_MAJOR_AXIS_KM};

use super::Location;

impl Location {
    /// Geocentric cylindrical coordinates `(u, v)` in kilometers.
    ///
    /// `u` is the distance from the rotation axis, `v` the distance from the
    /// equatorial plane (positive north). The prime-vertical denominator is
    /// at least `1 - e²`, so this is total.
    pub fn to_geocentric_km(&self) -> (f64, f64) {
        let height_km = self.height / 1000.0;
        let (sin_lat, cos_lat) = libm::sincos(self.latitude);

        let n = WGS84_SEMI_MAJOR_AXIS_KM
            / libm::sqrt(1.0 - WGS84_ECCENTRICITY_SQUARED * sin_lat * sin_lat);

        let u = (n + height_km) * cos_lat;
        let v = (n * (1.0 - WGS84_ECCENTRICITY_SQUARED) + height_km) * sin_lat;
        (u, v)
    }

    /// Geocentric radius (km) and geocentric latitude (radians).
    pub fn to_geocentric_spherical_km(&self) -> (f64, f64) {
        let (u, v) = self.to_geocentric_km();
        let radius = libm::hypot(u, v);
        (radius, libm::atan2(v, u))
    }
}
