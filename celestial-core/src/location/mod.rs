//! Observer location on Earth in WGS84 geodetic coordinates.
//!
//! - **Latitude**: north positive, radians, [-π/2, π/2]
//! - **Longitude**: east positive, radians, [-π, π]
//! - **Height**: meters above the WGS84 ellipsoid
//!
//! ```
//! use celestial_core::Location;
//!
//! let kent = Location::from_degrees(47.38, -122.24, 0.0)?;
//! assert!((kent.latitude_degrees() - 47.38).abs() < 1e-12);
//! assert!(Location::from_degrees(91.0, 0.0, 0.0).is_err());
//! # Ok::<(), celestial_core::AstroError>(())
//! ```

mod geodesy;

use crate::constants::{HALF_PI, PI, RAD_TO_DEG};
use crate::errors::{AstroError, AstroResult, MathErrorKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Geodetic latitude in radians. North is positive.
    pub latitude: f64,
    /// Geodetic longitude in radians. East is positive.
    pub longitude: f64,
    /// Height above WGS84 ellipsoid in meters.
    pub height: f64,
}

impl Location {
    /// Creates a location from radians and meters.
    ///
    /// # Errors
    ///
    /// Any non-finite value, a latitude beyond ±π/2, a longitude beyond ±π, or a
    /// height outside [-12 km, 100 km].
    pub fn new(latitude: f64, longitude: f64, height: f64) -> AstroResult<Self> {
        for (value, what) in [
            (latitude, "Latitude"),
            (longitude, "Longitude"),
            (height, "Height"),
        ] {
            if !value.is_finite() {
                return Err(AstroError::math_error(
                    "location_validation",
                    MathErrorKind::NotFinite,
                    &format!("{what} must be finite"),
                ));
            }
        }

        if latitude.abs() > HALF_PI {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Latitude outside valid range [-π/2, π/2]",
            ));
        }
        if longitude.abs() > PI {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Longitude outside valid range [-π, π]",
            ));
        }
        if !(-12000.0..=100000.0).contains(&height) {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                "Height outside valid range [-12000, 100000] m",
            ));
        }

        Ok(Self {
            latitude,
            longitude,
            height,
        })
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64, height_m: f64) -> AstroResult<Self> {
        Self::new(lat_deg.to_radians(), lon_deg.to_radians(), height_m)
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude * RAD_TO_DEG
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude * RAD_TO_DEG
    }

    pub fn latitude_angle(&self) -> crate::Angle {
        crate::Angle::from_radians(self.latitude)
    }

    pub fn longitude_angle(&self) -> crate::Angle {
        crate::Angle::from_radians(self.longitude)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.5}°, {:.5}°, {:.1} m",
            self.latitude_degrees(),
            self.longitude_degrees(),
            self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_round_trip() {
        let loc = Location::from_degrees(-33.87, 151.21, 58.0).unwrap();
        assert!((loc.latitude_degrees() + 33.87).abs() < 1e-12);
        assert!((loc.longitude_degrees() - 151.21).abs() < 1e-12);
        assert_eq!(loc.height, 58.0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Location::from_degrees(90.5, 0.0, 0.0).is_err());
        assert!(Location::from_degrees(0.0, 181.0, 0.0).is_err());
        assert!(Location::from_degrees(0.0, 0.0, 200_000.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = Location::new(f64::NAN, 0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("Latitude must be finite"));
        assert!(Location::new(0.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_poles_are_valid() {
        assert!(Location::from_degrees(90.0, 0.0, 0.0).is_ok());
        assert!(Location::from_degrees(-90.0, 180.0, 0.0).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let loc = Location::from_degrees(47.38, -122.24, 120.0).unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);
    }
}
