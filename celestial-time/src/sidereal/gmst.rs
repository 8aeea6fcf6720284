use crate::JulianDate;
use celestial_core::angle::wrap_0_2pi;
use celestial_core::constants::DEG_TO_RAD;
use celestial_core::math::fmod;
use celestial_core::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Greenwich mean sidereal time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GMST(Angle);

impl GMST {
    /// Meeus, *Astronomical Algorithms* eq. 12.4:
    ///
    /// `θ₀ = 280.46061837 + 360.98564736629·D + 0.000387933·T² − T³/38710000` degrees,
    /// with `D` days and `T` Julian centuries since J2000.0.
    pub fn from_julian_date(jd: &JulianDate) -> Self {
        let d = jd.days_since_j2000();
        let t = jd.centuries_since_j2000();

        let degrees =
            280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38_710_000.0;

        Self(Angle::from_radians(wrap_0_2pi(
            fmod(degrees, 360.0) * DEG_TO_RAD,
        )))
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(Angle::from_degrees(degrees).wrapped())
    }

    pub fn from_hours(hours: f64) -> Self {
        Self(Angle::from_hours(hours).wrapped())
    }

    pub fn angle(&self) -> Angle {
        self.0
    }

    pub fn radians(&self) -> f64 {
        self.0.radians()
    }

    pub fn degrees(&self) -> f64 {
        self.0.degrees()
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    /// Local mean sidereal time at east longitude `longitude`.
    pub fn to_lst(&self, longitude: Angle) -> super::LST {
        super::LST::from_gmst(*self, longitude)
    }
}

impl std::fmt::Display for GMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {:.6}h", self.hours())
    }
}
