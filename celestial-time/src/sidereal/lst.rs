use super::GMST;
use crate::JulianDate;
use celestial_core::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local mean sidereal time: GMST plus east longitude, wrapped into [0, 2π).
///
/// This is also the right ascension currently crossing the observer's meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LST {
    angle: Angle,
    longitude: Angle,
}

impl LST {
    pub fn from_gmst(gmst: GMST, longitude: Angle) -> Self {
        Self {
            angle: (gmst.angle() + longitude).wrapped(),
            longitude,
        }
    }

    pub fn from_julian_date(jd: &JulianDate, longitude: Angle) -> Self {
        Self::from_gmst(GMST::from_julian_date(jd), longitude)
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn radians(&self) -> f64 {
        self.angle.radians()
    }

    pub fn degrees(&self) -> f64 {
        self.angle.degrees()
    }

    pub fn hours(&self) -> f64 {
        self.angle.hours()
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    /// `H = LST − α`, wrapped into [-π, π). Positive west of the meridian.
    pub fn hour_angle(&self, right_ascension: Angle) -> Angle {
        (self.angle - right_ascension).wrapped_signed()
    }
}

impl std::fmt::Display for LST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LST {:.6}h", self.hours())
    }
}
