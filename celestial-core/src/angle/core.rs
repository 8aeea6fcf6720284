//! Core angle type.
//!
//! [`Angle`] stores radians and converts to degrees and hours on demand. Every
//! pipeline stage hands angles across its boundary as `Angle`, never as bare
//! `f64`, so a degree value cannot be fed where radians are expected.
//!
//! ```
//! use celestial_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-12);
//!
//! let (sin, cos) = Angle::from_degrees(30.0).sin_cos();
//! assert!((sin - 0.5).abs() < 1e-15);
//! assert!(cos > 0.86);
//! ```

use core::fmt;
use core::ops::{Add, Neg, Sub};

use super::normalize::{clamp_dec, wrap_0_2pi, wrap_pm_pi};
use crate::constants::{ARCSEC_TO_RAD, DEG_TO_RAD, HALF_PI, PI, RAD_TO_DEG};

/// An angular measurement stored as radians.
///
/// `Eq` and `Ord` are not implemented because the value can be NaN, which is
/// how an undefined pointing direction travels through the pipeline.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    pub const PI: Self = Self { rad: PI };

    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// The undefined angle. Produced for degenerate pointing vectors.
    pub const NAN: Self = Self { rad: f64::NAN };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// One hour is 15 degrees.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_degrees(hours * 15.0)
    }

    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: arcsec * ARCSEC_TO_RAD,
        }
    }

    #[inline]
    pub const fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.rad / ARCSEC_TO_RAD
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_radians(self.rad.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// Wraps into [0, 2π). Used for right ascension, azimuth and sidereal time.
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(wrap_0_2pi(self.rad))
    }

    /// Wraps into [-π, π). Used for hour angles and longitude differences.
    #[inline]
    pub fn wrapped_signed(self) -> Self {
        Self::from_radians(wrap_pm_pi(self.rad))
    }

    /// Clamps into [-π/2, π/2]. Used for declination and altitude.
    #[inline]
    pub fn clamped_latitude(self) -> Self {
        Self::from_radians(clamp_dec(self.rad))
    }
}

impl Add for Angle {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.rad + rhs.rad)
    }
}

impl Sub for Angle {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.rad - rhs.rad)
    }
}

impl Neg for Angle {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_radians(-self.rad)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
