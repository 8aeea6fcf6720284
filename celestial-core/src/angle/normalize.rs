//! Angle normalization.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth, sidereal time | [0, 2π) | [`wrap_0_2pi`] |
//! | Hour angle | [-π, π) | [`wrap_pm_pi`] |
//! | Declination, altitude, latitude | [-π/2, π/2] | [`clamp_dec`] |
//!
//! [`wrap_0_2pi`] is the single wrap every stage uses. It is idempotent,
//! `wrap_0_2pi(wrap_0_2pi(x)) == wrap_0_2pi(x)` for every finite `x`, and the
//! result is strictly below 2π even when a tiny negative input rounds up.
//! NaN is returned unchanged by all three functions.
//!
//! ```
//! use celestial_core::angle::{wrap_0_2pi, wrap_pm_pi, clamp_dec};
//! use std::f64::consts::PI;
//!
//! let ra = wrap_0_2pi(-0.5);
//! assert!(ra > 0.0 && ra < 2.0 * PI);
//!
//! let ha = wrap_pm_pi(3.5);
//! assert!(ha >= -PI && ha < PI);
//!
//! let dec = clamp_dec(2.0);
//! assert!((dec - PI / 2.0).abs() < 1e-10);
//! ```

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;

#[inline]
pub fn wrap_0_2pi(angle: f64) -> f64 {
    let w = fmod(angle, TWOPI);
    let w = if w < 0.0 { w + TWOPI } else { w };
    // -1e-17 + 2π rounds to exactly 2π
    if w >= TWOPI {
        0.0
    } else {
        w
    }
}

#[inline]
pub fn wrap_pm_pi(angle: f64) -> f64 {
    let w = fmod(angle, TWOPI);
    if w >= PI {
        w - TWOPI
    } else if w < -PI {
        w + TWOPI
    } else {
        w
    }
}

#[inline]
pub fn clamp_dec(angle: f64) -> f64 {
    if angle > HALF_PI {
        HALF_PI
    } else if angle < -HALF_PI {
        -HALF_PI
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_0_2pi_range() {
        let samples = [
            -100.0, -TWOPI, -PI, -1e-17, -0.0, 0.0, 1e-300, 1.0, PI, TWOPI, 7.0, 1e6,
        ];
        for x in samples {
            let w = wrap_0_2pi(x);
            assert!((0.0..TWOPI).contains(&w), "wrap_0_2pi({x}) = {w}");
        }
    }

    #[test]
    fn test_wrap_0_2pi_idempotent() {
        let mut x = -50.0;
        while x < 50.0 {
            let once = wrap_0_2pi(x);
            assert_eq!(wrap_0_2pi(once), once, "not idempotent at {x}");
            x += 0.173;
        }
    }

    #[test]
    fn test_wrap_0_2pi_values() {
        assert!((wrap_0_2pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-15);
        assert!((wrap_0_2pi(TWOPI + 0.25) - 0.25).abs() < 1e-15);
        assert_eq!(wrap_0_2pi(TWOPI), 0.0);
    }

    #[test]
    fn test_wrap_pm_pi() {
        assert!((wrap_pm_pi(1.5 * PI) + 0.5 * PI).abs() < 1e-15);
        assert_eq!(wrap_pm_pi(PI), -PI);
        assert!((wrap_pm_pi(-1.5 * PI) - 0.5 * PI).abs() < 1e-15);
    }

    #[test]
    fn test_clamp_dec() {
        assert_eq!(clamp_dec(2.0), HALF_PI);
        assert_eq!(clamp_dec(-2.0), -HALF_PI);
        assert_eq!(clamp_dec(0.3), 0.3);
    }

    #[test]
    fn test_nan_passthrough() {
        assert!(wrap_0_2pi(f64::NAN).is_nan());
        assert!(wrap_pm_pi(f64::NAN).is_nan());
        assert!(clamp_dec(f64::NAN).is_nan());
    }
}
