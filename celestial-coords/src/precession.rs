//! Classical three-angle precession (IAU 1976, Lieske et al.).
//!
//! The mean equator and equinox drift by about 50″ per year. Converting
//! between the equinox of an observation and J2000.0 is the rotation
//!
//! ```text
//! P = R3(−z) · R2(θ) · R3(−ζ)
//! ```
//!
//! with the three angles cubic in Julian centuries `T` measured from J2000.0
//! toward the target equinox. Going from a date back to J2000.0 is the same
//! polynomial evaluated at `T = −(JD − 2451545)/36525`.
//!
//! `R2` is the standard frame rotation about Y (`[[c, 0, −s], [0, 1, 0], [s, 0, c]]`).
//! Transposing it doubles the declination shift instead of removing it.

use celestial_core::constants::ARCSEC_TO_RAD;
use celestial_core::RotationMatrix3;
use celestial_time::JulianDate;

/// ζ, z, θ in radians for an interval of `t` Julian centuries starting at J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionAngles {
    pub zeta: f64,
    pub z: f64,
    pub theta: f64,
}

impl PrecessionAngles {
    pub fn for_centuries(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            zeta: (2306.2181 * t + 0.30188 * t2 + 0.017998 * t3) * ARCSEC_TO_RAD,
            z: (2306.2181 * t + 1.09468 * t2 + 0.018203 * t3) * ARCSEC_TO_RAD,
            theta: (2004.3109 * t - 0.42665 * t2 - 0.041833 * t3) * ARCSEC_TO_RAD,
        }
    }

    /// `R3(−z) · R2(θ) · R3(−ζ)`.
    pub fn rotation_matrix(&self) -> RotationMatrix3 {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(-self.zeta);
        m.rotate_y(self.theta);
        m.rotate_z(-self.z);
        m
    }
}

/// Rotation taking of-date unit vectors to J2000.0.
pub fn of_date_to_j2000(jd: &JulianDate) -> RotationMatrix3 {
    PrecessionAngles::for_centuries(-jd.centuries_since_j2000()).rotation_matrix()
}

/// Rotation taking J2000.0 unit vectors to the mean equinox of `jd`.
pub fn j2000_to_date(jd: &JulianDate) -> RotationMatrix3 {
    PrecessionAngles::for_centuries(jd.centuries_since_j2000()).rotation_matrix()
}
