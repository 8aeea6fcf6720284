//! Sexagesimal formatting for right ascension and declination.
//!
//! Both formatters round the total number of seconds first and only then split
//! it into fields, so a field never reads `60`. Right ascension wraps into
//! [0h, 24h) before rounding and a value that rounds up to 24h prints as
//! `00:00:00`. Declination always carries an explicit sign.
//!
//! ```
//! use celestial_core::Angle;
//! use celestial_core::angle::{DmsFmt, HmsFmt};
//!
//! let hms = HmsFmt { frac_digits: 0 };
//! assert_eq!(hms.fmt(Angle::from_hours(18.615556)), "18:36:56");
//! assert_eq!(hms.fmt(Angle::ZERO), "00:00:00");
//!
//! let dms = DmsFmt { frac_digits: 0 };
//! assert_eq!(dms.fmt(Angle::from_degrees(-23.4392)), "-23:26:21");
//! assert_eq!(dms.fmt(Angle::ZERO), "+00:00:00");
//! ```

use super::normalize::wrap_0_2pi;
use super::Angle;
use crate::constants::RAD_TO_DEG;

/// Printed in place of a sexagesimal value when the angle is not finite.
pub const INVALID_SEXAGESIMAL: &str = "--:--:--";

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_TURN_HMS: u64 = 24 * SECONDS_PER_HOUR;

/// Formats an angle as `±DD:MM:SS[.s…]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DmsFmt {
    pub frac_digits: u8,
}

/// Formats an angle as `HH:MM:SS[.s…]` on the [0h, 24h) circle.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmsFmt {
    pub frac_digits: u8,
}

impl DmsFmt {
    pub fn fmt(&self, angle: Angle) -> String {
        if !angle.is_finite() {
            return INVALID_SEXAGESIMAL.to_string();
        }
        let degrees = angle.degrees();
        let scale = seconds_scale(self.frac_digits);
        let units = libm::round(degrees.abs() * 3600.0 * scale as f64) as u64;
        let sign = if degrees < 0.0 && units > 0 { '-' } else { '+' };
        format!(
            "{}{}",
            sign,
            split_fields(units, scale, self.frac_digits)
        )
    }
}

impl HmsFmt {
    pub fn fmt(&self, angle: Angle) -> String {
        if !angle.is_finite() {
            return INVALID_SEXAGESIMAL.to_string();
        }
        let hours = wrap_0_2pi(angle.radians()) * RAD_TO_DEG / 15.0;
        let scale = seconds_scale(self.frac_digits);
        let units = libm::round(hours * 3600.0 * scale as f64) as u64;
        let units = units % (SECONDS_PER_TURN_HMS * scale);
        split_fields(units, scale, self.frac_digits)
    }
}

fn seconds_scale(frac_digits: u8) -> u64 {
    10u64.pow(u32::from(frac_digits.min(9)))
}

fn split_fields(units: u64, scale: u64, frac_digits: u8) -> String {
    let per_major = SECONDS_PER_HOUR * scale;
    let per_minor = 60 * scale;
    let major = units / per_major;
    let minor = (units % per_major) / per_minor;
    let rest = units % per_minor;
    let whole = rest / scale;
    let frac = rest % scale;

    let digits = usize::from(frac_digits.min(9));
    if digits == 0 {
        format!("{:02}:{:02}:{:02}", major, minor, whole)
    } else {
        format!(
            "{:02}:{:02}:{:02}.{:0width$}",
            major,
            minor,
            whole,
            frac,
            width = digits
        )
    }
}
