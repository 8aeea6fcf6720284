use celestial_core::constants::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, MILLISECONDS_PER_DAY_F64,
    SECONDS_PER_DAY_F64, UNIX_EPOCH_JD,
};
use std::fmt;

/// A Julian Date split into two parts to keep sub-millisecond resolution.
///
/// Sensor timestamps land in `jd2` as a day count from the Unix epoch in `jd1`,
/// so `jd1 + jd2` is the familiar single-number JD.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD, 0.0)
    }

    /// `JD = ms / 86_400_000 + 2_440_587.5`. UTC is treated as UT here;
    /// the sub-second difference is far below what a phone sensor resolves.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self::new(UNIX_EPOCH_JD, millis as f64 / MILLISECONDS_PER_DAY_F64)
    }

    pub fn now() -> Self {
        Self::from_unix_millis(crate::parsing::unix_millis_now())
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY_F64)
    }

    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    /// Julian centuries since J2000.0, the `T` of the precession and sidereal polynomials.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    /// Decimal year on the Julian calendar (J2000.0 = 2000.0).
    pub fn decimal_year(&self) -> f64 {
        2000.0 + self.days_since_j2000() / DAYS_PER_JULIAN_YEAR
    }

    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        // eraCal2jd: MJD at 0h, then the day fraction
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;
        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = 2_400_000.5 + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;
        Self::new(jd1, jd2)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}
