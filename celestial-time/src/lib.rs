//! Time for the sky pipeline: Julian dates built from Unix milliseconds,
//! Greenwich and local mean sidereal time, and timestamp parsing.
//!
//! ```
//! use celestial_time::{JulianDate, LST};
//! use celestial_core::Angle;
//!
//! let jd = JulianDate::from_unix_millis(946_728_000_000); // 2000-01-01T12:00:00Z
//! assert_eq!(jd.to_f64(), 2451545.0);
//!
//! let lst = LST::from_julian_date(&jd, Angle::from_degrees(-122.24));
//! assert!(lst.radians() >= 0.0 && lst.radians() < std::f64::consts::TAU);
//! ```

pub mod julian;
pub mod parsing;
pub mod sidereal;

pub use julian::JulianDate;
pub use parsing::{parse_timestamp, unix_millis_now};
pub use sidereal::{GMST, LST};

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Timestamp out of range: {0}")]
    OutOfRange(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

impl From<celestial_core::AstroError> for TimeError {
    fn from(err: celestial_core::AstroError) -> Self {
        TimeError::CalculationError(err.to_string())
    }
}
