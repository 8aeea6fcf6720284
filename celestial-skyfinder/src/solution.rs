use std::fmt;

use celestial_catalog::query::CatalogMatch;
use celestial_coords::{Angle, EquatorialPosition, HorizontalPosition, OfDate, TrueNorth, J2000};
use celestial_time::JulianDate;
use serde::Serialize;

use crate::links::SurveyLink;

/// Everything one orientation sample resolves to.
///
/// Angles are kept in radians; the sexagesimal strings and the survey link
/// are derived from the J2000 position. A degenerate sample leaves the
/// angles NaN, the strings as `--:--:--` and the match empty.
#[derive(Debug, Clone, Serialize)]
pub struct SkySolution {
    pub timestamp_ms: i64,
    pub julian_date: JulianDate,
    /// True-north altitude and azimuth.
    pub horizontal: HorizontalPosition<TrueNorth>,
    /// Magnetic declination that was added to the sensor azimuth.
    pub magnetic_declination: Angle,
    pub local_sidereal_time: Angle,
    pub of_date: EquatorialPosition<OfDate>,
    pub j2000: EquatorialPosition<J2000>,
    pub ra_text: String,
    pub dec_text: String,
    pub nearest: CatalogMatch,
    /// IRSA cone search: coordinate label plus URL.
    pub survey_link: Option<SurveyLink>,
}

impl SkySolution {
    pub fn altitude_degrees(&self) -> f64 {
        self.horizontal.altitude().degrees()
    }

    pub fn azimuth_degrees(&self) -> f64 {
        self.horizontal.azimuth().degrees()
    }

    /// False when the sample had no usable direction.
    pub fn is_valid(&self) -> bool {
        self.horizontal.is_finite() && self.j2000.is_finite()
    }
}

impl fmt::Display for SkySolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time (ts): {} ({})", self.timestamp_ms, self.julian_date)?;
        writeln!(
            f,
            "Alt/Az: {:.1}°, {:.1}° {}",
            self.altitude_degrees(),
            self.azimuth_degrees(),
            self.horizontal.cardinal_direction()
        )?;
        writeln!(f, "RA/Dec (J2000): {}, {}", self.ra_text, self.dec_text)?;
        writeln!(f, "Nearest: {}", self.nearest)?;
        match &self.survey_link {
            Some(link) => write!(f, "IRSA ({}): {}", link.label, link.url),
            None => write!(f, "IRSA: -"),
        }
    }
}
