//! Links into external sky-survey services.

use std::fmt;

use celestial_coords::{EquatorialPosition, J2000};
use serde::Serialize;

const IRSA_DISCOVERY_URL: &str = "https://irsa.ipac.caltech.edu/cgi-bin/Radar/nph-discovery";

/// Cone-search radius requested from IRSA, in arcminutes.
pub const IRSA_CONE_RADIUS_ARCMIN: u32 = 5;

/// A survey query for one position: the coordinates as shown to the user
/// and the URL they open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyLink {
    /// `"<ra_deg>, <dec_deg>"` in J2000 decimal degrees.
    pub label: String,
    pub url: String,
}

impl SurveyLink {
    /// IRSA discovery-service cone search around a J2000 position.
    ///
    /// Returns `None` for a non-finite position.
    pub fn irsa(position: &EquatorialPosition<J2000>) -> Option<Self> {
        let url = irsa_cone_search_url(position)?;
        Some(Self {
            label: format!(
                "{:.6}, {:.6}",
                position.ra().degrees(),
                position.dec().degrees()
            ),
            url,
        })
    }
}

impl fmt::Display for SurveyLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.url)
    }
}

/// IRSA discovery-service cone search URL around a J2000 position.
///
/// RA and Dec are written as decimal degrees. Returns `None` for a
/// non-finite position.
pub fn irsa_cone_search_url(position: &EquatorialPosition<J2000>) -> Option<String> {
    if !position.is_finite() {
        return None;
    }
    Some(format!(
        "{IRSA_DISCOVERY_URL}?objstr={:.6},{:.6}%20Equ%20J2000&mode=cone&radius={IRSA_CONE_RADIUS_ARCMIN}&radunits=arcmin",
        position.ra().degrees(),
        position.dec().degrees(),
    ))
}
