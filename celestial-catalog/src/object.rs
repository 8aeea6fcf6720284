use std::fmt;

use celestial_coords::{EquatorialPosition, J2000};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named deep-sky object with a J2000.0 position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogObject {
    id: String,
    number: u16,
    name: String,
    position: EquatorialPosition<J2000>,
    reference_link: String,
}

impl CatalogObject {
    pub fn new(
        id: impl Into<String>,
        number: u16,
        ra_deg: f64,
        dec_deg: f64,
        name: impl Into<String>,
        reference_link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            name: name.into(),
            position: EquatorialPosition::from_degrees(ra_deg, dec_deg),
            reference_link: reference_link.into(),
        }
    }

    /// Lowercase identifier such as `"m31"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &EquatorialPosition<J2000> {
        &self.position
    }

    pub fn reference_link(&self) -> &str {
        &self.reference_link
    }

    /// Display designation, e.g. `"M31"`.
    pub fn designation(&self) -> String {
        self.id.to_uppercase()
    }
}

impl fmt::Display for CatalogObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.designation(), self.name, self.position)
    }
}
