//! Nearest-object matching with an acceptance threshold.
//!
//! A linear scan over the catalog. The first entry wins exact ties, and a
//! position farther than the threshold from every object yields
//! [`CatalogMatch::NoMatch`] rather than a misleading far-away label.

use std::fmt;
use std::sync::Arc;

use celestial_coords::{Angle, EquatorialPosition, J2000};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::object::CatalogObject;

/// Default acceptance threshold, in degrees.
pub const DEFAULT_THRESHOLD_DEG: f64 = 10.0;

/// Label used when nothing is close enough.
pub const NO_MATCH_LABEL: &str = "-";

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CatalogMatch {
    Found {
        object: CatalogObject,
        separation: Angle,
    },
    NoMatch,
}

impl CatalogMatch {
    pub fn is_match(&self) -> bool {
        matches!(self, CatalogMatch::Found { .. })
    }

    pub fn object(&self) -> Option<&CatalogObject> {
        match self {
            CatalogMatch::Found { object, .. } => Some(object),
            CatalogMatch::NoMatch => None,
        }
    }

    pub fn separation(&self) -> Option<Angle> {
        match self {
            CatalogMatch::Found { separation, .. } => Some(*separation),
            CatalogMatch::NoMatch => None,
        }
    }

    /// Object name, or `"-"` for no match.
    pub fn label(&self) -> &str {
        self.object().map_or(NO_MATCH_LABEL, CatalogObject::name)
    }
}

impl fmt::Display for CatalogMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogMatch::Found { object, separation } => write!(
                f,
                "{} {} ({:.2}° away)",
                object.designation(),
                object.name(),
                separation.degrees()
            ),
            CatalogMatch::NoMatch => f.write_str(NO_MATCH_LABEL),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NearestMatcher {
    catalog: Arc<Catalog>,
    threshold: Angle,
}

impl NearestMatcher {
    pub fn new(catalog: Arc<Catalog>, threshold: Angle) -> Self {
        Self { catalog, threshold }
    }

    /// Messier catalog with the default 10° threshold.
    pub fn messier() -> Self {
        Self::new(
            Catalog::messier(),
            Angle::from_degrees(DEFAULT_THRESHOLD_DEG),
        )
    }

    pub fn with_threshold(mut self, threshold: Angle) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn threshold(&self) -> Angle {
        self.threshold
    }

    /// Closest object to `target`, or `NoMatch` if it lies beyond the
    /// threshold. Non-finite targets never match.
    pub fn find(&self, target: &EquatorialPosition<J2000>) -> CatalogMatch {
        if !target.is_finite() {
            return CatalogMatch::NoMatch;
        }

        let mut best: Option<(&CatalogObject, f64)> = None;
        for object in self.catalog.iter() {
            let sep = target.separation(object.position()).radians();
            match best {
                Some((_, best_sep)) if sep >= best_sep => {}
                _ => best = Some((object, sep)),
            }
        }

        match best {
            Some((object, sep)) if sep <= self.threshold.radians() => CatalogMatch::Found {
                object: object.clone(),
                separation: Angle::from_radians(sep),
            },
            _ => CatalogMatch::NoMatch,
        }
    }
}

impl Default for NearestMatcher {
    fn default() -> Self {
        Self::messier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_object_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![
            CatalogObject::new("a", 1, 10.0, 0.0, "First", ""),
            CatalogObject::new("b", 2, 10.0, 0.0, "Duplicate", ""),
            CatalogObject::new("c", 3, 40.0, 0.0, "Far", ""),
        ]))
    }

    #[test]
    fn test_first_entry_wins_ties() {
        let matcher = NearestMatcher::new(two_object_catalog(), Angle::from_degrees(10.0));
        let result = matcher.find(&EquatorialPosition::from_degrees(12.0, 0.0));
        assert_eq!(result.object().map(|o| o.id()), Some("a"));
        let sep = result.separation().unwrap().degrees();
        assert!((sep - 2.0).abs() < 1e-9, "{sep}");
    }

    #[test]
    fn test_beyond_threshold_is_no_match() {
        let matcher = NearestMatcher::new(two_object_catalog(), Angle::from_degrees(5.0));
        let result = matcher.find(&EquatorialPosition::from_degrees(25.0, 0.0));
        assert_eq!(result, CatalogMatch::NoMatch);
        assert_eq!(result.label(), "-");
        assert_eq!(result.to_string(), "-");

        let wide = matcher.with_threshold(Angle::from_degrees(20.0));
        assert!(wide.find(&EquatorialPosition::from_degrees(25.0, 0.0)).is_match());
    }

    #[test]
    fn test_nan_target_is_no_match() {
        let matcher = NearestMatcher::messier();
        let target = EquatorialPosition::<J2000>::new(Angle::NAN, Angle::NAN);
        assert!(!matcher.find(&target).is_match());
    }

    #[test]
    fn test_empty_catalog_is_no_match() {
        let matcher = NearestMatcher::new(Arc::new(Catalog::default()), Angle::PI);
        assert!(!matcher.find(&EquatorialPosition::from_degrees(0.0, 0.0)).is_match());
    }

    #[test]
    fn test_messier_default_threshold() {
        let matcher = NearestMatcher::default();
        assert!((matcher.threshold().degrees() - DEFAULT_THRESHOLD_DEG).abs() < 1e-12);

        let orion = matcher.find(&EquatorialPosition::from_degrees(83.82, -5.39));
        assert_eq!(orion.label(), "Orion Nebula");
        assert!(orion.to_string().starts_with("M42 Orion Nebula"));
    }
}
