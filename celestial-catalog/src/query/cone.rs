//! Cone search over a catalog.
//!
//! Given a sky position and radius, [`cone_search`] scans every object,
//! keeps those inside the cone, and returns them sorted by angular distance.
//! The sort is stable, so objects at equal distance keep catalog order.

use celestial_coords::{EquatorialPosition, J2000};

use crate::catalog::Catalog;
use crate::object::CatalogObject;

/// Parameters for a cone search query.
#[derive(Debug, Clone)]
pub struct ConeSearchParams {
    /// Cone center right ascension (J2000), in degrees.
    pub ra_deg: f64,
    /// Cone center declination (J2000), in degrees.
    pub dec_deg: f64,
    /// Search radius, in degrees.
    pub radius_deg: f64,
    /// If set, return at most this many results (closest first).
    pub max_results: Option<usize>,
}

/// A single object returned from a cone search.
#[derive(Debug, Clone)]
pub struct ConeSearchResult<'a> {
    pub object: &'a CatalogObject,
    /// Angular distance from the search center, in degrees.
    pub distance_deg: f64,
}

/// Search for objects within a cone on the sky.
pub fn cone_search<'a>(catalog: &'a Catalog, params: &ConeSearchParams) -> Vec<ConeSearchResult<'a>> {
    let center = EquatorialPosition::<J2000>::from_degrees(params.ra_deg, params.dec_deg);
    if !center.is_finite() || !params.radius_deg.is_finite() {
        return Vec::new();
    }

    let mut results: Vec<ConeSearchResult<'a>> = catalog
        .iter()
        .filter_map(|object| {
            let distance_deg = center.separation(object.position()).degrees();
            (distance_deg <= params.radius_deg).then_some(ConeSearchResult {
                object,
                distance_deg,
            })
        })
        .collect();

    results.sort_by(|a, b| {
        a.distance_deg
            .partial_cmp(&b.distance_deg)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(max_results) = params.max_results {
        results.truncate(max_results);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(ra_deg: f64, dec_deg: f64, radius_deg: f64) -> ConeSearchParams {
        ConeSearchParams {
            ra_deg,
            dec_deg,
            radius_deg,
            max_results: None,
        }
    }

    #[test]
    fn test_andromeda_neighbourhood() {
        let catalog = Catalog::messier();
        let results = cone_search(&catalog, &params(10.6847, 41.2690, 1.0));
        let ids: Vec<&str> = results.iter().map(|r| r.object.id()).collect();
        assert_eq!(ids, ["m31", "m32", "m110"]);
        assert!(results[0].distance_deg < 1e-9);
    }

    #[test]
    fn test_sorted_and_truncated() {
        let catalog = Catalog::messier();
        let mut p = params(187.7, 12.4, 5.0);
        let all = cone_search(&catalog, &p);
        assert!(all.len() > 5);
        for pair in all.windows(2) {
            assert!(pair[0].distance_deg <= pair[1].distance_deg);
        }
        assert_eq!(all[0].object.id(), "m87");

        p.max_results = Some(3);
        let limited = cone_search(&catalog, &p);
        assert_eq!(limited.len(), 3);
        assert_eq!(limited[0].object.id(), all[0].object.id());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            CatalogObject::new("x", 1, 0.0, 1.0, "X", ""),
            CatalogObject::new("y", 2, 0.0, -1.0, "Y", ""),
        ]);
        let results = cone_search(&catalog, &params(0.0, 0.0, 2.0));
        let ids: Vec<&str> = results.iter().map(|r| r.object.id()).collect();
        assert_eq!(ids, ["x", "y"]);
    }

    #[test]
    fn test_empty_region_and_bad_input() {
        let catalog = Catalog::messier();
        assert!(cone_search(&catalog, &params(0.0, -80.0, 5.0)).is_empty());
        assert!(cone_search(&catalog, &params(f64::NAN, 0.0, 5.0)).is_empty());
        assert!(cone_search(&catalog, &params(0.0, 0.0, f64::NAN)).is_empty());
    }
}
