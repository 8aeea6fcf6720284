use std::collections::HashMap;

use celestial_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use celestial_core::{Angle, Location};
use celestial_time::JulianDate;
use parking_lot::RwLock;
use tracing::trace;

use super::DeclinationModel;

const DEFAULT_MAX_ENTRIES: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BucketKey {
    lat: i64,
    lon: i64,
    day: i64,
}

/// Caches another model's declination per (latitude, longitude, day) bucket.
///
/// Each bucket is evaluated once, at its center, and shared by every
/// request falling inside it. Declination changes by a few arcminutes per
/// year and per tens of kilometers, so a half-degree bucket stays well inside
/// the model's own error. The cache is cleared when it reaches its entry limit.
pub struct BucketedDeclination<M> {
    inner: M,
    bucket_deg: f64,
    max_entries: usize,
    cache: RwLock<HashMap<BucketKey, Angle>>,
}

impl<M: DeclinationModel> BucketedDeclination<M> {
    /// `bucket_deg` is clamped to [0.001°, 90°]; a non-finite value means 0.5°.
    pub fn new(inner: M, bucket_deg: f64) -> Self {
        let bucket_deg = if bucket_deg.is_finite() {
            bucket_deg.clamp(0.001, 90.0)
        } else {
            0.5
        };
        Self {
            inner,
            bucket_deg,
            max_entries: DEFAULT_MAX_ENTRIES,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    pub fn bucket_deg(&self) -> f64 {
        self.bucket_deg
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    fn key(&self, location: &Location, jd: &JulianDate) -> BucketKey {
        let bucket = |deg: f64| libm::floor(deg / self.bucket_deg) as i64;
        BucketKey {
            lat: bucket(location.latitude * RAD_TO_DEG),
            lon: bucket(location.longitude * RAD_TO_DEG),
            day: libm::floor(jd.to_f64()) as i64,
        }
    }

    fn center(&self, key: &BucketKey, height: f64) -> (Location, JulianDate) {
        let center = |index: i64| (index as f64 + 0.5) * self.bucket_deg;
        let location = Location {
            latitude: center(key.lat).clamp(-90.0, 90.0) * DEG_TO_RAD,
            longitude: center(key.lon).clamp(-180.0, 180.0) * DEG_TO_RAD,
            height,
        };
        (location, JulianDate::new(key.day as f64, 0.5))
    }
}

impl<M: DeclinationModel> DeclinationModel for BucketedDeclination<M> {
    fn declination(&self, location: &Location, jd: &JulianDate) -> Angle {
        let key = self.key(location, jd);
        if let Some(hit) = self.cache.read().get(&key) {
            trace!(?key, "declination cache hit");
            return *hit;
        }

        let (center, center_jd) = self.center(&key, location.height);
        let value = self.inner.declination(&center, &center_jd);
        trace!(?key, declination_deg = value.degrees(), "declination cache miss");

        let mut cache = self.cache.write();
        if cache.len() >= self.max_entries {
            cache.clear();
        }
        cache.insert(key, value);
        value
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for BucketedDeclination<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketedDeclination")
            .field("inner", &self.inner)
            .field("bucket_deg", &self.bucket_deg)
            .field("entries", &self.cache.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geomag::WorldMagneticModel;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        calls: AtomicUsize,
    }

    impl DeclinationModel for Counting {
        fn declination(&self, location: &Location, _jd: &JulianDate) -> Angle {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Angle::from_radians(location.longitude)
        }
    }

    fn counting() -> Counting {
        Counting {
            calls: AtomicUsize::new(0),
        }
    }

    #[test]
    fn test_same_bucket_hits_cache() {
        let cached = BucketedDeclination::new(counting(), 0.5);
        let jd = JulianDate::from_f64(2460676.3);
        let a = Location::from_degrees(47.38, -122.24, 0.0).unwrap();
        let b = Location::from_degrees(47.41, -122.30, 15.0).unwrap();

        let da = cached.declination(&a, &jd);
        let db = cached.declination(&b, &jd.add_seconds(600.0));
        assert_eq!(da, db);
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn test_bucket_center_is_used() {
        let cached = BucketedDeclination::new(counting(), 0.5);
        let loc = Location::from_degrees(10.1, 20.1, 0.0).unwrap();
        let d = cached.declination(&loc, &JulianDate::j2000());
        assert!((d.degrees() - 20.25).abs() < 1e-12);
    }

    #[test]
    fn test_new_day_or_place_misses() {
        let cached = BucketedDeclination::new(counting(), 0.5);
        let jd = JulianDate::from_f64(2460676.3);
        let a = Location::from_degrees(47.38, -122.24, 0.0).unwrap();
        let far = Location::from_degrees(40.7, -74.0, 0.0).unwrap();

        cached.declination(&a, &jd);
        cached.declination(&a, &jd.add_days(1.0));
        cached.declination(&far, &jd);
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_max_entries_clears() {
        let cached = BucketedDeclination::new(counting(), 1.0).with_max_entries(2);
        let jd = JulianDate::j2000();
        for lon in [0.5, 1.5, 2.5] {
            let loc = Location::from_degrees(0.0, lon, 0.0).unwrap();
            cached.declination(&loc, &jd);
        }
        assert_eq!(cached.len(), 1);
        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn test_close_to_uncached_model() {
        let model = WorldMagneticModel::wmm2020();
        let cached = BucketedDeclination::new(WorldMagneticModel::wmm2020(), 0.5);
        let loc = Location::from_degrees(47.38, -122.24, 0.0).unwrap();
        let jd = JulianDate::from_calendar(2025, 6, 1, 4, 0, 0.0);
        let exact = model.declination(&loc, &jd).degrees();
        let approx = cached.declination(&loc, &jd).degrees();
        assert!((exact - approx).abs() < 0.2, "{exact} vs {approx}");
    }

    #[test]
    fn test_shared_across_threads() {
        let cached = Arc::new(BucketedDeclination::new(WorldMagneticModel::wmm2020(), 0.5));
        let jd = JulianDate::from_calendar(2025, 1, 1, 0, 0, 0.0);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cached = Arc::clone(&cached);
                std::thread::spawn(move || {
                    let loc = Location::from_degrees(47.1 + i as f64 * 0.01, -122.2, 0.0).unwrap();
                    cached.declination(&loc, &jd)
                })
            })
            .collect();
        let results: Vec<Angle> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn test_bad_bucket_size_falls_back() {
        assert_eq!(BucketedDeclination::new(counting(), f64::NAN).bucket_deg(), 0.5);
        assert_eq!(BucketedDeclination::new(counting(), 0.0).bucket_deg(), 0.001);
    }
}
