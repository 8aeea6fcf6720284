//! Magnetic declination: the angle from true north to magnetic north,
//! positive when magnetic north lies east of true north.
//!
//! A compass azimuth becomes a true azimuth by adding the declination at the
//! observer's place and time. [`DeclinationModel`] is the seam the pipeline
//! talks to; three implementations ship here:
//!
//! | Type | Behavior |
//! |------|----------|
//! | [`WorldMagneticModel`] | WMM2020 spherical-harmonic model, evaluated on every call |
//! | [`BucketedDeclination`] | wraps another model and caches per location bucket and day |
//! | [`FixedDeclination`] | a constant, for tests or a locally surveyed value |
//!
//! ```
//! use celestial_coords::geomag::{DeclinationModel, WorldMagneticModel};
//! use celestial_core::Location;
//! use celestial_time::JulianDate;
//!
//! let kent = Location::from_degrees(47.38, -122.24, 0.0)?;
//! let jd = JulianDate::from_calendar(2025, 1, 1, 0, 0, 0.0);
//! let d = WorldMagneticModel::wmm2020().declination(&kent, &jd);
//! assert!(d.degrees() > 14.0 && d.degrees() < 16.5);
//! # Ok::<(), celestial_core::AstroError>(())
//! ```

mod cache;
mod coefficients;
mod wmm;

pub use cache::BucketedDeclination;
pub use coefficients::{GaussCoefficient, WMM2020_COEFFICIENTS, WMM2020_EPOCH};
pub use wmm::{MagneticField, WorldMagneticModel, MAX_DEGREE};

use celestial_core::{Angle, Location};
use celestial_time::JulianDate;

/// Source of magnetic declination for a place and time.
///
/// Implementations must be total: every valid [`Location`] and any finite
/// date yields a finite angle.
pub trait DeclinationModel: Send + Sync {
    fn declination(&self, location: &Location, jd: &JulianDate) -> Angle;
}

/// The same declination everywhere and always.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDeclination(pub Angle);

impl DeclinationModel for FixedDeclination {
    fn declination(&self, _location: &Location, _jd: &JulianDate) -> Angle {
        self.0
    }
}

impl<M: DeclinationModel + ?Sized> DeclinationModel for std::sync::Arc<M> {
    fn declination(&self, location: &Location, jd: &JulianDate) -> Angle {
        (**self).declination(location, jd)
    }
}

impl<M: DeclinationModel + ?Sized> DeclinationModel for Box<M> {
    fn declination(&self, location: &Location, jd: &JulianDate) -> Angle {
        (**self).declination(location, jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_fixed_declination() {
        let model = FixedDeclination(Angle::from_degrees(-3.5));
        let loc = Location::from_degrees(10.0, 20.0, 0.0).unwrap();
        assert_eq!(
            model.declination(&loc, &JulianDate::j2000()),
            Angle::from_degrees(-3.5)
        );
    }

    #[test]
    fn test_trait_objects_forward() {
        let shared: Arc<dyn DeclinationModel> = Arc::new(FixedDeclination(Angle::ZERO));
        let boxed: Box<dyn DeclinationModel> = Box::new(FixedDeclination(Angle::PI));
        let loc = Location::from_degrees(0.0, 0.0, 0.0).unwrap();
        let jd = JulianDate::j2000();
        assert_eq!(shared.declination(&loc, &jd), Angle::ZERO);
        assert_eq!(boxed.declination(&loc, &jd), Angle::PI);
    }
}
