//! Coordinate frames between a device's pointing direction and a catalog.
//!
//! The conversions here run in pipeline order:
//!
//! 1. [`HorizontalPosition::from_enu`] turns an East-North-Up vector into
//!    altitude and magnetic azimuth.
//! 2. [`HorizontalPosition::to_true_north`] applies the magnetic declination
//!    from a [`geomag::DeclinationModel`].
//! 3. [`HorizontalPosition::to_equatorial`] turns altitude/true azimuth into
//!    RA/Dec of date using latitude and local sidereal time.
//! 4. [`EquatorialPosition::to_j2000`] removes precession.
//!
//! ```
//! use celestial_coords::{HorizontalPosition, Magnetic};
//! use celestial_core::{Angle, Vector3};
//! use celestial_time::{JulianDate, LST};
//!
//! let jd = JulianDate::from_unix_millis(1_735_700_400_000);
//! let lst = LST::from_julian_date(&jd, Angle::from_degrees(-122.24));
//!
//! let up = HorizontalPosition::<Magnetic>::from_enu(&Vector3::z_axis());
//! let of_date = up
//!     .to_true_north(Angle::from_degrees(15.2))
//!     .to_equatorial(Angle::from_degrees(47.38), &lst);
//! assert!((of_date.dec().degrees() - 47.38).abs() < 1e-9);
//!
//! let j2000 = of_date.to_j2000(&jd);
//! assert!(j2000.separation(&j2000).radians() == 0.0);
//! ```

pub mod errors;
pub mod frames;
pub mod geomag;
pub mod precession;

pub use errors::{CoordError, CoordResult};
pub use frames::{
    Epoch, EquatorialPosition, HorizontalPosition, Magnetic, NorthReference, OfDate, TrueNorth,
    J2000,
};
pub use geomag::{BucketedDeclination, DeclinationModel, FixedDeclination, WorldMagneticModel};

pub use celestial_core::{Angle, Location, Vector3};
