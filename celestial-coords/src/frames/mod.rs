//! Sky frames used by the pointing pipeline.
//!
//! Positions carry a zero-sized marker in their type so the compiler keeps
//! apart values that share a shape but not a meaning:
//!
//! | Type | Marker | Meaning |
//! |------|--------|---------|
//! | [`HorizontalPosition<Magnetic>`] | [`Magnetic`] | azimuth from magnetic north, straight off the sensor |
//! | [`HorizontalPosition<TrueNorth>`] | [`TrueNorth`] | azimuth from geographic north |
//! | [`EquatorialPosition<OfDate>`] | [`OfDate`] | RA/Dec on the equator and equinox of the observation |
//! | [`EquatorialPosition<J2000>`] | [`J2000`] | RA/Dec referred to J2000.0, comparable with catalogs |

mod equatorial;
mod horizontal;

pub use equatorial::{Epoch, EquatorialPosition, OfDate, J2000};
pub use horizontal::{HorizontalPosition, Magnetic, NorthReference, TrueNorth};
