//! Mean sidereal time.
//!
//! [`GMST`] comes from the Meeus polynomial in days since J2000.0, and
//! [`LST`] adds the observer's east longitude. Both are wrapped into [0, 2π).

mod gmst;
mod lst;

pub use gmst::GMST;
pub use lst::LST;
