//! Shared numeric foundation for the celestial crates.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], the canonical wrap/clamp functions, sexagesimal formatters |
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`] |
//! | [`location`] | [`Location`], a validated WGS84 observer position |
//! | [`math`] | `fmod`, clamped `asin`, haversine separation |
//! | [`constants`] | Epochs, unit conversions, WGS84 parameters |
//! | [`errors`] | [`AstroError`] |

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;
pub mod matrix;

pub use angle::Angle;
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::Location;
pub use matrix::{RotationMatrix3, Vector3};
