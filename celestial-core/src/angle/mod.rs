mod core;
mod format;
mod normalize;

pub use self::core::Angle;
pub use format::{DmsFmt, HmsFmt, INVALID_SEXAGESIMAL};
pub use normalize::{clamp_dec, wrap_0_2pi, wrap_pm_pi};
