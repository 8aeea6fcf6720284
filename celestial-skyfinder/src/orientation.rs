//! Decoding raw orientation readings into a pointing direction.
//!
//! A reading is the rotation-vector encoding produced by handheld attitude
//! sensors: the vector part `(x, y, z)` of a unit quaternion, optionally
//! followed by the scalar part `w`. Readings may carry fewer components
//! (missing axes read as 0) or more (a trailing accuracy estimate, ignored).

use std::fmt;
use std::str::FromStr;

use celestial_core::{RotationMatrix3, Vector3};

use crate::error::{Error, Result};

/// One orientation reading plus its capture time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSample {
    x: f64,
    y: f64,
    z: f64,
    w: Option<f64>,
    timestamp_ms: i64,
}

impl OrientationSample {
    /// Builds a sample from up to four components `[x, y, z, w]`.
    ///
    /// Absent vector components default to 0 and an absent `w` is derived
    /// from the vector part when decoding. Components past the fourth are
    /// ignored.
    pub fn from_components(components: &[f64], timestamp_ms: i64) -> Self {
        let get = |i: usize| components.get(i).copied().unwrap_or(0.0);
        Self {
            x: get(0),
            y: get(1),
            z: get(2),
            w: components.get(3).copied(),
            timestamp_ms,
        }
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    pub fn with_timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Quaternion `(w, x, y, z)` this reading encodes.
    ///
    /// Without an explicit `w` the scalar part is `sqrt(1 - x² - y² - z²)`,
    /// or 0 when the vector part already has unit length or more.
    pub fn quaternion(&self) -> (f64, f64, f64, f64) {
        let w = self.w.unwrap_or_else(|| {
            let s = 1.0 - self.x * self.x - self.y * self.y - self.z * self.z;
            if s > 0.0 {
                libm::sqrt(s)
            } else {
                0.0
            }
        });
        (w, self.x, self.y, self.z)
    }

    /// Device-to-world (East, North, Up) rotation.
    pub fn rotation_matrix(&self) -> RotationMatrix3 {
        let (w, x, y, z) = self.quaternion();
        RotationMatrix3::from_quaternion(w, x, y, z)
    }

    /// Unit ENU vector along the device's forward axis (out of the back of
    /// the screen, device -Z).
    ///
    /// A degenerate reading yields the zero vector, which downstream stages
    /// turn into NaN angles.
    pub fn forward_enu(&self) -> Vector3 {
        let r = self.rotation_matrix();
        let forward = Vector3::new(-r.get(0, 2), -r.get(1, 2), -r.get(2, 2));
        if !forward.is_finite() || forward.magnitude() == 0.0 {
            tracing::warn!(sample = %self, "orientation sample decodes to no direction");
            return Vector3::zeros();
        }
        forward.normalize()
    }
}

impl fmt::Display for OrientationSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.timestamp_ms, self.x, self.y, self.z)?;
        if let Some(w) = self.w {
            write!(f, " {w}")?;
        }
        Ok(())
    }
}

/// Parses `timestamp_ms x y z [w]`, separated by whitespace or commas.
impl FromStr for OrientationSample {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut fields = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty());

        let timestamp = fields
            .next()
            .ok_or_else(|| Error::parse("empty sample line"))?;
        let timestamp_ms = celestial_time::parse_timestamp(timestamp)?;

        let components = fields
            .map(|s| {
                s.parse::<f64>()
                    .map_err(|e| Error::parse(format!("bad component '{s}': {e}")))
            })
            .collect::<Result<Vec<f64>>>()?;
        if components.is_empty() {
            return Err(Error::parse(format!("no orientation components in '{line}'")));
        }

        Ok(Self::from_components(&components, timestamp_ms))
    }
}

/// Parses a comma-separated component list such as `"0.1,0.2,0.3"`.
///
/// Between one and five components are accepted. Missing axes read as 0,
/// the same as for stream lines.
pub fn parse_components(text: &str) -> Result<Vec<f64>> {
    let components = text
        .split(',')
        .map(|s| {
            let s = s.trim();
            s.parse::<f64>()
                .map_err(|e| Error::parse(format!("bad component '{s}': {e}")))
        })
        .collect::<Result<Vec<f64>>>()?;
    if components.len() > 5 {
        return Err(Error::parse(format!(
            "expected 1 to 5 components, got {}",
            components.len()
        )));
    }
    Ok(components)
}
