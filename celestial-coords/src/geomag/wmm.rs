use celestial_core::constants::{DEG_TO_RAD, GEOMAGNETIC_REFERENCE_RADIUS_KM};
use celestial_core::{Angle, Location};
use celestial_time::JulianDate;

use super::coefficients::{GaussCoefficient, WMM2020_COEFFICIENTS, WMM2020_EPOCH};
use super::DeclinationModel;
use crate::errors::{CoordError, CoordResult};

pub const MAX_DEGREE: usize = 6;

const SIZE: usize = MAX_DEGREE + 1;

/// Geodetic latitude is held this far inside the poles, where the east
/// component's `1 / cos φ'` factor would otherwise blow up.
const POLE_LIMIT_DEG: f64 = 89.99;

type Table = [[f64; SIZE]; SIZE];

/// Main-field vector in the local geodetic frame, nanotesla.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticField {
    pub north: f64,
    pub east: f64,
    pub down: f64,
}

impl MagneticField {
    /// Angle from true north to the horizontal field, east positive.
    pub fn declination(&self) -> Angle {
        Angle::from_radians(libm::atan2(self.east, self.north))
    }

    /// Dip below the horizon, positive downward.
    pub fn inclination(&self) -> Angle {
        Angle::from_radians(libm::atan2(self.down, libm::hypot(self.north, self.east)))
    }

    pub fn horizontal_intensity(&self) -> f64 {
        libm::hypot(self.north, self.east)
    }
}

/// Spherical-harmonic geomagnetic main-field model (World Magnetic Model form).
///
/// The secular variation is applied linearly from the model epoch, so dates
/// outside the five-year validity window still evaluate, with growing error.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldMagneticModel {
    epoch: f64,
    g: Table,
    h: Table,
    g_dot: Table,
    h_dot: Table,
}

impl WorldMagneticModel {
    pub fn wmm2020() -> Self {
        let mut model = Self::empty(WMM2020_EPOCH);
        for coefficient in &WMM2020_COEFFICIENTS {
            model.insert(coefficient);
        }
        model
    }

    /// Builds a model from a coefficient list, e.g. a newer WMM release.
    ///
    /// # Errors
    ///
    /// A degree outside `1..=MAX_DEGREE`, an order above its degree, or any
    /// non-finite value.
    pub fn from_coefficients(epoch: f64, coefficients: &[GaussCoefficient]) -> CoordResult<Self> {
        if !epoch.is_finite() {
            return Err(CoordError::invalid_model("epoch must be finite"));
        }
        let mut model = Self::empty(epoch);
        for coefficient in coefficients {
            let GaussCoefficient { n, m, .. } = *coefficient;
            if n == 0 || n > MAX_DEGREE || m > n {
                return Err(CoordError::invalid_model(format!(
                    "coefficient (n={n}, m={m}) outside degree 1..={MAX_DEGREE}"
                )));
            }
            let values = [coefficient.g, coefficient.h, coefficient.g_dot, coefficient.h_dot];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(CoordError::invalid_model(format!(
                    "coefficient (n={n}, m={m}) is not finite"
                )));
            }
            model.insert(coefficient);
        }
        Ok(model)
    }

    fn empty(epoch: f64) -> Self {
        Self {
            epoch,
            g: [[0.0; SIZE]; SIZE],
            h: [[0.0; SIZE]; SIZE],
            g_dot: [[0.0; SIZE]; SIZE],
            h_dot: [[0.0; SIZE]; SIZE],
        }
    }

    fn insert(&mut self, c: &GaussCoefficient) {
        self.g[c.n][c.m] = c.g;
        self.h[c.n][c.m] = c.h;
        self.g_dot[c.n][c.m] = c.g_dot;
        self.h_dot[c.n][c.m] = c.h_dot;
    }

    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// Field vector at `location` for the decimal year `year`.
    pub fn field_at(&self, location: &Location, year: f64) -> MagneticField {
        let limit = POLE_LIMIT_DEG * DEG_TO_RAD;
        let held = Location {
            latitude: location.latitude.clamp(-limit, limit),
            ..*location
        };
        let (radius_km, lat_gc) = held.to_geocentric_spherical_km();
        let (x, s) = libm::sincos(lat_gc);
        let (p, dp) = schmidt_legendre(x, s);

        let dt = year - self.epoch;
        let ratio = GEOMAGNETIC_REFERENCE_RADIUS_KM / radius_km;

        let (mut north, mut east, mut down) = (0.0, 0.0, 0.0);
        let mut scale = ratio * ratio;
        for n in 1..=MAX_DEGREE {
            scale *= ratio;
            for m in 0..=n {
                let g = self.g[n][m] + dt * self.g_dot[n][m];
                let h = self.h[n][m] + dt * self.h_dot[n][m];
                let (sin_ml, cos_ml) = libm::sincos(m as f64 * held.longitude);
                let in_phase = g * cos_ml + h * sin_ml;

                north += scale * in_phase * dp[n][m];
                east += scale * m as f64 * (g * sin_ml - h * cos_ml) * p[n][m] / s;
                down -= (n as f64 + 1.0) * scale * in_phase * p[n][m];
            }
        }

        // rotate from the geocentric to the geodetic horizon
        let (sin_psi, cos_psi) = libm::sincos(lat_gc - held.latitude);
        MagneticField {
            north: north * cos_psi - down * sin_psi,
            east,
            down: north * sin_psi + down * cos_psi,
        }
    }
}

impl Default for WorldMagneticModel {
    fn default() -> Self {
        Self::wmm2020()
    }
}

impl DeclinationModel for WorldMagneticModel {
    fn declination(&self, location: &Location, jd: &JulianDate) -> Angle {
        self.field_at(location, jd.decimal_year()).declination()
    }
}

/// Schmidt semi-normalized associated Legendre functions `P[n][m](cos θ)` and
/// their derivatives with respect to colatitude `θ`, given `x = cos θ` and
/// `s = sin θ`.
fn schmidt_legendre(x: f64, s: f64) -> (Table, Table) {
    let mut p = [[0.0; SIZE]; SIZE];
    let mut dp = [[0.0; SIZE]; SIZE];
    p[0][0] = 1.0;

    for n in 1..=MAX_DEGREE {
        let nf = n as f64;
        for m in 0..=n {
            let mf = m as f64;
            if m == n {
                if n == 1 {
                    p[1][1] = s;
                    dp[1][1] = x;
                } else {
                    let k = libm::sqrt((2.0 * nf - 1.0) / (2.0 * nf));
                    p[n][n] = k * s * p[n - 1][n - 1];
                    dp[n][n] = k * (x * p[n - 1][n - 1] + s * dp[n - 1][n - 1]);
                }
            } else {
                let (k, p2, dp2) = if n - 1 > m {
                    let k = libm::sqrt((nf - 1.0) * (nf - 1.0) - mf * mf);
                    (k, p[n - 2][m], dp[n - 2][m])
                } else {
                    (0.0, 0.0, 0.0)
                };
                let den = libm::sqrt(nf * nf - mf * mf);
                let a = 2.0 * nf - 1.0;
                p[n][m] = (a * x * p[n - 1][m] - k * p2) / den;
                dp[n][m] = (a * (x * dp[n - 1][m] - s * p[n - 1][m]) - k * dp2) / den;
            }
        }
    }
    (p, dp)
}
