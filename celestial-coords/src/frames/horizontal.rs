use std::fmt;
use std::marker::PhantomData;

use celestial_core::math::asin_clamped;
use celestial_core::{Angle, Vector3};
use celestial_time::LST;

use super::equatorial::{EquatorialPosition, OfDate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which north an azimuth is measured from.
pub trait NorthReference: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;
}

/// Magnetic north, as reported by a device compass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Magnetic;

/// Geographic (true) north.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrueNorth;

impl NorthReference for Magnetic {
    const NAME: &'static str = "magnetic";
}

impl NorthReference for TrueNorth {
    const NAME: &'static str = "true";
}

/// Altitude in [-π/2, π/2] and azimuth in [0, 2π), measured from north
/// increasing through east.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct HorizontalPosition<N: NorthReference> {
    altitude: Angle,
    azimuth: Angle,
    #[cfg_attr(feature = "serde", serde(skip))]
    north: PhantomData<N>,
}

impl<N: NorthReference> HorizontalPosition<N> {
    pub fn new(altitude: Angle, azimuth: Angle) -> Self {
        Self {
            altitude: altitude.clamped_latitude(),
            azimuth: azimuth.wrapped(),
            north: PhantomData,
        }
    }

    pub fn from_degrees(altitude_deg: f64, azimuth_deg: f64) -> Self {
        Self::new(
            Angle::from_degrees(altitude_deg),
            Angle::from_degrees(azimuth_deg),
        )
    }

    /// Resolves an East-North-Up direction into altitude and azimuth.
    ///
    /// `azimuth = atan2(e, n)`, `altitude = asin(u)` with `u` clamped to
    /// [-1, 1]. A zero or non-finite vector has no direction and yields NaN
    /// for both angles.
    pub fn from_enu(v: &Vector3) -> Self {
        if !v.is_finite() || v.magnitude() == 0.0 {
            return Self {
                altitude: Angle::NAN,
                azimuth: Angle::NAN,
                north: PhantomData,
            };
        }
        let u = v.normalize();
        Self::new(
            Angle::from_radians(asin_clamped(u.z)),
            Angle::from_radians(libm::atan2(u.x, u.y)),
        )
    }

    pub fn to_enu(&self) -> Vector3 {
        let (sin_alt, cos_alt) = self.altitude.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vector3::new(cos_alt * sin_az, cos_alt * cos_az, sin_alt)
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn north_reference(&self) -> &'static str {
        N::NAME
    }

    pub fn is_finite(&self) -> bool {
        self.altitude.is_finite() && self.azimuth.is_finite()
    }

    /// Eight-point compass label for the azimuth.
    pub fn cardinal_direction(&self) -> &'static str {
        const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        if !self.azimuth.is_finite() {
            return "-";
        }
        let sector = libm::floor((self.azimuth.degrees() + 22.5) / 45.0) as usize % 8;
        POINTS[sector]
    }
}

impl HorizontalPosition<Magnetic> {
    /// Adds the magnetic declination (east positive) to get a true azimuth.
    pub fn to_true_north(&self, declination: Angle) -> HorizontalPosition<TrueNorth> {
        HorizontalPosition::new(self.altitude, self.azimuth + declination)
    }
}

impl HorizontalPosition<TrueNorth> {
    /// Right ascension and declination of date for an observer at geodetic
    /// `latitude` when the local sidereal time is `lst`.
    ///
    /// ```text
    /// sin δ = sin a · sin φ + cos a · cos φ · cos A
    /// H     = atan2(−sin A · cos a, sin a · cos φ − cos a · sin φ · cos A)
    /// α     = LST − H
    /// ```
    ///
    /// At the zenith the azimuth drops out and δ equals φ.
    pub fn to_equatorial(&self, latitude: Angle, lst: &LST) -> EquatorialPosition<OfDate> {
        let (sin_alt, cos_alt) = self.altitude.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_lat, cos_lat) = latitude.sin_cos();

        let dec = asin_clamped(sin_alt * sin_lat + cos_alt * cos_lat * cos_az);
        let hour_angle = libm::atan2(
            -sin_az * cos_alt,
            sin_alt * cos_lat - cos_alt * sin_lat * cos_az,
        );

        EquatorialPosition::new(
            lst.angle() - Angle::from_radians(hour_angle),
            Angle::from_radians(dec),
        )
    }
}

impl<N: NorthReference> fmt::Display for HorizontalPosition<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alt {:.1}° Az {:.1}° ({} north)",
            self.altitude.degrees(),
            self.azimuth.degrees(),
            N::NAME
        )
    }
}
