use std::fmt;
use std::marker::PhantomData;

use celestial_core::angle::{DmsFmt, HmsFmt};
use celestial_core::math::{asin_clamped, haversine_separation};
use celestial_core::{Angle, Vector3};
use celestial_time::{JulianDate, LST};

use super::horizontal::{HorizontalPosition, TrueNorth};
use crate::errors::{CoordError, CoordResult};
use crate::precession;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equinox an equatorial position is referred to.
pub trait Epoch: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;
}

/// Mean equator and equinox of the observation date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OfDate;

/// Mean equator and equinox of J2000.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct J2000;

impl Epoch for OfDate {
    const NAME: &'static str = "of date";
}

impl Epoch for J2000 {
    const NAME: &'static str = "J2000";
}

/// Right ascension in [0, 2π) and declination in [-π/2, π/2].
///
/// NaN components are kept as NaN so a degenerate pointing sample stays
/// visibly undefined instead of collapsing onto a real position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct EquatorialPosition<E: Epoch> {
    ra: Angle,
    dec: Angle,
    #[cfg_attr(feature = "serde", serde(skip))]
    epoch: PhantomData<E>,
}

impl<E: Epoch> EquatorialPosition<E> {
    /// Wraps `ra` and clamps `dec` into their canonical ranges.
    pub fn new(ra: Angle, dec: Angle) -> Self {
        Self {
            ra: ra.wrapped(),
            dec: dec.clamped_latitude(),
            epoch: PhantomData,
        }
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    /// Like [`new`](Self::new) but rejects non-finite values and |dec| > 90°
    /// instead of clamping. Used for user and catalog input.
    pub fn try_from_degrees(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        if !ra_deg.is_finite() || !dec_deg.is_finite() {
            return Err(CoordError::invalid_coordinate(format!(
                "non-finite position ({ra_deg}, {dec_deg})"
            )));
        }
        if dec_deg.abs() > 90.0 {
            return Err(CoordError::invalid_coordinate(format!(
                "declination {dec_deg}° outside [-90°, 90°]"
            )));
        }
        Ok(Self::from_degrees(ra_deg, dec_deg))
    }

    pub fn from_unit_vector(v: Vector3) -> Self {
        let ra = libm::atan2(v.y, v.x);
        let dec = asin_clamped(v.z);
        Self::new(Angle::from_radians(ra), Angle::from_radians(dec))
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    pub fn epoch_name(&self) -> &'static str {
        E::NAME
    }

    pub fn is_finite(&self) -> bool {
        self.ra.is_finite() && self.dec.is_finite()
    }

    pub fn to_unit_vector(&self) -> Vector3 {
        Vector3::from_spherical(self.ra.radians(), self.dec.radians())
    }

    /// Great-circle separation from another position of the same epoch.
    pub fn separation(&self, other: &Self) -> Angle {
        Angle::from_radians(haversine_separation(
            self.ra.radians(),
            self.dec.radians(),
            other.ra.radians(),
            other.dec.radians(),
        ))
    }
}

impl EquatorialPosition<OfDate> {
    /// Refers this position back to J2000.0.
    pub fn to_j2000(&self, jd: &JulianDate) -> EquatorialPosition<J2000> {
        let m = precession::of_date_to_j2000(jd);
        EquatorialPosition::from_unit_vector(m * self.to_unit_vector())
    }

    /// Altitude and true azimuth seen from `latitude` at sidereal time `lst`.
    pub fn to_horizontal(&self, latitude: Angle, lst: &LST) -> HorizontalPosition<TrueNorth> {
        let h = lst.hour_angle(self.ra);
        let (sin_h, cos_h) = h.sin_cos();
        let (sin_dec, cos_dec) = self.dec.sin_cos();
        let (sin_lat, cos_lat) = latitude.sin_cos();

        let sin_alt = sin_dec * sin_lat + cos_dec * cos_lat * cos_h;
        let alt = asin_clamped(sin_alt);
        let az = libm::atan2(-cos_dec * sin_h, sin_dec * cos_lat - cos_dec * sin_lat * cos_h);

        HorizontalPosition::new(Angle::from_radians(alt), Angle::from_radians(az))
    }
}

impl EquatorialPosition<J2000> {
    /// Carries a J2000.0 position forward to the mean equinox of `jd`.
    pub fn precess_to_date(&self, jd: &JulianDate) -> EquatorialPosition<OfDate> {
        let m = precession::j2000_to_date(jd);
        EquatorialPosition::from_unit_vector(m * self.to_unit_vector())
    }
}

impl<E: Epoch> fmt::Display for EquatorialPosition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {} Dec {} ({})",
            HmsFmt { frac_digits: 0 }.fmt(self.ra),
            DmsFmt { frac_digits: 0 }.fmt(self.dec),
            E::NAME
        )
    }
}
