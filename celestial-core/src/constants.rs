pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Julian Date of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const MILLISECONDS_PER_DAY_F64: f64 = 86_400_000.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const HOURS_PER_DAY: f64 = 24.0;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_PER_RAD: f64 = 206264.8062470963551564734;

#[allow(clippy::excessive_precision)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// WGS84 semi-major axis in kilometers.
pub const WGS84_SEMI_MAJOR_AXIS_KM: f64 = 6378.137;

/// WGS84 first eccentricity squared: e² = (a² - b²) / a².
pub const WGS84_ECCENTRICITY_SQUARED: f64 = 6.6943799901413165e-3;

/// Geomagnetic reference radius in kilometers (mean Earth radius used by the WMM).
pub const GEOMAGNETIC_REFERENCE_RADIUS_KM: f64 = 6371.2;
