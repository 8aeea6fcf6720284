//! The orientation-to-sky pipeline.
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | decode | [`OrientationSample`] | ENU unit vector |
//! | horizontal | ENU vector | magnetic altitude/azimuth |
//! | declination | magnetic azimuth, site, date | true azimuth |
//! | sidereal clock | timestamp, longitude | LST |
//! | equatorial | altitude/azimuth, latitude, LST | RA/Dec of date |
//! | precession | RA/Dec of date | RA/Dec J2000 |
//! | catalog | RA/Dec J2000 | nearest object or no match |
//! | format | RA/Dec J2000 | `HH:MM:SS`, `±DD:MM:SS`, survey link |

use std::sync::Arc;

use celestial_catalog::query::NearestMatcher;
use celestial_coords::{DeclinationModel, HorizontalPosition, Magnetic, WorldMagneticModel};
use celestial_core::angle::{DmsFmt, HmsFmt};
use celestial_core::Location;
use celestial_time::{JulianDate, LST};
use tracing::debug;

use crate::links::SurveyLink;
use crate::orientation::OrientationSample;
use crate::solution::SkySolution;

/// Stateless solver shared across threads.
///
/// Holds only read-only collaborators, so one instance can serve any number
/// of concurrent [`solve`](Self::solve) calls.
#[derive(Clone)]
pub struct SkyPipeline {
    matcher: NearestMatcher,
    declination: Arc<dyn DeclinationModel>,
    hms: HmsFmt,
    dms: DmsFmt,
}

impl SkyPipeline {
    pub fn new(matcher: NearestMatcher, declination: Arc<dyn DeclinationModel>) -> Self {
        Self {
            matcher,
            declination,
            hms: HmsFmt::default(),
            dms: DmsFmt::default(),
        }
    }

    pub fn matcher(&self) -> &NearestMatcher {
        &self.matcher
    }

    pub fn solve(&self, sample: &OrientationSample, location: &Location) -> SkySolution {
        let timestamp_ms = sample.timestamp_ms();
        let span = tracing::debug_span!("solve", timestamp_ms);
        let _guard = span.enter();

        let forward = sample.forward_enu();
        debug!(e = forward.x, n = forward.y, u = forward.z, "decoded pointing");

        let magnetic = HorizontalPosition::<Magnetic>::from_enu(&forward);

        let jd = JulianDate::from_unix_millis(timestamp_ms);
        let declination = self.declination.declination(location, &jd);
        let horizontal = magnetic.to_true_north(declination);
        debug!(
            alt_deg = horizontal.altitude().degrees(),
            az_deg = horizontal.azimuth().degrees(),
            decl_deg = declination.degrees(),
            "horizontal"
        );

        let lst = LST::from_julian_date(&jd, location.longitude_angle());
        let of_date = horizontal.to_equatorial(location.latitude_angle(), &lst);
        let j2000 = of_date.to_j2000(&jd);
        debug!(
            lst_h = lst.hours(),
            ra_deg = j2000.ra().degrees(),
            dec_deg = j2000.dec().degrees(),
            "equatorial J2000"
        );

        let nearest = self.matcher.find(&j2000);
        debug!(nearest = nearest.label(), "catalog");

        SkySolution {
            timestamp_ms,
            julian_date: jd,
            horizontal,
            magnetic_declination: declination,
            local_sidereal_time: lst.angle(),
            of_date,
            ra_text: self.hms.fmt(j2000.ra()),
            dec_text: self.dms.fmt(j2000.dec()),
            survey_link: SurveyLink::irsa(&j2000),
            j2000,
            nearest,
        }
    }
}

impl Default for SkyPipeline {
    /// Messier catalog, 10° threshold, WMM2020 declination.
    fn default() -> Self {
        Self::new(NearestMatcher::messier(), Arc::new(WorldMagneticModel::wmm2020()))
    }
}

impl std::fmt::Debug for SkyPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkyPipeline")
            .field("catalog_len", &self.matcher.catalog().len())
            .field("threshold_deg", &self.matcher.threshold().degrees())
            .finish_non_exhaustive()
    }
}
