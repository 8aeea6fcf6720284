use std::f64::consts::TAU;
use std::sync::Arc;

use celestial_catalog::query::NearestMatcher;
use celestial_catalog::Catalog;
use celestial_coords::{
    Angle, EquatorialPosition, FixedDeclination, HorizontalPosition, Magnetic, Vector3, J2000,
};
use celestial_core::Location;
use celestial_skyfinder::{OrientationSample, SkyPipeline, SkyfinderConfig};
use celestial_time::{JulianDate, LST};

const J2000_MS: i64 = 946_728_000_000;
const DEC_2024_MS: i64 = 1_733_352_000_000;

fn site() -> Location {
    Location::from_degrees(47.38, -122.24, 0.0).unwrap()
}

fn no_declination_pipeline() -> SkyPipeline {
    SkyPipeline::new(
        NearestMatcher::messier(),
        Arc::new(FixedDeclination(Angle::ZERO)),
    )
}

/// Rotation-vector sample whose forward axis (device -Z) points along `d`.
fn sample_pointing_at(d: Vector3, timestamp_ms: i64) -> OrientationSample {
    // shortest-arc quaternion taking (0, 0, -1) onto d
    let (x, y, z, w) = (d.y, -d.x, 0.0, 1.0 - d.z);
    let norm = (x * x + y * y + z * z + w * w).sqrt();
    OrientationSample::from_components(&[x / norm, y / norm, z / norm, w / norm], timestamp_ms)
}

#[test]
fn zenith_reading_gives_latitude_and_lst() {
    let pipeline = no_declination_pipeline();
    let sample = OrientationSample::from_components(&[1.0, 0.0, 0.0, 0.0], J2000_MS);
    let solution = pipeline.solve(&sample, &site());

    assert!((solution.altitude_degrees() - 90.0).abs() < 1e-9);
    assert!((solution.of_date.dec().degrees() - 47.38).abs() < 1e-9);

    let lst = LST::from_julian_date(&JulianDate::j2000(), site().longitude_angle());
    let diff = (solution.of_date.ra() - lst.angle()).wrapped_signed();
    assert!(diff.degrees().abs() < 1e-9, "ra - lst = {diff}");
    assert!((solution.local_sidereal_time.degrees() - lst.degrees()).abs() < 1e-12);

    // at the J2000 epoch itself precession is the identity
    let ra_shift = (solution.j2000.ra() - solution.of_date.ra()).wrapped_signed();
    assert!(ra_shift.degrees().abs() < 1e-9);
    assert!((solution.j2000.dec() - solution.of_date.dec()).degrees().abs() < 1e-9);
}

#[test]
fn upright_reading_looks_at_north_horizon() {
    let pipeline = no_declination_pipeline();
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let solution = pipeline.solve(&OrientationSample::from_components(&[s, 0.0, 0.0], DEC_2024_MS), &site());

    assert!(solution.altitude_degrees().abs() < 1e-9);
    let az = solution.azimuth_degrees();
    assert!(az < 1e-9 || az > 360.0 - 1e-9, "az {az}");
    assert_eq!(solution.horizontal.cardinal_direction(), "N");

    // looking due north on the horizon: declination is 90° - latitude
    assert!((solution.of_date.dec().degrees() - (90.0 - 47.38)).abs() < 1e-9);
}

#[test]
fn identity_reading_looks_at_nadir() {
    let solution = no_declination_pipeline().solve(
        &OrientationSample::from_components(&[0.0, 0.0, 0.0], DEC_2024_MS),
        &site(),
    );
    assert!((solution.altitude_degrees() + 90.0).abs() < 1e-9);
    assert!(solution.is_valid());
    assert!((solution.of_date.dec().degrees() + 47.38).abs() < 1e-9);
}

#[test]
fn pointing_at_andromeda_finds_andromeda() {
    let catalog = Catalog::messier();
    let m31 = catalog.by_id("m31").unwrap().position();
    let jd = JulianDate::from_unix_millis(DEC_2024_MS);
    let lst = LST::from_julian_date(&jd, site().longitude_angle());

    let horizontal = m31
        .precess_to_date(&jd)
        .to_horizontal(site().latitude_angle(), &lst);
    let sample = sample_pointing_at(horizontal.to_enu(), DEC_2024_MS);

    let solution = no_declination_pipeline().solve(&sample, &site());
    assert!(solution.is_valid());
    assert!(
        solution.j2000.separation(m31).arcseconds() < 1.0,
        "{} vs {}",
        solution.j2000,
        m31
    );
    assert_eq!(solution.nearest.object().map(|o| o.id()), Some("m31"));
    assert_eq!(solution.nearest.label(), "Andromeda Galaxy");
    assert_eq!(solution.ra_text, "00:42:44");
    assert!(solution.dec_text.starts_with("+41:16:0"), "{}", solution.dec_text);

    let link = solution.survey_link.as_ref().unwrap();
    assert!(link.label.starts_with("10.68"), "{}", link.label);
    assert!(link.label.contains(", 41.2"), "{}", link.label);
    let link = link.url.as_str();
    assert!(link.starts_with("https://irsa.ipac.caltech.edu/cgi-bin/Radar/nph-discovery?objstr=10.68"));
    assert!(link.ends_with("%20Equ%20J2000&mode=cone&radius=5&radunits=arcmin"));
}

#[test]
fn magnetic_declination_is_added_to_azimuth() {
    let declination = Angle::from_degrees(15.0);
    let pipeline = SkyPipeline::new(NearestMatcher::messier(), Arc::new(FixedDeclination(declination)));

    let catalog = Catalog::messier();
    let m42 = catalog.by_id("m42").unwrap().position();
    let jd = JulianDate::from_unix_millis(DEC_2024_MS);
    let lst = LST::from_julian_date(&jd, site().longitude_angle());
    let true_hz = m42
        .precess_to_date(&jd)
        .to_horizontal(site().latitude_angle(), &lst);

    let magnetic = HorizontalPosition::<Magnetic>::new(true_hz.altitude(), true_hz.azimuth() - declination);
    let solution = pipeline.solve(&sample_pointing_at(magnetic.to_enu(), DEC_2024_MS), &site());

    let az_err = (solution.horizontal.azimuth() - true_hz.azimuth()).wrapped_signed();
    assert!(az_err.arcseconds().abs() < 1e-3);
    assert!((solution.magnetic_declination.degrees() - 15.0).abs() < 1e-12);
    assert_eq!(solution.nearest.object().map(|o| o.id()), Some("m42"));
}

#[test]
fn outputs_stay_in_canonical_ranges() {
    let pipeline = SkyPipeline::default();
    let values = [-0.9, -0.5, -0.1, 0.0, 0.3, 0.7];
    for &x in &values {
        for &y in &values {
            for &z in &values {
                let sample = OrientationSample::from_components(&[x, y, z], DEC_2024_MS);
                let solution = pipeline.solve(&sample, &site());
                if !solution.is_valid() {
                    continue;
                }
                let alt = solution.altitude_degrees();
                let az = solution.horizontal.azimuth().radians();
                let ra = solution.j2000.ra().radians();
                let dec = solution.j2000.dec().degrees();
                assert!((-90.0..=90.0).contains(&alt), "alt {alt}");
                assert!((0.0..TAU).contains(&az), "az {az}");
                assert!((0.0..TAU).contains(&ra), "ra {ra}");
                assert!((-90.0..=90.0).contains(&dec), "dec {dec}");
                if let Some(sep) = solution.nearest.separation() {
                    assert!(sep.degrees() <= 10.0);
                }
            }
        }
    }
}

#[test]
fn zero_vector_propagates_nan() {
    let pipeline = SkyPipeline::default();
    let sample = OrientationSample::from_components(&[f64::INFINITY, 0.0, 0.0], DEC_2024_MS);
    let solution = pipeline.solve(&sample, &site());

    assert!(solution.altitude_degrees().is_nan());
    assert!(solution.j2000.ra().radians().is_nan());
    assert!(!solution.is_valid());
    assert!(!solution.nearest.is_match());
}

#[test]
fn shared_pipeline_across_threads() {
    let pipeline = SkyPipeline::default();
    let location = site();
    let samples: Vec<OrientationSample> = (0..8)
        .map(|i| {
            let t = i as f64 * 0.1;
            OrientationSample::from_components(&[0.1 + t / 2.0, -0.2, t / 3.0], DEC_2024_MS + i * 60_000)
        })
        .collect();

    let sequential: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| {
            let sol = pipeline.solve(s, &location);
            (sol.j2000.ra().radians(), sol.j2000.dec().radians())
        })
        .collect();

    let (pipeline, location) = (&pipeline, &location);
    std::thread::scope(|scope| {
        let handles: Vec<_> = samples
            .iter()
            .map(|s| scope.spawn(move || pipeline.solve(s, location)))
            .collect();
        for (handle, expected) in handles.into_iter().zip(&sequential) {
            let sol = handle.join().unwrap();
            assert_eq!((sol.j2000.ra().radians(), sol.j2000.dec().radians()), *expected);
        }
    });
}

#[test]
fn solution_serializes_to_json() {
    let pipeline = SkyfinderConfig::default().build_pipeline();
    let sample = OrientationSample::from_components(&[0.2, 0.3, 0.1], DEC_2024_MS);
    let solution = pipeline.solve(&sample, &site());

    let json = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["timestamp_ms"], DEC_2024_MS);
    assert_eq!(json["ra_text"], solution.ra_text.as_str());
    assert!(json["nearest"]["kind"].is_string());
    let link = solution.survey_link.as_ref().unwrap();
    assert_eq!(json["survey_link"]["label"], link.label.as_str());
    assert_eq!(json["survey_link"]["url"], link.url.as_str());

    // text JSON parses back to the exact radians
    let text = serde_json::to_string(&solution).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["j2000"]["ra"].as_f64(), Some(solution.j2000.ra().radians()));
    assert_eq!(json["j2000"]["dec"].as_f64(), Some(solution.j2000.dec().radians()));

    let text = solution.to_string();
    assert!(text.contains("RA/Dec (J2000): "));
    assert!(text.contains(&solution.dec_text));
}

#[test]
fn cached_declination_matches_model() {
    let mut config = SkyfinderConfig::default();
    let direct = config.build_pipeline();
    config.declination.mode = celestial_skyfinder::config::DeclinationMode::Cached;
    config.declination.bucket_deg = 0.001;
    let cached = config.build_pipeline();

    let sample = OrientationSample::from_components(&[0.3, 0.1, -0.2], DEC_2024_MS);
    let a = direct.solve(&sample, &site());
    let b = cached.solve(&sample, &site());
    let diff = (a.magnetic_declination - b.magnetic_declination).degrees();
    assert!(diff.abs() < 0.01, "{diff}");
    assert!(a.magnetic_declination.degrees() > 10.0 && a.magnetic_declination.degrees() < 20.0);
}

#[test]
fn formatting_zero() {
    let origin = EquatorialPosition::<J2000>::from_degrees(0.0, 0.0);
    let hms = celestial_core::angle::HmsFmt::default();
    let dms = celestial_core::angle::DmsFmt::default();
    assert_eq!(hms.fmt(origin.ra()), "00:00:00");
    assert_eq!(dms.fmt(origin.dec()), "+00:00:00");
}
