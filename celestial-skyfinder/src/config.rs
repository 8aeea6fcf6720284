//! TOML configuration for the `skyfinder` tool.
//!
//! ```toml
//! [site]
//! latitude_deg = 47.38
//! longitude_deg = -122.24
//! altitude_m = 0.0
//!
//! [matching]
//! threshold_deg = 10.0
//!
//! [declination]
//! mode = "model"      # "model" | "cached" | "fixed"
//! fixed_deg = 0.0
//! bucket_deg = 0.5
//!
//! [logging]
//! filter = "warn"
//! ```
//!
//! Every section and key is optional.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use celestial_catalog::query::{NearestMatcher, DEFAULT_THRESHOLD_DEG};
use celestial_catalog::Catalog;
use celestial_coords::{
    Angle, BucketedDeclination, DeclinationModel, FixedDeclination, WorldMagneticModel,
};
use celestial_core::Location;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::pipeline::SkyPipeline;

const APP_DIR: &str = "celestial-skyfinder";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            latitude_deg: 47.38,
            longitude_deg: -122.24,
            altitude_m: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub threshold_deg: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold_deg: DEFAULT_THRESHOLD_DEG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclinationMode {
    /// Evaluate WMM2020 for every sample.
    #[default]
    Model,
    /// WMM2020 behind a per-bucket cache.
    Cached,
    /// A constant declination.
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclinationConfig {
    pub mode: DeclinationMode,
    pub fixed_deg: f64,
    pub bucket_deg: f64,
}

impl Default for DeclinationConfig {
    fn default() -> Self {
        Self {
            mode: DeclinationMode::Model,
            fixed_deg: 0.0,
            bucket_deg: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyfinderConfig {
    pub site: SiteConfig,
    pub matching: MatchingConfig,
    pub declination: DeclinationConfig,
    pub logging: LoggingConfig,
}

impl SkyfinderConfig {
    /// `<config_dir>/celestial-skyfinder/config.toml`, if the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads `path` if given (it must exist), otherwise the default path if
    /// present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&text, &path)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::parse(e.to_string()))
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: String| Error::Config {
            path: path.to_path_buf(),
            message,
        };

        let threshold = self.matching.threshold_deg;
        if !(threshold.is_finite() && threshold > 0.0 && threshold <= 180.0) {
            return Err(invalid(format!(
                "matching.threshold_deg must be in (0, 180], got {threshold}"
            )));
        }
        if !self.declination.fixed_deg.is_finite() {
            return Err(invalid("declination.fixed_deg must be finite".to_string()));
        }
        let bucket = self.declination.bucket_deg;
        if !(bucket.is_finite() && bucket > 0.0) {
            return Err(invalid(format!(
                "declination.bucket_deg must be positive, got {bucket}"
            )));
        }
        Ok(())
    }

    pub fn to_location(&self) -> Result<Location> {
        Ok(Location::from_degrees(
            self.site.latitude_deg,
            self.site.longitude_deg,
            self.site.altitude_m,
        )?)
    }

    pub fn declination_model(&self) -> Arc<dyn DeclinationModel> {
        let d = &self.declination;
        match d.mode {
            DeclinationMode::Model => Arc::new(WorldMagneticModel::wmm2020()),
            DeclinationMode::Cached => Arc::new(BucketedDeclination::new(
                WorldMagneticModel::wmm2020(),
                d.bucket_deg,
            )),
            DeclinationMode::Fixed => Arc::new(FixedDeclination(Angle::from_degrees(d.fixed_deg))),
        }
    }

    pub fn build_pipeline(&self) -> SkyPipeline {
        let matcher = NearestMatcher::new(
            Catalog::messier(),
            Angle::from_degrees(self.matching.threshold_deg),
        );
        SkyPipeline::new(matcher, self.declination_model())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_time::JulianDate;

    #[test]
    fn test_defaults() {
        let config = SkyfinderConfig::default();
        assert_eq!(config.site.latitude_deg, 47.38);
        assert_eq!(config.matching.threshold_deg, 10.0);
        assert_eq!(config.declination.mode, DeclinationMode::Model);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_partial_file() {
        let text = r#"
            [site]
            latitude_deg = -33.87

            [declination]
            mode = "fixed"
            fixed_deg = 12.5
        "#;
        let config = SkyfinderConfig::from_toml_str(text, Path::new("test.toml")).unwrap();
        assert_eq!(config.site.latitude_deg, -33.87);
        assert_eq!(config.site.longitude_deg, -122.24);
        assert_eq!(config.declination.mode, DeclinationMode::Fixed);
        assert_eq!(config.matching, MatchingConfig::default());

        let location = config.to_location().unwrap();
        let decl = config
            .declination_model()
            .declination(&location, &JulianDate::j2000());
        assert!((decl.degrees() - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SkyfinderConfig::default();
        config.declination.mode = DeclinationMode::Cached;
        config.logging.filter = "celestial_skyfinder=debug".to_string();

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("mode = \"cached\""), "{text}");
        let back = SkyfinderConfig::from_toml_str(&text, Path::new("rt.toml")).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let path = Path::new("bad.toml");
        assert!(matches!(
            SkyfinderConfig::from_toml_str("[matching]\nthreshold_deg = 0.0", path),
            Err(Error::Config { .. })
        ));
        assert!(SkyfinderConfig::from_toml_str("[declination]\nmode = \"magic\"", path).is_err());
        assert!(SkyfinderConfig::from_toml_str("[declination]\nbucket_deg = -1.0", path).is_err());
        assert!(SkyfinderConfig::from_toml_str("site = 3", path).is_err());
    }

    #[test]
    fn test_bad_site_is_reported() {
        let mut config = SkyfinderConfig::default();
        config.site.latitude_deg = 95.0;
        assert!(matches!(config.to_location(), Err(Error::Core(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let result = SkyfinderConfig::load(Some(Path::new("/nonexistent/skyfinder.toml")));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_pipeline_uses_threshold() {
        let mut config = SkyfinderConfig::default();
        config.matching.threshold_deg = 2.5;
        let pipeline = config.build_pipeline();
        assert!((pipeline.matcher().threshold().degrees() - 2.5).abs() < 1e-12);
    }
}
