//! Point a handheld device at the sky and find out what is there.
//!
//! [`SkyPipeline::solve`] turns one [`OrientationSample`] plus the
//! observer's [`Location`](celestial_core::Location) into a [`SkySolution`]:
//! true altitude and azimuth, J2000 right ascension and declination, their
//! sexagesimal text, the nearest Messier object within the acceptance
//! threshold, and an IRSA cone-search link.
//!
//! ```
//! use celestial_core::Location;
//! use celestial_skyfinder::{OrientationSample, SkyPipeline};
//!
//! let pipeline = SkyPipeline::default();
//! let site = Location::from_degrees(47.38, -122.24, 0.0).unwrap();
//! // Screen facing down: the device looks straight up.
//! let sample = OrientationSample::from_components(&[1.0, 0.0, 0.0, 0.0], 1_733_352_000_000);
//!
//! let solution = pipeline.solve(&sample, &site);
//! assert!((solution.altitude_degrees() - 90.0).abs() < 1e-9);
//! assert!((solution.of_date.dec().degrees() - 47.38).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod links;
pub mod orientation;
pub mod pipeline;
pub mod solution;

pub use config::SkyfinderConfig;
pub use error::{Error, Result};
pub use links::SurveyLink;
pub use orientation::OrientationSample;
pub use pipeline::SkyPipeline;
pub use solution::SkySolution;
