use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Time(#[from] celestial_time::TimeError),

    #[error(transparent)]
    Coord(#[from] celestial_coords::CoordError),

    #[error(transparent)]
    Core(#[from] celestial_core::AstroError),
}

impl Error {
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
