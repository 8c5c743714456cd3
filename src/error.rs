//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, tile fetch, and image errors, and provides semantic
//! variants for argument validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tile fetch error: {0}")]
    Tile(#[from] crate::io::TileError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Metadata serialization error: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Viewport dimensions must be greater than 0, got: {width}x{height}")]
    ZeroViewport { width: u32, height: u32 },

    #[error("Latitude {lat} is outside the Web Mercator range (+/-{max})")]
    LatitudeOutOfRange { lat: f64, max: f64 },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
