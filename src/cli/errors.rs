use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown office id: {id}. Available: {available}")]
    UnknownOffice { id: String, available: String },

    #[error("Zoom must be between 1 and {max}, got: {zoom}")]
    InvalidZoom { zoom: u8, max: u8 },

    #[error("Viewport dimensions must be greater than 0, got: {width}x{height}")]
    ZeroViewport { width: u32, height: u32 },
}
