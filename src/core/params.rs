use serde::{Deserialize, Serialize};

use crate::types::{MapStyle, MarkerStyle, OutputFormat};

/// Render parameters suitable for presets and embedding callers
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RenderParams {
    pub format: OutputFormat,
    pub style: MapStyle,
    pub marker: MarkerStyle,
    /// Tile zoom level
    pub zoom: u8,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            style: MapStyle::Grayscale,
            marker: MarkerStyle::Dot,
            zoom: 16,
            width: 800,
            height: 600,
        }
    }
}
