//! Shared types and enums used across TILEGEN.
//! Includes `OutputFormat`, `MapStyle`, and `MarkerStyle`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
pub enum OutputFormat {
    Png,
    Jpeg, // Lossy, preview only
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "Png"),
            OutputFormat::Jpeg => write!(f, "Jpeg"),
        }
    }
}

impl OutputFormat {
    /// File extension used for outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
pub enum MapStyle {
    /// Desaturated with a slight contrast boost
    Grayscale,
    /// Tiles left as served
    Color,
}

impl std::fmt::Display for MapStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapStyle::Grayscale => write!(f, "Grayscale"),
            MapStyle::Color => write!(f, "Color"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
pub enum MarkerStyle {
    /// Concentric circle marker with a drop shadow
    Dot,
    /// Teardrop pin anchored at the location
    Pin,
}

impl std::fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerStyle::Dot => write!(f, "Dot"),
            MarkerStyle::Pin => write!(f, "Pin"),
        }
    }
}
