use clap::Parser;
use std::path::PathBuf;

use tilegen::types::OutputFormat;
use tilegen::{MapStyle, MarkerStyle};

#[derive(Parser)]
#[command(name = "tilegen", version, about = "TILEGEN CLI")]
pub struct CliArgs {
    /// Render a single office by id (e.g. dbn); default renders all offices
    #[arg(long)]
    pub office: Option<String>,

    /// Output directory for generated images
    #[arg(short = 'o', long, default_value = "public/images/maps")]
    pub output_dir: PathBuf,

    /// Output format (png or jpeg)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Map styling (grayscale or color)
    #[arg(long, value_enum, default_value_t = MapStyle::Grayscale)]
    pub style: MapStyle,

    /// Marker drawn at the office location (dot or pin)
    #[arg(long, value_enum, default_value_t = MarkerStyle::Dot)]
    pub marker: MarkerStyle,

    /// Tile zoom level
    #[arg(long, default_value_t = 16)]
    pub zoom: u8,

    /// Output image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Double the output resolution (1600x1200 for the default viewport)
    #[arg(long, default_value_t = false)]
    pub hires: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
