use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::png::write_rgb_png;
use crate::types::OutputFormat;

/// Write a rendered map to disk in the requested format.
pub fn save_rendered_map(img: &RgbImage, output: &Path, format: OutputFormat) -> Result<()> {
    let (width, height) = img.dimensions();
    match format {
        OutputFormat::Png => {
            write_rgb_png(output, width, height, img.as_raw())?;
            info!("save_rendered_map: PNG saved to {:?}", output);
        }
        OutputFormat::Jpeg => {
            write_rgb_jpeg(output, width as usize, height as usize, img.as_raw())
                .map_err(Error::external)?;
            info!("save_rendered_map: JPEG saved to {:?}", output);
        }
    }
    Ok(())
}
