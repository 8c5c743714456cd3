//! High-level, ergonomic library API: render maps to in-memory buffers or
//! files, and batch helpers for the office table. Prefer these entrypoints
//! over the low-level processing modules when embedding TILEGEN.
use std::fs;
use std::path::Path;

use image::RgbImage;
use tracing::{info, warn};

use crate::core::geo::{self, MAX_MERCATOR_LAT, MAX_ZOOM};
use crate::core::offices::Office;
use crate::core::params::RenderParams;
use crate::core::processing::marker::draw_marker;
use crate::core::processing::mosaic::{compose_mosaic, crop_to_viewport};
use crate::core::processing::save::save_rendered_map;
use crate::core::processing::style::apply_grayscale_style;
use crate::error::{Error, Result};
use crate::io::tiles::TileSource;
use crate::io::writers::metadata::{MapMetadata, create_metadata_sidecar};
use crate::types::MapStyle;

/// Render a styled map image centered on the given coordinates (no disk I/O).
pub fn render_map(
    source: &dyn TileSource,
    lat: f64,
    lng: f64,
    params: &RenderParams,
) -> Result<RgbImage> {
    if params.width == 0 || params.height == 0 {
        return Err(Error::ZeroViewport {
            width: params.width,
            height: params.height,
        });
    }
    if params.zoom == 0 || params.zoom > MAX_ZOOM {
        return Err(Error::InvalidArgument {
            arg: "zoom",
            value: params.zoom.to_string(),
        });
    }
    if lat.abs() > MAX_MERCATOR_LAT {
        return Err(Error::LatitudeOutOfRange {
            lat,
            max: MAX_MERCATOR_LAT,
        });
    }

    let (center_x, center_y) = geo::lat_lng_to_tile(lat, lng, params.zoom);
    let canvas = compose_mosaic(
        source,
        center_x,
        center_y,
        params.zoom,
        params.width,
        params.height,
    );
    let (offset_x, offset_y) = geo::pixel_offset(center_x, center_y);
    let mut img = crop_to_viewport(&canvas, params.width, params.height, offset_x, offset_y);

    if params.style == MapStyle::Grayscale {
        img = apply_grayscale_style(&img);
    }
    draw_marker(&mut img, params.marker);

    Ok(img)
}

/// Render the map for a single office (no disk I/O).
pub fn render_office_map(
    source: &dyn TileSource,
    office: &Office,
    params: &RenderParams,
) -> Result<RgbImage> {
    render_map(source, office.lat, office.lng, params)
}

/// Render one office's map to `output` and write its metadata sidecar.
pub fn render_office_to_path(
    source: &dyn TileSource,
    office: &Office,
    params: &RenderParams,
    output: &Path,
) -> Result<()> {
    let img = render_office_map(source, office, params)?;
    save_rendered_map(&img, output, params.format)?;

    let meta = MapMetadata::for_render(office, params);
    create_metadata_sidecar(output, &meta)?;
    Ok(())
}

/// Output file name for an office in the given format.
pub fn output_file_name(office: &Office, format: crate::types::OutputFormat) -> String {
    format!("{}.{}", office.id, format.extension())
}

/// Batch generation report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Render maps for all `offices` into `output_dir`.
///
/// Offices outside the Web Mercator latitude range are skipped with a
/// warning. If `continue_on_error` is true, render failures are counted in
/// the report and generation continues; otherwise, the first error is
/// returned.
pub fn generate_office_maps(
    source: &dyn TileSource,
    offices: &[Office],
    output_dir: &Path,
    params: &RenderParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for office in offices {
        info!("Processing {}...", office.name);

        if office.lat.abs() > MAX_MERCATOR_LAT {
            warn!(
                "Skipping {}: latitude {} outside the Web Mercator range",
                office.id, office.lat
            );
            report.skipped += 1;
            continue;
        }

        let output_path = output_dir.join(output_file_name(office, params.format));
        match render_office_to_path(source, office, params, &output_path) {
            Ok(()) => {
                info!("Saved: {:?}", output_path);
                report.processed += 1;
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {}: {}", office.name, e);
            }
        }
    }

    Ok(report)
}
