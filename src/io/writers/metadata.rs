//! JSON metadata sidecars written next to each generated image. They carry
//! the OSM attribution the tile usage policy requires, plus render provenance.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::offices::Office;
use crate::core::params::RenderParams;
use crate::error::Result;
use crate::types::{MapStyle, MarkerStyle};

pub const ATTRIBUTION: &str = "© OpenStreetMap contributors";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapMetadata {
    pub office_id: String,
    pub office_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
    pub style: MapStyle,
    pub marker: MarkerStyle,
    pub attribution: String,
    pub generated_at: DateTime<Utc>,
}

impl MapMetadata {
    pub fn for_render(office: &Office, params: &RenderParams) -> Self {
        Self {
            office_id: office.id.to_string(),
            office_name: office.name.to_string(),
            latitude: office.lat,
            longitude: office.lng,
            zoom: params.zoom,
            width: params.width,
            height: params.height,
            style: params.style,
            marker: params.marker,
            attribution: ATTRIBUTION.to_string(),
            generated_at: Utc::now(),
        }
    }
}

/// Write `meta` as pretty JSON next to `output`, swapping the extension for
/// `.json`. Returns the sidecar path.
pub fn create_metadata_sidecar(output: &Path, meta: &MapMetadata) -> Result<PathBuf> {
    let sidecar = output.with_extension("json");
    let json = serde_json::to_string_pretty(meta)?;
    fs::write(&sidecar, json)?;
    info!("Metadata sidecar written: {:?}", sidecar);
    Ok(sidecar)
}
