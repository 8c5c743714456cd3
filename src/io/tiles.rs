//! HTTP tile source: fetches map tiles from a slippy-map tile server.
use std::time::Duration;

use image::RgbImage;
use thiserror::Error;
use tracing::debug;

use crate::core::geo::TileCoord;

/// Base URL of the public OSM tile layer.
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org";

/// User-Agent sent with every tile request, as the tile usage policy asks.
pub const USER_AGENT: &str = concat!(
    "tilegen/",
    env!("CARGO_PKG_VERSION"),
    " (static map generation)"
);

/// Per-request timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between tile requests to stay polite to the public tile servers.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum TileError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tile decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Source of map tiles. The compositing pipeline only sees this trait, so it
/// can run against an in-memory source in tests.
pub trait TileSource {
    fn fetch(&self, tile: TileCoord) -> Result<RgbImage, TileError>;
}

/// Tile source backed by an HTTP tile server.
pub struct HttpTileFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
    delay: Duration,
}

impl HttpTileFetcher {
    /// Fetcher for the default OSM tile layer with the default politeness delay.
    pub fn new() -> crate::Result<Self> {
        Self::with_options(DEFAULT_TILE_URL, DEFAULT_FETCH_DELAY)
    }

    /// Fetcher for an arbitrary tile server base URL and inter-request delay.
    pub fn with_options(base_url: impl Into<String>, delay: Duration) -> crate::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(TileError::from)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            delay,
        })
    }

    fn tile_url(&self, tile: TileCoord) -> String {
        format!("{}/{}/{}/{}.png", self.base_url, tile.z, tile.x, tile.y)
    }
}

impl TileSource for HttpTileFetcher {
    fn fetch(&self, tile: TileCoord) -> Result<RgbImage, TileError> {
        let url = self.tile_url(tile);
        debug!("Fetching tile {}", url);

        let response = self.client.get(&url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        let image = image::load_from_memory(&bytes)?.to_rgb8();

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_url_follows_zxy_layout() {
        let fetcher = HttpTileFetcher::with_options("http://127.0.0.1:1", Duration::ZERO).unwrap();
        let tile = TileCoord {
            x: 38416,
            y: 38467,
            z: 16,
        };
        assert_eq!(
            fetcher.tile_url(tile),
            "http://127.0.0.1:1/16/38416/38467.png"
        );
    }
}
