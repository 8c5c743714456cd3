//! I/O layer: the HTTP tile source and the `writers` for PNG/JPEG outputs
//! and metadata sidecars.
pub mod tiles;
pub use tiles::{DEFAULT_TILE_URL, HttpTileFetcher, TileError, TileSource};

pub mod writers;
