#![doc = r#"
TILEGEN — a static map image generator for office locations.

This crate turns a fixed table of office coordinates into styled map images:
it fetches OpenStreetMap tiles around each office, composites them into a
canvas, crops the canvas so the office sits at the image center, applies a
grayscale style with a slight contrast boost, overlays a location marker, and
writes PNG (or JPEG preview) assets plus a JSON attribution sidecar. It powers
the TILEGEN CLI and can be embedded in your own Rust applications.

It is a one-shot build-time asset generator, not a running service: a single
sequential pipeline with no caching and no retries. A tile that fails to
download is replaced with a gray placeholder; an office that fails to render
is logged and skipped so the remaining offices still generate.

Add dependency
--------------
```toml
[dependencies]
tilegen = "0.1"
```

Quick start: render every office to a directory
-----------------------------------------------
```rust,no_run
use std::path::Path;
use tilegen::{
    generate_office_maps, HttpTileFetcher, RenderParams, OFFICES,
};

fn main() -> tilegen::Result<()> {
    let fetcher = HttpTileFetcher::new()?;
    let report = generate_office_maps(
        &fetcher,
        OFFICES,
        Path::new("public/images/maps"),
        &RenderParams::default(),
        true, // continue_on_error
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Render one map in memory
------------------------
```rust,no_run
use tilegen::{
    render_map, HttpTileFetcher, MapStyle, MarkerStyle, OutputFormat, RenderParams,
};

fn main() -> tilegen::Result<()> {
    let fetcher = HttpTileFetcher::new()?;
    let params = RenderParams {
        format: OutputFormat::Png,
        style: MapStyle::Color,
        marker: MarkerStyle::Pin,
        zoom: 16,
        width: 1600,
        height: 1200,
    };

    let img = render_map(&fetcher, -29.8579, 31.0292, &params)?;
    // `img` is an image::RgbImage ready for further processing.
    let _ = img.dimensions();
    Ok(())
}
```

Error handling
--------------
All public functions return `tilegen::Result<T>`; match on `tilegen::Error`
to handle specific cases, e.g. tile fetcher construction or validation.

```rust,no_run
use tilegen::{Error, HttpTileFetcher};

fn main() {
    match HttpTileFetcher::new() {
        Ok(_fetcher) => {}
        Err(Error::Tile(e)) => eprintln!("tile client error: {e}"),
        Err(other) => eprintln!("other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `OutputFormat`, `MapStyle`, `MarkerStyle`).
- [`core`] — coordinate arithmetic, office table, and the compositing pipeline.
- [`io`] — tile fetching and PNG/JPEG/metadata writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::RenderParams;
pub use error::{Error, Result};
pub use types::{MapStyle, MarkerStyle, OutputFormat};

// Geometry and office table
pub use core::geo::{MAX_MERCATOR_LAT, MAX_ZOOM, TILE_SIZE, TileCoord, lat_lng_to_tile, tile_to_lat_lng};
pub use core::offices::{OFFICES, Office, find_office};

// Tile source
pub use io::tiles::{DEFAULT_TILE_URL, HttpTileFetcher, TileError, TileSource};

// Selected writer helpers (keep metadata sidecar helpers public)
pub use io::writers::metadata::{ATTRIBUTION, MapMetadata, create_metadata_sidecar};

// High-level API re-exports
pub use api::{
    BatchReport, generate_office_maps, output_file_name, render_map, render_office_map,
    render_office_to_path,
};
