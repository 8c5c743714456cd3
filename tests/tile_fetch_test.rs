use std::time::Duration;

use httpmock::prelude::*;
use image::{Rgb, RgbImage};
use tilegen::{HttpTileFetcher, TileCoord, TileError, TileSource};

fn tile_png(color: Rgb<u8>) -> Vec<u8> {
    let img = RgbImage::from_pixel(256, 256, color);
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();
    bytes
}

#[test]
fn fetches_and_decodes_a_tile() {
    let server = MockServer::start();
    let color = Rgb([90, 140, 210]);

    let tile_mock = server.mock(|when, then| {
        when.method(GET).path("/16/38416/38467.png");
        then.status(200)
            .header("content-type", "image/png")
            .body(tile_png(color));
    });

    let fetcher = HttpTileFetcher::with_options(server.base_url(), Duration::ZERO).unwrap();
    let tile = fetcher
        .fetch(TileCoord {
            x: 38416,
            y: 38467,
            z: 16,
        })
        .unwrap();

    tile_mock.assert();
    assert_eq!(tile.dimensions(), (256, 256));
    assert_eq!(tile.get_pixel(128, 128), &color);
}

#[test]
fn non_success_status_is_an_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/9/0/0.png");
        then.status(404);
    });

    let fetcher = HttpTileFetcher::with_options(server.base_url(), Duration::ZERO).unwrap();
    let result = fetcher.fetch(TileCoord { x: 0, y: 0, z: 9 });

    assert!(matches!(result, Err(TileError::Http(_))));
}

#[test]
fn corrupt_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/9/1/1.png");
        then.status(200).body("definitely not a png");
    });

    let fetcher = HttpTileFetcher::with_options(server.base_url(), Duration::ZERO).unwrap();
    let result = fetcher.fetch(TileCoord { x: 1, y: 1, z: 9 });

    assert!(matches!(result, Err(TileError::Decode(_))));
}
