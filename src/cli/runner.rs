use tracing::info;

use tilegen::api::generate_office_maps;
use tilegen::core::geo::MAX_ZOOM;
use tilegen::core::offices::{OFFICES, Office, find_office};
use tilegen::io::HttpTileFetcher;
use tilegen::RenderParams;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.zoom == 0 || args.zoom > MAX_ZOOM {
        return Err(AppError::InvalidZoom {
            zoom: args.zoom,
            max: MAX_ZOOM,
        }
        .into());
    }
    if args.width == 0 || args.height == 0 {
        return Err(AppError::ZeroViewport {
            width: args.width,
            height: args.height,
        }
        .into());
    }

    let offices: Vec<Office> = match &args.office {
        Some(id) => {
            let office = find_office(id).ok_or_else(|| AppError::UnknownOffice {
                id: id.clone(),
                available: OFFICES
                    .iter()
                    .map(|office| office.id)
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
            vec![office]
        }
        None => OFFICES.to_vec(),
    };

    let (width, height) = if args.hires {
        (args.width * 2, args.height * 2)
    } else {
        (args.width, args.height)
    };

    let params = RenderParams {
        format: args.format,
        style: args.style,
        marker: args.marker,
        zoom: args.zoom,
        width,
        height,
    };

    let fetcher = HttpTileFetcher::new()?;

    info!("Generating {} map image(s)", offices.len());
    info!("Output directory: {:?}", args.output_dir);
    info!("Viewport: {}x{} at zoom {}", width, height, params.zoom);

    let report = generate_office_maps(&fetcher, &offices, &args.output_dir, &params, true)?;

    info!("Map generation complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    Ok(())
}
