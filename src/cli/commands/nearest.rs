//! Nearest command - show the places closest to a coordinate

use crate::cli::output::{colors, format_location, print_output, print_places};
use crate::cli::OutputFormat;
use crate::core::geo::check_origin;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the nearest-places command
#[derive(Args, Debug)]
pub struct NearestArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
}

/// Execute the nearest-places command
pub async fn execute(
    args: NearestArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let origin = check_origin(args.lat, args.lon)?;
    let data = services.nearest(origin).await?;

    match format {
        OutputFormat::Human => {
            if data.places.is_empty() {
                println!(
                    "No places found near {}",
                    colors::label(&format_location(&origin))
                );
            } else {
                println!(
                    "{} place(s) nearest to {}:\n",
                    colors::number(&data.places.len().to_string()),
                    colors::label(&format_location(&origin))
                );
                print_places(&data.places, 1);
            }
        }
        OutputFormat::Json => print_output(&data),
    }

    Ok(())
}
