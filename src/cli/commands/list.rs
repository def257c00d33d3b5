//! List command - show one page of places

use crate::cli::output::{colors, print_header, print_output, print_places};
use crate::cli::OutputFormat;
use crate::core::pagination::offset;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the list-places command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, short = 'p', default_value = "1")]
    pub page: u64,
}

/// Execute the list-places command
pub async fn execute(
    args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.page == 0 {
        return Err("Page numbers start at 1.".into());
    }

    let data = services.list_page(args.page).await?;

    match format {
        OutputFormat::Human => {
            print_header(&format!(
                "{} - page {} of {} ({} total)",
                data.name,
                colors::number(&data.page.to_string()),
                colors::number(&data.last.to_string()),
                colors::number(&data.total.to_string())
            ));
            println!();
            let limit = services.config.pagination.list_page_size;
            print_places(&data.places, offset(data.page, limit) + 1);
        }
        OutputFormat::Json => print_output(&data),
    }

    Ok(())
}
