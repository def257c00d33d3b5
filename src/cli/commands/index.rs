//! Create-index command - create, bulk load and tune an index

use crate::cli::output::{colors, print_success, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the create-index command
#[derive(Args, Debug)]
pub struct CreateIndexArgs {
    /// Name of the index to create
    #[arg(long, short = 'n')]
    pub name: String,
}

/// Execute the create-index command
pub async fn execute(
    args: CreateIndexArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = services.provision_index(&args.name).await?;

    match format {
        OutputFormat::Human => {
            print_success(&format!("Index '{}' created", report.index));
            println!(
                "  {} documents loaded into {}",
                colors::number(&report.documents.to_string()),
                colors::index(&report.index)
            );
            println!(
                "  max_result_window set to {}",
                colors::number(&services.config.engine.max_result_window.to_string())
            );
            if report.skipped > 0 {
                print_warning(&format!(
                    "{} dataset row(s) skipped, see log for details",
                    report.skipped
                ));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
