//! Config command - show current configuration

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::config::DEFAULT_JWT_SECRET;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response, secret redacted
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub listen: String,
    pub engine_url: String,
    pub index: String,
    pub max_result_window: u64,
    pub request_timeout_sec: u64,
    pub token_ttl_minutes: u64,
    pub default_secret: bool,
    pub template: String,
    pub schema: String,
    pub dataset: String,
    pub list_page_size: u64,
    pub nearest_size: u64,
}

impl ConfigResponse {
    /// Build the redacted view of the running configuration
    pub fn from_services(services: &Services) -> Self {
        let config = &services.config;
        Self {
            config_file: XdgDirs::new().config_file().display().to_string(),
            listen: format!("{}:{}", config.server.host, config.server.port),
            engine_url: config.engine.url.clone(),
            index: config.engine.index.clone(),
            max_result_window: config.engine.max_result_window,
            request_timeout_sec: config.engine.request_timeout_sec,
            token_ttl_minutes: config.auth.token_ttl_minutes,
            default_secret: config.auth.secret == DEFAULT_JWT_SECRET,
            template: config.paths.template.display().to_string(),
            schema: config.paths.schema.display().to_string(),
            dataset: config.paths.dataset.display().to_string(),
            list_page_size: config.pagination.list_page_size,
            nearest_size: config.pagination.nearest_size,
        }
    }
}

/// Execute the show-config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse::from_services(services);

    match format {
        OutputFormat::Human => {
            print_header("Configuration");
            println!("  Config file:   {}", colors::dim(&response.config_file));
            println!("  Listen:        {}", response.listen);
            println!("  Engine:        {}", response.engine_url);
            println!("  Index:         {}", colors::index(&response.index));
            println!(
                "  Result window: {}",
                colors::number(&response.max_result_window.to_string())
            );
            println!("  Timeout:       {}s", response.request_timeout_sec);
            println!("  Token TTL:     {} min", response.token_ttl_minutes);
            if response.default_secret {
                println!("  Secret:        {}", colors::warning("built-in default"));
            } else {
                println!("  Secret:        {}", colors::dim("configured"));
            }
            println!("  Template:      {}", response.template);
            println!("  Schema:        {}", response.schema);
            println!("  Dataset:       {}", response.dataset);
            println!(
                "  Page sizes:    list={} nearest={}",
                response.list_page_size, response.nearest_size
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
