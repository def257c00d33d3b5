//! `places` command-line adapter.
//!
//! Each subcommand builds the same [`Services`](crate::core::services::Services)
//! the HTTP server uses and calls into it directly, so provisioning and
//! token checks behave identically from a shell. Nothing here depends
//! on `http/`.

pub mod commands;
pub mod output;

use crate::core::config::Config;
use crate::core::services::Services;
use clap::{Parser, Subcommand};
use std::sync::Arc;

/// places - Elasticsearch place index tooling
///
/// Provision the place index, page through it, query nearest places
/// and manage bearer tokens from the command line.
#[derive(Parser, Debug)]
#[command(name = "places")]
#[command(version)]
#[command(about = "Place index and token tooling", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Result format: human or json
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored text for terminals
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Subcommands, named after the HTTP route they mirror where there is one
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an index, bulk load the dataset and raise its result window
    #[command(name = "create-index")]
    CreateIndex(commands::CreateIndexArgs),

    /// Show one page of places
    #[command(name = "list-places")]
    ListPlaces(commands::ListArgs),

    /// Show the places closest to a coordinate
    #[command(name = "nearest-places")]
    NearestPlaces(commands::NearestArgs),

    /// Issue a bearer token
    #[command(name = "issue-token")]
    IssueToken(commands::token::IssueArgs),

    /// Verify a bearer token
    #[command(name = "verify-token")]
    VerifyToken(commands::token::VerifyArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Print a shell completion script
    ///
    /// Redirect the script to your shell's completion directory, e.g.
    ///
    ///   bash:  places completions bash > ~/.local/share/bash-completion/completions/places
    ///   zsh:   places completions zsh > ~/.zfunc/_places
    ///   fish:  places completions fish > ~/.config/fish/completions/places.fish
    Completions(commands::CompletionsArgs),
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = cli.format;
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    let services = Arc::new(Services::new(Config::load()?)?);

    match command {
        Commands::CreateIndex(args) => {
            commands::index::execute(args, &services, format).await
        }
        Commands::ListPlaces(args) => commands::list::execute(args, &services, format).await,
        Commands::NearestPlaces(args) => {
            commands::nearest::execute(args, &services, format).await
        }
        Commands::IssueToken(args) => {
            commands::token::execute_issue(args, &services, format).await
        }
        Commands::VerifyToken(args) => {
            commands::token::execute_verify(args, &services, format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, format).await,
        Commands::Completions(_) => Ok(()),
    }
}
