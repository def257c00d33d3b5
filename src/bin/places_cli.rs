//! places CLI - command-line interface for the place index
//!
//! Talks to the same engine and token service as the HTTP server.
//! Use this for provisioning, scripting, or manual checks.
//!
//! # Examples
//!
//! ```bash
//! # Create and load an index
//! places create-index --name places
//!
//! # Browse the listing
//! places list-places --page 3
//!
//! # Nearest places to a coordinate
//! places nearest-places --lat 55.75 --lon 37.62
//!
//! # Issue and check a token
//! places issue-token --quiet
//! places verify-token <token>
//! ```

use clap::Parser;
use places::cli::output::print_error;
use places::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
