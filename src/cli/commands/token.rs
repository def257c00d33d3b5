//! Token commands - issue and verify bearer tokens

use crate::cli::output::{colors, format_expiry, print_success};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::TokenResponse;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the issue-token command
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Print only the token
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Arguments for the verify-token command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Token to verify (without the "Bearer " prefix)
    pub token: String,
}

/// Verification result
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub exp: i64,
    pub iat: i64,
}

/// Execute the issue-token command
pub async fn execute_issue(
    args: IssueArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = services.tokens.issue()?;

    match format {
        OutputFormat::Human if args.quiet => println!("{token}"),
        OutputFormat::Human => {
            print_success(&format!(
                "Token issued, valid for {} minutes",
                services.tokens.ttl().num_minutes()
            ));
            println!("{token}");
            println!(
                "\n{}",
                colors::dim(&format!("Use it as: Authorization: Bearer {token}"))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&TokenResponse { token })?);
        }
    }

    Ok(())
}

/// Execute the verify-token command
///
/// Fails with the rejection reason when the token is not valid.
pub async fn execute_verify(
    args: VerifyArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let claims = services.tokens.verify_token(args.token.trim())?;

    match format {
        OutputFormat::Human => {
            let now = chrono::Utc::now().timestamp();
            print_success("Token is valid");
            println!("  {}", colors::dim(&format_expiry(claims.exp, now)));
        }
        OutputFormat::Json => {
            let response = VerifyResponse {
                valid: true,
                exp: claims.exp,
                iat: claims.iat,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
