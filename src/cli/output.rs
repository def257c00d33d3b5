//! Terminal rendering for CLI commands.
//!
//! `colored` drops styling when NO_COLOR is set or stdout is not a
//! terminal, so the helpers below never check for it themselves.

use crate::core::types::{Location, Place};

/// Palette shared by every command
pub mod colors {
    use colored::{ColoredString, Colorize};

    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    pub fn index(s: &str) -> ColoredString {
        s.cyan()
    }

    pub fn place(s: &str) -> ColoredString {
        s.bright_blue().bold()
    }

    /// Counts, page numbers and limits
    pub fn number(s: &str) -> ColoredString {
        s.bright_yellow()
    }

    pub fn success(s: &str) -> ColoredString {
        s.bright_green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow().bold()
    }

    pub fn error(s: &str) -> ColoredString {
        s.bright_red().bold()
    }

    /// Secondary detail lines
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    pub fn rank(s: &str) -> ColoredString {
        s.magenta().bold()
    }
}

/// Format a coordinate pair as `lat, lon` with 5 decimals
pub fn format_location(location: &Location) -> String {
    format!("{:.5}, {:.5}", location.lat, location.lon)
}

/// Format seconds until a timestamp, e.g. "expires in 29m"
pub fn format_expiry(exp: i64, now: i64) -> String {
    let remaining = exp - now;
    if remaining < 0 {
        return format!("expired {}m ago", (-remaining) / 60);
    }
    if remaining >= 3600 {
        format!("expires in {}h {}m", remaining / 3600, (remaining % 3600) / 60)
    } else if remaining >= 60 {
        format!("expires in {}m", remaining / 60)
    } else {
        format!("expires in {remaining}s")
    }
}

/// Print places as a ranked list
pub fn print_places(places: &[Place], first_rank: u64) {
    for (i, place) in places.iter().enumerate() {
        println!(
            "[{}] {}",
            colors::rank(&(first_rank + i as u64).to_string()),
            colors::place(&place.name)
        );
        println!("    {}", place.address);
        if !place.phone.is_empty() {
            println!("    {}", colors::dim(&place.phone));
        }
        println!("    {}", colors::dim(&format_location(&place.location)));
    }
}

/// Print `data` as pretty JSON
pub fn print_output<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("cannot encode output: {e}")),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", colors::success("ok"), message);
}

/// Warnings go to stderr so JSON on stdout stays parseable
pub fn print_warning(message: &str) {
    eprintln!("{} {}", colors::warning("warning:"), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", colors::error("error:"), message);
}

pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
    println!("{}", colors::dim(&"-".repeat(title.chars().count().min(60))));
}
