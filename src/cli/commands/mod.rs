//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod index;
pub mod list;
pub mod nearest;
pub mod token;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use index::CreateIndexArgs;
pub use list::ListArgs;
pub use nearest::NearestArgs;
