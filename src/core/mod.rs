//! Core domain logic (protocol-agnostic)
//!
//! This module contains all logic that is independent of the
//! transport (HTTP or CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Places and response envelopes
//! - **xdg**: XDG config directory handling
//! - **auth**: Bearer token issuance and verification
//! - **dataset**: TSV dataset reading and bulk body rendering
//! - **pagination**: Page parsing and envelope arithmetic
//! - **geo**: Reference coordinate parsing
//! - **search**: Engine adapter (`PlaceStore`, `ElasticStore`)
//! - **services**: Unified service container

pub mod auth;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod pagination;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{PlacesError, Result, TokenError};
pub use services::Services;
