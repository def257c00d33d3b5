//! places - HTTP facade over an Elasticsearch place index
//!
//! Serves paginated place listings (HTML and JSON), nearest-place
//! geo queries behind a JWT bearer check, token issuance, and index
//! provisioning from a local TSV dataset.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - auth (token issuance and verification)
//!   - search (engine adapter), dataset, pagination, geo
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, rendering, router
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{PlacesError, Result, TokenError};
pub use core::search::{ElasticStore, PlaceStore};
pub use core::services::Services;
pub use core::types::*;
