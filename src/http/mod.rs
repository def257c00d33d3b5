//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides the listing, nearest places, token and index creation
//! endpoints via the Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod routes;

pub use error::PlainError;
pub use handlers::*;
pub use routes::router;
