//! Error types and error handling for the places service.
//!
//! This module defines the error types used throughout the
//! application. HTTP status mapping lives in the `http` adapter.

use thiserror::Error;

/// Result type alias for places operations
pub type Result<T> = std::result::Result<T, PlacesError>;

/// Reasons a bearer token is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("unexpected token format, want 'Authorization: Bearer <token>'")]
    MalformedHeader,

    #[error("token signature rejected: {0}")]
    BadSignature(String),

    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    InvalidToken(String),
}

/// Main error type for the places service
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("{0}")]
    InvalidParam(String),

    #[error("Invalid 'page' value: '{0}'")]
    InvalidPage(i64),

    #[error("Invalid index name '{name}': {reason}")]
    InvalidIndexName { name: String, reason: String },

    #[error("{0}")]
    Unauthorized(#[from] TokenError),

    #[error("Token issue failed: {0}")]
    TokenIssue(String),

    #[error("{0}")]
    Engine(String),

    #[error("Engine request failed: {0}")]
    EngineTransport(#[from] reqwest::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Dataset parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PlacesError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the failure is an authentication refusal
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PlacesError::Unauthorized(_))
    }

    /// Check if the failure is a server-side fault unrelated to request input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            PlacesError::ConfigError(_) | PlacesError::TokenIssue(_)
        )
    }

    /// Check if this error came back from the search engine
    pub fn is_engine(&self) -> bool {
        matches!(
            self,
            PlacesError::Engine(_) | PlacesError::EngineTransport(_)
        )
    }
}
