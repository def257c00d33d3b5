//! Core data types for the places service.
//!
//! This module defines the records returned by the search engine and
//! the response envelopes shared by the HTTP and CLI adapters.

use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// A place document as stored in the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub location: Location,
}

/// One page of places plus the engine's total hit count
#[derive(Debug, Clone, Default)]
pub struct PlaceHits {
    pub places: Vec<Place>,
    pub total: u64,
}

/// Paginated listing envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData {
    pub name: String,
    pub total: u64,
    pub places: Vec<Place>,
    pub prev: u64,
    pub next: u64,
    pub last: u64,
    pub page: u64,
}

/// Nearest places envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestData {
    pub name: String,
    pub places: Vec<Place>,
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Error body for JSON routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Outcome of creating and filling an index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionReport {
    pub index: String,
    pub documents: usize,
    pub skipped: usize,
}
