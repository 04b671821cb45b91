//! IP geolocation lookup
//!
//! Provides the lookup interface, the structured record a successful lookup
//! produces, and the failure taxonomy the formatter renders from.

/// HTTP client for the ip-api.com endpoint
pub mod client;

pub use client::GeoClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a geolocation lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider answered but declined the query (private range,
    /// reserved address, quota). Carries the provider's message verbatim.
    #[error("Lookup rejected: {0}")]
    Rejected(String),
    /// The request never completed: timeout, connection failure, or a
    /// non-success HTTP status
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Malformed or unexpectedly shaped provider response
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Structured result of a successful geolocation lookup.
///
/// Every field the provider may omit is optional; the formatter substitutes
/// a placeholder for absent values, so consumers never fail on absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoRecord {
    /// The address the provider resolved (echo of the query)
    pub query_ip: Option<String>,
    /// Country name
    pub country: Option<String>,
    /// Two-letter country code
    pub country_code: Option<String>,
    /// Region or state name
    pub region_name: Option<String>,
    /// Short region code
    pub region_code: Option<String>,
    /// City name
    pub city: Option<String>,
    /// ZIP or postal code
    pub postal_code: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// Internet service provider name
    pub isp: Option<String>,
    /// Organization name
    pub organization: Option<String>,
    /// Autonomous system number and name
    pub as_info: Option<String>,
    /// Whether the provider flagged the address as a mobile network
    pub is_mobile: bool,
    /// Whether the provider flagged the address as a proxy or a hosting
    /// range (either flag counts)
    pub is_proxy_or_hosting: bool,
}

/// Interface to an IP geolocation provider
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait IpLookup: Send + Sync {
    /// Look up geolocation details for a single IP address.
    ///
    /// One network attempt per call; there is no retry policy here. The
    /// caller decides what a failure means for the conversation.
    async fn lookup(&self, ip: &str) -> Result<GeoRecord, LookupError>;
}
