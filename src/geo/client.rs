//! HTTP client for the ip-api.com geolocation endpoint
//!
//! Speaks the provider's JSON protocol: one GET per lookup with an explicit
//! field allow-list, a `status` discriminator in the body, and HTTP 200 even
//! for rejected queries.

use crate::geo::{GeoRecord, IpLookup, LookupError};
use crate::utils::truncate_str;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Fields requested from the provider on every lookup. Keeping the list
/// explicit pins the payload shape and keeps responses small.
pub const LOOKUP_FIELDS: &str = "status,message,query,country,countryCode,regionName,region,city,zip,lat,lon,timezone,isp,org,as,mobile,proxy,hosting";

/// Provider `status` value marking a successful lookup
const STATUS_SUCCESS: &str = "success";

/// Maximum characters of upstream error detail kept for logs and replies
const ERROR_DETAIL_MAX_CHARS: usize = 500;

/// Raw response body of the provider.
///
/// Everything is optional: the provider omits fields freely, and `fail`
/// responses carry only `status` and `message`.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    status: Option<String>,
    message: Option<String>,
    query: Option<String>,
    country: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    region: Option<String>,
    city: Option<String>,
    zip: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    as_info: Option<String>,
    #[serde(default)]
    mobile: bool,
    #[serde(default)]
    proxy: bool,
    #[serde(default)]
    hosting: bool,
}

impl From<ProviderResponse> for GeoRecord {
    fn from(raw: ProviderResponse) -> Self {
        Self {
            query_ip: raw.query,
            country: raw.country,
            country_code: raw.country_code,
            region_name: raw.region_name,
            region_code: raw.region,
            city: raw.city,
            postal_code: raw.zip,
            latitude: raw.lat,
            longitude: raw.lon,
            timezone: raw.timezone,
            isp: raw.isp,
            organization: raw.org,
            as_info: raw.as_info,
            is_mobile: raw.mobile,
            // The provider reports proxy and hosting separately; for replies
            // they collapse into one flag.
            is_proxy_or_hosting: raw.proxy || raw.hosting,
        }
    }
}

/// Reqwest-backed lookup client bound to one provider endpoint
pub struct GeoClient {
    http: HttpClient,
    base_url: String,
}

impl GeoClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// The timeout covers the whole request, connect through body read.
    /// This prevents a hung lookup from blocking a chat reply forever.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| HttpClient::new());
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl IpLookup for GeoClient {
    async fn lookup(&self, ip: &str) -> Result<GeoRecord, LookupError> {
        let url = format!("{}/json/{}?fields={}", self.base_url, ip, LOOKUP_FIELDS);

        debug!(ip = ip, "Sending geolocation request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            // Proxies in front of the provider answer errors with HTML pages
            let is_html = error_text.trim_start().starts_with("<!DOCTYPE")
                || error_text.trim_start().starts_with("<html")
                || error_text.trim_start().starts_with("<HTML");

            let detail = if is_html || error_text.is_empty() {
                format!("Provider returned {status}")
            } else {
                format!(
                    "Provider returned {status}: {}",
                    truncate_str(error_text, ERROR_DETAIL_MAX_CHARS)
                )
            };

            return Err(LookupError::NetworkError(detail));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::NetworkError(e.to_string()))?;

        let parsed: ProviderResponse = serde_json::from_str(&body)
            .map_err(|e| LookupError::Unexpected(format!("Malformed provider response: {e}")))?;

        if parsed.status.as_deref() != Some(STATUS_SUCCESS) {
            let message = parsed
                .message
                .unwrap_or_else(|| "Unknown error".to_string());
            debug!(ip = ip, reason = message.as_str(), "Provider rejected lookup");
            return Err(LookupError::Rejected(message));
        }

        Ok(GeoRecord::from(parsed))
    }
}
