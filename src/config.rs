//! Configuration and settings management
//!
//! Loads settings from environment variables and defines lookup constants.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    pub telegram_token: String,

    /// Base URL of the geolocation provider
    #[serde(default = "default_geo_api_base_url")]
    pub geo_api_base_url: String,
}

fn default_geo_api_base_url() -> String {
    GEO_API_BASE_URL.to_string()
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ipscout::config::Settings;
    ///
    /// let settings = Settings::new().expect("Failed to load configuration");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default").required(false))
            // Add in the current environment file
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked into git
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of APP)
            .add_source(Environment::with_prefix("APP").separator("__"))
            // Also add settings from environment variables directly (without prefix)
            // Note: Environment::default() auto-converts UPPER_SNAKE_CASE to snake_case
            // ignore_empty treats empty env vars as unset
            .add_source(Environment::default().ignore_empty(true))
            .build()?;

        s.try_deserialize()
    }
}


// Lookup configuration
/// Default geolocation endpoint (the provider's free tier is plain HTTP)
pub const GEO_API_BASE_URL: &str = "http://ip-api.com";
/// Default per-request lookup timeout in seconds
pub const LOOKUP_TIMEOUT_SECS: u64 = 8;

/// Get the lookup timeout from env or default, clamped to 1..=60 seconds.
///
/// Environment variable: `LOOKUP_TIMEOUT_SECS`.
#[must_use]
pub fn get_lookup_timeout_secs() -> u64 {
    std::env::var("LOOKUP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LOOKUP_TIMEOUT_SECS)
        .clamp(1, 60)
}
