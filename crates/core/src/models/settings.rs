use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko caps `/coins/markets` at 250 rows per page.
pub const MAX_PER_PAGE: u32 = 250;

/// Runtime configuration. Every field has a default, so an empty TOML file
/// (or no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Market-data API root, without a trailing slash.
    pub base_url: String,

    /// Quote currency for prices and charts (e.g., "usd", "eur").
    pub vs_currency: String,

    /// Size of the single listing page every view works from.
    pub per_page: u32,

    /// How long a cached response is served before it is fetched again.
    pub cache_ttl_secs: u64,

    /// HTTP request timeout (native targets only).
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            vs_currency: "usd".to_string(),
            per_page: 100,
            cache_ttl_secs: 60,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CoreError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a TOML settings file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.base_url.trim().is_empty() {
            return Err(CoreError::Config("base_url must not be empty".into()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(CoreError::Config(format!(
                "base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }
        if self.vs_currency.trim().is_empty() {
            return Err(CoreError::Config("vs_currency must not be empty".into()));
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(CoreError::Config(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.per_page
            )));
        }
        if self.cache_ttl_secs == 0 {
            return Err(CoreError::Config("cache_ttl_secs must be greater than 0".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::Config(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    /// `base_url` without trailing slashes, ready for path concatenation.
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
