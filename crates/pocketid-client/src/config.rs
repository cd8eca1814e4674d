//! Upstream endpoint configuration.
//!
//! Loaded once at process start and shared read-only across all requests.
//! The API key is redacted in Debug output.

/// Environment variable holding the Pocket ID base URL.
pub const URL_ENV_VAR: &str = "POCKETID_URL";

/// Environment variable holding the Pocket ID API key.
pub const API_KEY_ENV_VAR: &str = "POCKETID_API_KEY";

/// Immutable endpoint configuration for one Pocket ID instance.
///
/// `base_url` never carries a trailing slash. Presence of both values is
/// enforced by the availability gate on first use, not here, so a
/// misconfigured process fails with a descriptive error on its first call.
#[derive(Clone)]
pub struct PocketIdConfig {
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for PocketIdConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PocketIdConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl PocketIdConfig {
    /// Create a configuration with the given values.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Load the configuration from `POCKETID_URL` and `POCKETID_API_KEY`.
    ///
    /// Missing variables yield empty fields rather than an error; the
    /// availability gate reports which one is absent on first use.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(URL_ENV_VAR).unwrap_or_default(),
            std::env::var(API_KEY_ENV_VAR).unwrap_or_default(),
        )
    }

    /// Get the base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}
