//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::identity::{GOOGLE_CLIENT_ID, ProviderConfig};
use super::meta::{DEFAULT_SITE_URL, SiteMeta};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client id for Google Identity Services
    /// Falls back to the built-in client id when unset
    pub google_client_id: Option<String>,

    /// Public origin of the site, used for canonical and Open Graph URLs
    /// Example: https://sikt.no
    pub site_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            google_client_id: non_empty_var("GOOGLE_CLIENT_ID"),
            site_url: non_empty_var("SITE_URL"),
        }
    }

    /// Check if the client id is overridden
    pub fn has_custom_client_id(&self) -> bool {
        self.google_client_id.is_some()
    }

    pub fn client_id(&self) -> &str {
        self.google_client_id.as_deref().unwrap_or(GOOGLE_CLIENT_ID)
    }

    pub fn site_url(&self) -> &str {
        self.site_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(DEFAULT_SITE_URL)
    }

    /// Identity provider options handed to the client
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.client_id())
    }

    pub fn site_meta(&self) -> SiteMeta {
        SiteMeta::new(self.site_url())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Config {
        Config {
            google_client_id: None,
            site_url: None,
        }
    }

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            google_client_id: Some("123-abc.apps.googleusercontent.com".to_string()),
            site_url: Some("https://staging.sikt.no".to_string()),
        };

        assert!(config.has_custom_client_id());
        assert_eq!(config.client_id(), "123-abc.apps.googleusercontent.com");
        assert_eq!(config.site_url(), "https://staging.sikt.no");
    }

    #[test]
    fn test_config_with_no_fields_uses_defaults() {
        let config = empty();

        assert!(!config.has_custom_client_id());
        assert_eq!(config.client_id(), GOOGLE_CLIENT_ID);
        assert_eq!(config.site_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_site_url_trailing_slash_is_trimmed() {
        let config = Config {
            google_client_id: None,
            site_url: Some("https://sikt.no/".to_string()),
        };

        assert_eq!(config.site_url(), "https://sikt.no");
    }

    #[test]
    fn test_provider_config_uses_override() {
        let config = Config {
            google_client_id: Some("override-id".to_string()),
            site_url: None,
        };

        let provider = config.provider_config();
        assert_eq!(provider.client_id, "override-id");
        assert!(!provider.auto_select);
        assert!(provider.cancel_on_tap_outside);
    }

    #[test]
    fn test_provider_config_default_client_id() {
        assert_eq!(empty().provider_config(), ProviderConfig::default());
    }

    #[test]
    fn test_site_meta_follows_site_url() {
        let config = Config {
            google_client_id: None,
            site_url: Some("https://example.no".to_string()),
        };

        assert_eq!(config.site_meta().site_url, "https://example.no");
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; only the accessors are exercised
        let config = Config::from_env();

        assert!(!config.client_id().is_empty());
        assert!(config.site_url().starts_with("http"));
    }

    #[test]
    fn test_config_debug() {
        let config = Config {
            google_client_id: Some("debug-id".to_string()),
            site_url: None,
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("google_client_id"));
        assert!(debug_str.contains("debug-id"));
    }
}
