//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::app::{DEFAULT_SITE_NAME, SiteMeta};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public URL of the site, used for the canonical link
    /// Example: https://serenityspa.example
    pub site_url: Option<String>,

    /// Display name used in the page title
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SITE_URL").ok(),
            std::env::var("SITE_NAME").ok(),
        )
    }

    fn from_vars(site_url: Option<String>, site_name: Option<String>) -> Self {
        Self {
            site_url: site_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            site_name: site_name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
        }
    }

    /// Check if a canonical URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Page metadata handed to the HTML shell
    pub fn site_meta(&self) -> SiteMeta {
        SiteMeta {
            name: self.site_name.clone(),
            canonical_url: self.site_url.as_ref().map(|url| format!("{}/", url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_without_vars() {
        let config = Config::from_vars(None, None);

        assert!(!config.has_site_url());
        assert_eq!(config.site_name, "Serenity Spa");
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = Config::from_vars(Some("https://spa.example/".to_string()), None);

        assert_eq!(config.site_url.as_deref(), Some("https://spa.example"));
        assert_eq!(
            config.site_meta().canonical_url.as_deref(),
            Some("https://spa.example/")
        );
    }

    #[test]
    fn test_config_blank_values_fall_back() {
        let config = Config::from_vars(Some("  ".to_string()), Some("".to_string()));

        assert!(!config.has_site_url());
        assert_eq!(config.site_name, DEFAULT_SITE_NAME);
    }

    #[test]
    fn test_site_meta_carries_name() {
        let config = Config::from_vars(None, Some("Lakeside Spa".to_string()));

        let meta = config.site_meta();
        assert_eq!(meta.name, "Lakeside Spa");
        assert!(meta.canonical_url.is_none());
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        assert!(!config.site_name.is_empty());
    }
}
