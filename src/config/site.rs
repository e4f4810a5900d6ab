//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::ConfigError;
use crate::helpers::is_valid_site_url;

/// Environment variable that overrides the configured `url`
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    /// Document title used when a page declares none
    pub title: String,
    /// Title template; `%s` is replaced with the page title
    pub title_template: Option<String>,
    /// Rendered as the `author` meta tag; empty omits it
    pub author: String,
    /// Site description; `:years` is replaced with the years of experience
    pub description: String,
    pub language: String,
    pub career_start_year: i32,

    // URL
    pub url: String,
    pub root: String,
    pub feed_path: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub pages_dir: String,
    pub static_dir: String,

    // Document shell
    pub suppress_hydration_warning: bool,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            title_template: None,
            author: "John Doe".to_string(),
            description: String::new(),
            language: "en".to_string(),
            career_start_year: 2020,

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),
            feed_path: "feed.xml".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            pages_dir: "pages".to_string(),
            static_dir: "static".to_string(),

            suppress_hydration_warning: true,
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Pick the canonical base URL: a non-empty override wins over the configured value.
/// Trailing slashes are dropped so paths can be appended with a single `/`.
pub fn resolve_site_url(
    configured: &str,
    env_override: Option<&str>,
) -> Result<String, ConfigError> {
    let (url, origin) = match env_override.map(str::trim) {
        Some(value) if !value.is_empty() => (value, SITE_URL_ENV),
        _ => (configured.trim(), "url in _config.yml"),
    };
    let url = url.trim_end_matches('/');

    if !is_valid_site_url(url) {
        return Err(ConfigError::InvalidSiteUrl {
            url: url.to_string(),
            origin,
        });
    }
    Ok(url.to_string())
}

/// Analytics tag configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Google Analytics measurement id (e.g. `G-XXXXXXX`)
    pub google_id: Option<String>,
}
