//! folio-rs: a static generator for a personal portfolio site
//!
//! Pages are YAML files of titled content groups. Each page is rendered
//! through embedded Tera templates (section and card primitives inside a
//! simple layout) and wrapped in a document shell carrying the head
//! metadata, the alternate feed link and the analytics tag.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site being built
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory
    pub source_dir: PathBuf,
    /// Page sources
    pub pages_dir: PathBuf,
    /// Files copied verbatim to the public directory
    pub static_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Canonical base URL, without trailing slash
    pub site_url: String,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` and `SITE_URL`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let site_url = std::env::var(config::SITE_URL_ENV).ok();
        Self::with_config(base_dir, config, site_url)
    }

    /// Create a site from an already loaded configuration.
    /// `site_url` overrides the configured `url` when non-empty; whichever
    /// wins must be an absolute http(s) URL.
    pub fn with_config<P: AsRef<Path>>(
        base_dir: P,
        config: config::SiteConfig,
        site_url: Option<String>,
    ) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_dir = base_dir.join(&config.source_dir);
        let pages_dir = source_dir.join(&config.pages_dir);
        let static_dir = source_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let site_url = config::resolve_site_url(&config.url, site_url.as_deref())?;

        Ok(Self {
            config,
            base_dir,
            source_dir,
            pages_dir,
            static_dir,
            public_dir,
            site_url,
        })
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new page
    pub fn new_page(&self, title: &str, slug: Option<&str>) -> Result<()> {
        commands::new::run(self, title, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_site_paths() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), config::SiteConfig::default(), None).unwrap();

        assert_eq!(site.pages_dir, dir.path().join("source").join("pages"));
        assert_eq!(site.static_dir, dir.path().join("source").join("static"));
        assert_eq!(site.public_dir, dir.path().join("public"));
        assert_eq!(site.site_url, "http://localhost:4000");
    }

    #[test]
    fn test_site_url_override() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(
            dir.path(),
            config::SiteConfig::default(),
            Some("https://clifford.dev/".to_string()),
        )
        .unwrap();
        assert_eq!(site.site_url, "https://clifford.dev");
    }

    #[test]
    fn test_malformed_site_url_override_fails() {
        let dir = TempDir::new().unwrap();
        let err = Site::with_config(
            dir.path(),
            config::SiteConfig::default(),
            Some("not a url".to_string()),
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<config::ConfigError>(),
            Some(&config::ConfigError::InvalidSiteUrl {
                url: "not a url".to_string(),
                origin: config::SITE_URL_ENV,
            })
        );
    }

    #[test]
    fn test_malformed_config_url_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "url: clifford.dev\n").unwrap();

        let config = config::SiteConfig::load(dir.path().join("_config.yml")).unwrap();
        let err = Site::with_config(dir.path(), config, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<config::ConfigError>(),
            Some(config::ConfigError::InvalidSiteUrl { url, .. }) if url == "clifford.dev"
        ));
    }

    #[test]
    fn test_new_reads_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("_config.yml"),
            "title: My Folio\npublic_dir: dist\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "My Folio");
        assert_eq!(site.public_dir, dir.path().join("dist"));
    }
}
