//! Content loader - loads page sources from the pages directory

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, PageSource, HOME_SLUG};
use crate::Site;

/// Loads page sources from `source/pages`
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load and validate every page, home page first, then by slug.
    ///
    /// Any invalid page fails the whole load.
    pub fn load_pages(&self) -> Result<Vec<PageSource>> {
        let pages_dir = &self.site.pages_dir;
        if !pages_dir.exists() {
            tracing::warn!("Pages directory not found: {:?}", pages_dir);
            return Ok(Vec::new());
        }

        let mut pages: IndexMap<String, PageSource> = IndexMap::new();

        for entry in WalkDir::new(pages_dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_page_file(path) {
                continue;
            }

            let page = load_page(path).with_context(|| format!("Failed to load {:?}", path))?;
            if pages.contains_key(&page.slug) {
                return Err(ContentError::DuplicateSlug(page.slug).into());
            }
            tracing::debug!(
                "Loaded page '{}' ({} groups)",
                page.slug,
                page.groups.len()
            );
            pages.insert(page.slug.clone(), page);
        }

        if let Some(index) = pages.get_index_of(HOME_SLUG) {
            pages.move_index(index, 0);
        }

        Ok(pages.into_values().collect())
    }
}

/// Load a single page; the slug is the file stem
pub fn load_page(path: &Path) -> Result<PageSource, ContentError> {
    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;
    PageSource::from_yaml(slug, &content)
}

/// Check if a file holds a page source
fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "yml" | "yaml"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn site_with_pages(files: &[(&str, &str)]) -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default(), None).unwrap();
        fs::create_dir_all(&site.pages_dir).unwrap();
        for (name, content) in files {
            fs::write(site.pages_dir.join(name), content).unwrap();
        }
        (dir, site)
    }

    #[test]
    fn test_load_pages_home_first() {
        let (_dir, site) = site_with_pages(&[
            ("about.yml", "heading: About\n"),
            ("index.yml", "heading: Home\n"),
            ("uses.yaml", "heading: Uses\n"),
            ("notes.txt", "ignored"),
        ]);

        let pages = ContentLoader::new(&site).load_pages().unwrap();
        let slugs: Vec<_> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["index", "about", "uses"]);
    }

    #[test]
    fn test_load_pages_missing_dir() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default(), None).unwrap();
        assert!(ContentLoader::new(&site).load_pages().unwrap().is_empty());
    }

    #[test]
    fn test_load_pages_rejects_duplicate_slug() {
        let (_dir, site) = site_with_pages(&[
            ("uses.yml", "heading: Uses\n"),
            ("uses.yaml", "heading: Uses again\n"),
        ]);

        let err = ContentLoader::new(&site).load_pages().unwrap_err();
        assert!(err.to_string().contains("Duplicate page slug 'uses'"));
    }

    #[test]
    fn test_load_pages_fails_on_invalid_page() {
        let (_dir, site) = site_with_pages(&[(
            "uses.yml",
            "heading: Uses\ngroups:\n  - title: Tools\n    items:\n      - title: X\n        href: not a url\n",
        )]);

        let err = ContentLoader::new(&site).load_pages().unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Invalid href 'not a url'"));
    }
}
