//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::defaults;
use crate::Site;

const CONFIG_TEMPLATE: &str = r#"# Folio Configuration

# Site
title: Clifford Anang - Full Stack Engineer, and builder.
title_template: "%s - Clifford Anang"
author: Clifford Anang
# :years is replaced with the years since career_start_year
description: I’m Clifford, a Full Stack Engineer with :years years of experience. I enjoy building both front-end and backend applications.
language: en
career_start_year: 2020

# URL (the SITE_URL environment variable takes precedence)
url: http://localhost:4000
root: /
feed_path: feed.xml

# Directory
source_dir: source
public_dir: public
pages_dir: pages
static_dir: static

# Document shell
suppress_hydration_warning: true
analytics:
  google_id: G-7J4D8TZ2J0
"#;

/// Initialize a new site in the given directory. Existing files are kept.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    write_if_missing(&target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;

    let site = Site::new(target_dir)?;
    fs::create_dir_all(&site.pages_dir)?;
    fs::create_dir_all(&site.static_dir)?;

    for page in defaults::starter_pages() {
        let path = site.pages_dir.join(format!("{}.yml", page.slug));
        write_if_missing(&path, &serde_yaml::to_string(&page)?)?;
    }

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("Skipping existing file: {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created: {:?}", path);
    Ok(())
}
