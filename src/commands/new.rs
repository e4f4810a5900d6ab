//! Create a new page

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::{ContentGroup, ContentItem, PageSource};
use crate::Site;

/// Create `source/pages/<slug>.yml` with a starter group
pub fn create_page(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let slug = slug::slugify(slug.unwrap_or(title));
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a page slug from {:?}", title);
    }

    let page = PageSource {
        slug: slug.clone(),
        title: Some(title.to_string()),
        description: None,
        heading: title.to_string(),
        intro: String::new(),
        groups: vec![ContentGroup::new(
            "Section",
            vec![ContentItem::new("Item", "Describe the item here.")],
        )],
    };
    page.validate()?;

    fs::create_dir_all(&site.pages_dir)?;
    let file_path = site.pages_dir.join(format!("{}.yml", slug));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, serde_yaml::to_string(&page)?)?;

    Ok(file_path)
}

/// Run the new command
pub fn run(site: &Site, title: &str, slug: Option<&str>) -> Result<()> {
    let path = create_page(site, title, slug)?;
    println!("Created: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::loader::load_page;
    use tempfile::TempDir;

    #[test]
    fn test_create_page() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default(), None).unwrap();

        let path = create_page(&site, "Reading List", None).unwrap();
        assert_eq!(path, site.pages_dir.join("reading-list.yml"));

        let page = load_page(&path).unwrap();
        assert_eq!(page.slug, "reading-list");
        assert_eq!(page.title.as_deref(), Some("Reading List"));
        assert_eq!(page.groups.len(), 1);
    }

    #[test]
    fn test_create_page_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default(), None).unwrap();

        create_page(&site, "Uses", None).unwrap();
        let err = create_page(&site, "Something else", Some("uses")).unwrap_err();
        assert!(err.to_string().contains("File already exists"));
    }

    #[test]
    fn test_create_page_rejects_empty_slug() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default(), None).unwrap();
        assert!(create_page(&site, "!!!", None).is_err());
    }
}
