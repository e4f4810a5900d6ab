//! Page sources and page metadata

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ContentError, ContentGroup};

/// Slug of the page written to the public root
pub const HOME_SLUG: &str = "index";

/// One page: metadata overrides, layout heading and intro, content groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSource {
    /// Taken from the file name, never from the file body
    #[serde(skip)]
    pub slug: String,

    /// Page title fed into the site title template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Overrides the site description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Heading of the simple layout
    #[serde(default)]
    pub heading: String,

    /// Intro paragraph under the heading
    #[serde(default)]
    pub intro: String,

    #[serde(default)]
    pub groups: Vec<ContentGroup>,
}

impl PageSource {
    /// Parse a page from YAML and validate it
    pub fn from_yaml(slug: &str, content: &str) -> Result<Self, ContentError> {
        let mut page: PageSource =
            serde_yaml::from_str(content).map_err(|source| ContentError::Parse {
                page: slug.to_string(),
                source,
            })?;
        page.slug = slug.to_string();
        page.validate()?;
        Ok(page)
    }

    pub fn is_home(&self) -> bool {
        self.slug == HOME_SLUG
    }

    /// Output file relative to the public directory
    pub fn output_path(&self) -> PathBuf {
        if self.is_home() {
            PathBuf::from("index.html")
        } else {
            PathBuf::from(&self.slug).join("index.html")
        }
    }

    /// URL path relative to the site root
    pub fn path(&self) -> String {
        if self.is_home() {
            String::new()
        } else {
            format!("{}/", self.slug)
        }
    }

    /// Check the slug and every group
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slug.is_empty() || slug::slugify(&self.slug) != self.slug {
            return Err(ContentError::InvalidSlug(self.slug.clone()));
        }

        for (i, group) in self.groups.iter().enumerate() {
            group.validate(&self.slug, i)?;
        }

        Ok(())
    }
}

/// Descriptive record attached to a rendered document's head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub title_template: Option<String>,
    /// Used when the page has no title of its own
    pub default_title: String,
    pub description: String,
    pub alternate_feed_url: Option<String>,
}

impl PageMetadata {
    /// Title for the `<title>` element
    pub fn document_title(&self) -> String {
        match (&self.title, &self.title_template) {
            (Some(title), Some(template)) => template.replace("%s", title),
            (Some(title), None) => title.clone(),
            (None, _) => self.default_title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(title: Option<&str>, template: Option<&str>) -> PageMetadata {
        PageMetadata {
            title: title.map(String::from),
            title_template: template.map(String::from),
            default_title: "Clifford Anang - Full Stack Engineer, and builder.".to_string(),
            description: String::new(),
            alternate_feed_url: None,
        }
    }

    #[test]
    fn test_document_title_applies_template() {
        let meta = metadata(Some("Uses"), Some("%s - Clifford Anang"));
        assert_eq!(meta.document_title(), "Uses - Clifford Anang");
    }

    #[test]
    fn test_document_title_without_template() {
        assert_eq!(metadata(Some("Uses"), None).document_title(), "Uses");
    }

    #[test]
    fn test_document_title_falls_back_to_default() {
        let meta = metadata(None, Some("%s - Clifford Anang"));
        assert_eq!(
            meta.document_title(),
            "Clifford Anang - Full Stack Engineer, and builder."
        );
    }

    #[test]
    fn test_page_paths() {
        let home = PageSource::from_yaml("index", "heading: Hi\n").unwrap();
        assert!(home.is_home());
        assert_eq!(home.output_path(), PathBuf::from("index.html"));
        assert_eq!(home.path(), "");

        let uses = PageSource::from_yaml("uses", "heading: Uses\n").unwrap();
        assert_eq!(uses.output_path(), PathBuf::from("uses").join("index.html"));
        assert_eq!(uses.path(), "uses/");
    }

    #[test]
    fn test_from_yaml_rejects_bad_slug() {
        let err = PageSource::from_yaml("My Page", "heading: Hi\n").unwrap_err();
        assert!(matches!(err, ContentError::InvalidSlug(_)));
    }

    #[test]
    fn test_from_yaml_reports_parse_errors() {
        let err = PageSource::from_yaml("uses", "groups: 12\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse page 'uses'"));
    }

    #[test]
    fn test_from_yaml_validates_groups() {
        let yaml = r#"
heading: Uses
groups:
  - title: ""
"#;
        let err = PageSource::from_yaml("uses", yaml).unwrap_err();
        assert!(matches!(err, ContentError::EmptyGroupTitle { .. }));
    }
}
