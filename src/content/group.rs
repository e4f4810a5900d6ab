//! Content groups and items

use serde::{Deserialize, Serialize};

use super::ContentError;
use crate::helpers::is_valid_href;

/// How a card body is turned into markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    /// Plain text, HTML-escaped
    #[default]
    Text,
    /// Markdown rendered to HTML
    Markdown,
}

impl BodyFormat {
    fn is_text(&self) -> bool {
        *self == BodyFormat::Text
    }
}

/// A single card: title, optional link, body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default)]
    pub body: String,

    #[serde(default, skip_serializing_if = "BodyFormat::is_text")]
    pub format: BodyFormat,
}

impl ContentItem {
    /// Create a plain-text item without a link
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: None,
            body: body.into(),
            format: BodyFormat::Text,
        }
    }

    /// Attach a link to the card title
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Render the body as markdown
    pub fn markdown(mut self) -> Self {
        self.format = BodyFormat::Markdown;
        self
    }
}

/// A titled, ordered collection of items rendered as one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentGroup {
    pub title: String,

    /// Disabled groups stay in the source but are not rendered
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub items: Vec<ContentItem>,
}

fn default_enabled() -> bool {
    true
}

impl ContentGroup {
    /// Create an enabled group
    pub fn new(title: impl Into<String>, items: Vec<ContentItem>) -> Self {
        Self {
            title: title.into(),
            enabled: true,
            items,
        }
    }

    /// Keep the group in the source without rendering it
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Check the group invariants. `page` and `index` only label errors.
    pub fn validate(&self, page: &str, index: usize) -> Result<(), ContentError> {
        if self.title.trim().is_empty() {
            return Err(ContentError::EmptyGroupTitle {
                page: page.to_string(),
                index,
            });
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.title.trim().is_empty() {
                return Err(ContentError::EmptyItemTitle {
                    page: page.to_string(),
                    group: self.title.clone(),
                    index: i,
                });
            }

            if let Some(href) = &item.href {
                if !is_valid_href(href) {
                    return Err(ContentError::InvalidHref {
                        page: page.to_string(),
                        item: item.title.clone(),
                        href: href.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Groups that should be rendered, in declaration order
pub fn enabled_groups(groups: &[ContentGroup]) -> impl Iterator<Item = &ContentGroup> {
    groups.iter().filter(|g| g.enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_group_defaults() {
        let yaml = r#"
title: Design
items:
  - title: Figma
    body: Best tool for interface design.
  - title: Site
    href: https://example.com
    body: "**bold**"
    format: markdown
"#;
        let group: ContentGroup = serde_yaml::from_str(yaml).unwrap();
        assert!(group.enabled);
        assert_eq!(group.items.len(), 2);
        assert_eq!(group.items[0].href, None);
        assert_eq!(group.items[0].format, BodyFormat::Text);
        assert_eq!(group.items[1].href.as_deref(), Some("https://example.com"));
        assert_eq!(group.items[1].format, BodyFormat::Markdown);
    }

    #[test]
    fn test_parse_disabled_group() {
        let group: ContentGroup =
            serde_yaml::from_str("title: Workstation\nenabled: false\n").unwrap();
        assert!(!group.enabled);
        assert!(group.items.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let group = ContentGroup::new("  ", vec![]);
        let err = group.validate("uses", 2).unwrap_err();
        assert!(matches!(err, ContentError::EmptyGroupTitle { index: 2, .. }));
    }

    #[test]
    fn test_validate_rejects_empty_item_title() {
        let group = ContentGroup::new("Design", vec![ContentItem::new("", "body")]);
        let err = group.validate("uses", 0).unwrap_err();
        assert!(err.to_string().contains("Item title must not be empty"));
    }

    #[test]
    fn test_validate_rejects_bad_href() {
        let group = ContentGroup::new(
            "Design",
            vec![ContentItem::new("Figma", "body").with_href("figma dot com")],
        );
        let err = group.validate("uses", 0).unwrap_err();
        assert!(matches!(err, ContentError::InvalidHref { .. }));
        assert!(err.to_string().contains("figma dot com"));
    }

    #[test]
    fn test_validate_accepts_missing_href() {
        let group = ContentGroup::new(
            "Design",
            vec![
                ContentItem::new("Figma", "body"),
                ContentItem::new("Site", "body").with_href("/uses/"),
            ],
        );
        assert!(group.validate("uses", 0).is_ok());
    }

    #[test]
    fn test_enabled_groups_keeps_order() {
        let groups = vec![
            ContentGroup::new("A", vec![]),
            ContentGroup::new("B", vec![]).disabled(),
            ContentGroup::new("C", vec![]),
        ];
        let titles: Vec<_> = enabled_groups(&groups).map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }
}
