//! Page shell: document structure, head metadata and the analytics tag

use anyhow::Result;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::PageMetadata;
use crate::helpers::{feed_tag, html_escape, meta_generator, meta_tag};
use crate::templates::{ShellData, TemplateRenderer};

/// Document-level settings shared by every page
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub language: String,
    pub author: String,
    pub suppress_hydration_warning: bool,
    pub analytics_id: Option<String>,
}

impl ShellOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            language: config.language.clone(),
            author: config.author.clone(),
            suppress_hydration_warning: config.suppress_hydration_warning,
            analytics_id: config
                .analytics
                .google_id
                .as_ref()
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
        }
    }
}

/// Wraps rendered page content in the full document
pub struct PageShell<'a> {
    renderer: &'a TemplateRenderer,
    options: ShellOptions,
}

impl<'a> PageShell<'a> {
    pub fn new(renderer: &'a TemplateRenderer, options: ShellOptions) -> Self {
        Self { renderer, options }
    }

    /// Render the document around `children`, which must already be markup
    pub fn render(&self, children: &str, metadata: &PageMetadata) -> Result<String> {
        let title = metadata.document_title();
        let shell = ShellData {
            language: html_escape(&self.options.language),
            suppress_hydration_warning: self.options.suppress_hydration_warning,
            feed_tag: metadata
                .alternate_feed_url
                .as_deref()
                .map(|url| feed_tag(url, &title)),
            title: html_escape(&title),
            description_tag: meta_tag("description", &metadata.description),
            author_tag: meta_tag("author", &self.options.author),
            generator_tag: meta_generator(),
            analytics_id: self.options.analytics_id.as_deref().map(html_escape),
        };

        let mut context = Context::new();
        context.insert("shell", &shell);
        context.insert("children", children);
        self.renderer.render("shell.html", &context)
    }
}
