//! Built-in page templates using Tera template engine
//!
//! The shell, the simple layout and the section/card primitives are
//! embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded folio templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Values are escaped while building the template data, and some of
        // them (rendered markdown, nested fragments) are already HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("shell.html", include_str!("folio/shell.html")),
            ("page.html", include_str!("folio/page.html")),
            ("sections.html", include_str!("folio/sections.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("folio/partials/head.html"),
            ),
            (
                "partials/analytics.html",
                include_str!("folio/partials/analytics.html"),
            ),
            (
                "partials/section.html",
                include_str!("folio/partials/section.html"),
            ),
            ("partials/card.html", include_str!("folio/partials/card.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context
///
/// String fields hold markup-ready text: escaped plain text or trusted HTML.

#[derive(Debug, Clone, Serialize)]
pub struct ShellData {
    pub language: String,
    pub suppress_hydration_warning: bool,
    pub title: String,
    pub description_tag: Option<String>,
    pub author_tag: Option<String>,
    pub feed_tag: Option<String>,
    pub generator_tag: String,
    pub analytics_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutData {
    pub heading: String,
    pub intro: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    pub id: String,
    pub title: String,
    pub cards: Vec<CardData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub title: String,
    pub href: Option<String>,
    pub body: String,
}
