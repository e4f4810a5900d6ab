//! Generator module - renders page sources to static HTML files

mod sections;
mod shell;

pub use sections::{render_sections, section_data};
pub use shell::{PageShell, ShellOptions};

use anyhow::{Context as _, Result};
use chrono::{Datelike, Local};
use std::fs;
use tera::Context;
use walkdir::WalkDir;

use crate::content::{MarkdownRenderer, PageMetadata, PageSource};
use crate::helpers::{full_url_for, html_escape, interpolate_years, years_of_experience};
use crate::templates::{LayoutData, TemplateRenderer};
use crate::Site;

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::new(),
        })
    }

    /// Generate the entire site against the local clock
    pub fn generate(&self, pages: &[PageSource]) -> Result<usize> {
        self.generate_at(pages, &Local::now().date_naive())
    }

    /// Generate the entire site as of `today`. Returns the number of pages written.
    pub fn generate_at<D: Datelike>(&self, pages: &[PageSource], today: &D) -> Result<usize> {
        // Render everything before touching the public directory
        let mut rendered = Vec::with_capacity(pages.len());
        for page in pages {
            rendered.push((page, self.render_page(page, today)?));
        }

        fs::create_dir_all(&self.site.public_dir)?;

        let copied = self.copy_static_assets()?;
        if copied > 0 {
            tracing::info!("Copied {} static files", copied);
        }

        for (page, html) in &rendered {
            let output_path = self.site.public_dir.join(page.output_path());
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create dir {:?}", parent))?;
            }
            fs::write(&output_path, html)
                .with_context(|| format!("Failed to write {:?}", output_path))?;
            tracing::debug!("Generated page: {:?}", output_path);
        }

        Ok(rendered.len())
    }

    /// Render one page: sections, then the simple layout, then the shell
    pub fn render_page<D: Datelike>(&self, page: &PageSource, today: &D) -> Result<String> {
        let sections = render_sections(&self.renderer, &self.markdown, &page.groups)?;

        let layout = LayoutData {
            heading: html_escape(&page.heading),
            intro: html_escape(&page.intro),
        };
        let mut context = Context::new();
        context.insert("layout", &layout);
        context.insert("sections", &sections);
        let children = self.renderer.render("page.html", &context)?;

        let shell = PageShell::new(&self.renderer, ShellOptions::from_config(&self.site.config));
        shell.render(&children, &self.page_metadata(page, today))
    }

    /// Resolve the head metadata of a page. The years of experience are
    /// recomputed from `today` on every call.
    pub fn page_metadata<D: Datelike>(&self, page: &PageSource, today: &D) -> PageMetadata {
        let config = &self.site.config;
        let years = years_of_experience(today, config.career_start_year);
        let description = page.description.as_deref().unwrap_or(&config.description);

        PageMetadata {
            title: page.title.clone(),
            title_template: config.title_template.clone(),
            default_title: config.title.clone(),
            description: interpolate_years(description, years),
            alternate_feed_url: self.feed_url(),
        }
    }

    /// Absolute URL of the RSS feed, if a feed path is configured
    fn feed_url(&self) -> Option<String> {
        let feed_path = self.site.config.feed_path.trim();
        if feed_path.is_empty() {
            return None;
        }
        Some(full_url_for(
            &self.site.site_url,
            &self.site.config.root,
            feed_path,
        ))
    }

    /// Copy static files (images, css, ...) to the public directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;

            // Skip hidden files and directories
            let hidden = relative.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.starts_with('.'))
                    .unwrap_or(false)
            });
            if hidden {
                continue;
            }

            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        Ok(copied)
    }
}
