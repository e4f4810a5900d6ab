//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::PageSource;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let pages = ContentLoader::new(site).load_pages()?;

    match content_type {
        "page" | "pages" => print!("{}", format_pages(&pages)),
        "group" | "groups" => print!("{}", format_groups(&pages)),
        _ => {
            anyhow::bail!("Unknown type: {}. Available: page, group", content_type);
        }
    }

    Ok(())
}

fn format_pages(pages: &[PageSource]) -> String {
    let mut out = format!("Pages ({}):\n", pages.len());
    for page in pages {
        let enabled = page.groups.iter().filter(|g| g.enabled).count();
        out.push_str(&format!(
            "  /{} - {} [{}/{} groups]\n",
            page.path(),
            page.title.as_deref().unwrap_or("(site title)"),
            enabled,
            page.groups.len()
        ));
    }
    out
}

fn format_groups(pages: &[PageSource]) -> String {
    let total: usize = pages.iter().map(|p| p.groups.len()).sum();
    let mut out = format!("Groups ({}):\n", total);
    for page in pages {
        for group in &page.groups {
            out.push_str(&format!(
                "  {} / {} ({} items){}\n",
                page.slug,
                group.title,
                group.items.len(),
                if group.enabled { "" } else { " [disabled]" }
            ));
        }
    }
    out
}
