//! Content section renderer: groups become sections, items become cards

use anyhow::Result;
use tera::Context;

use crate::content::{enabled_groups, BodyFormat, ContentGroup, ContentItem, MarkdownRenderer};
use crate::helpers::html_escape;
use crate::templates::{CardData, SectionData, TemplateRenderer};

/// Build section data for every enabled group, in declaration order
pub fn section_data(groups: &[ContentGroup], markdown: &MarkdownRenderer) -> Vec<SectionData> {
    enabled_groups(groups)
        .map(|group| SectionData {
            id: slug::slugify(&group.title),
            title: html_escape(&group.title),
            cards: group
                .items
                .iter()
                .map(|item| card_data(item, markdown))
                .collect(),
        })
        .collect()
}

fn card_data(item: &ContentItem, markdown: &MarkdownRenderer) -> CardData {
    let body = match item.format {
        BodyFormat::Text => html_escape(item.body.trim()),
        BodyFormat::Markdown => markdown.render(&item.body),
    };

    CardData {
        title: html_escape(&item.title),
        href: item.href.as_deref().map(html_escape),
        body,
    }
}

/// Render the sections of a page. An empty or fully disabled list renders
/// to an empty fragment.
pub fn render_sections(
    renderer: &TemplateRenderer,
    markdown: &MarkdownRenderer,
    groups: &[ContentGroup],
) -> Result<String> {
    let sections = section_data(groups, markdown);

    let mut context = Context::new();
    context.insert("sections", &sections);
    renderer.render("sections.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(groups: &[ContentGroup]) -> String {
        let renderer = TemplateRenderer::new().unwrap();
        render_sections(&renderer, &MarkdownRenderer::new(), groups).unwrap()
    }

    fn tools() -> Vec<ContentGroup> {
        vec![
            ContentGroup::new(
                "Development tools",
                vec![
                    ContentItem::new("Visual Studio", "Enterprise tools."),
                    ContentItem::new("Visual Studio Code", "Go-to editor."),
                    ContentItem::new("NGROK", "Webhooks."),
                ],
            ),
            ContentGroup::new("Workstation", vec![ContentItem::new("Chair", "Aeron.")])
                .disabled(),
            ContentGroup::new("Design", vec![ContentItem::new("Figma", "Design tool.")]),
        ]
    }

    #[test]
    fn test_single_group_scenario() {
        let html = render(&[ContentGroup::new("A", vec![ContentItem::new("X", "b1")])]);

        assert_eq!(html.matches("<section ").count(), 1);
        assert_eq!(html.matches(r#"<li class="card">"#).count(), 1);
        assert!(html.contains(r#"<h2 class="section-title">A</h2>"#));
        assert!(html.contains(r#"<h3 class="card-title">X</h3>"#));
        assert!(html.contains(r#"<div class="card-description">b1</div>"#));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_empty_groups_render_nothing() {
        let html = render(&[]);
        assert!(html.trim().is_empty());
    }

    #[test]
    fn test_counts_follow_enabled_groups() {
        let groups = tools();
        let html = render(&groups);

        assert_eq!(html.matches("<section ").count(), 2);
        assert_eq!(html.matches(r#"<li class="card">"#).count(), 4);
        assert!(!html.contains("Workstation"));
        assert!(!html.contains("Aeron"));
    }

    #[test]
    fn test_render_order_follows_declaration_order() {
        let mut groups = tools();
        let html = render(&groups);
        let vs = html.find(">Visual Studio<").unwrap();
        let code = html.find(">Visual Studio Code<").unwrap();
        let ngrok = html.find(">NGROK<").unwrap();
        let design = html.find(">Design<").unwrap();
        assert!(vs < code && code < ngrok && ngrok < design);

        // Reversed input renders reversed: nothing is re-sorted
        groups.reverse();
        let html = render(&groups);
        assert!(html.find(">Design<").unwrap() < html.find(">Development tools<").unwrap());
    }

    #[test]
    fn test_href_renders_link() {
        let groups = vec![ContentGroup::new(
            "Design",
            vec![
                ContentItem::new("Figma", "Design tool.").with_href("https://www.figma.com/"),
                ContentItem::new("Plain", "No link."),
            ],
        )];
        let html = render(&groups);

        assert!(html.contains(r#"<a href="https://www.figma.com/">Figma</a>"#));
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains(r#"<h3 class="card-title">Plain</h3>"#));
    }

    #[test]
    fn test_text_body_is_escaped() {
        let groups = vec![ContentGroup::new(
            "Tips & Tricks",
            vec![ContentItem::new("<b>", "1 < 2")],
        )];
        let html = render(&groups);

        assert!(html.contains("Tips &amp; Tricks"));
        assert!(html.contains(r#"id="tips-tricks""#));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("1 &lt; 2"));
    }

    #[test]
    fn test_markdown_body_is_rendered() {
        let groups = vec![ContentGroup::new(
            "Productivity",
            vec![ContentItem::new("To Do", "Plan **My Day**").markdown()],
        )];
        let html = render(&groups);
        assert!(html.contains("<strong>My Day</strong>"));
    }

    #[test]
    fn test_section_data_counts() {
        let groups = tools();
        let sections = section_data(&groups, &MarkdownRenderer::new());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].cards.len(), 3);
        assert_eq!(sections[1].cards.len(), 1);
        assert_eq!(sections[0].id, "development-tools");
    }
}
