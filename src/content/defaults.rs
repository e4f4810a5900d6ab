//! Starter content written by `folio init`

use super::{ContentGroup, ContentItem, PageSource, HOME_SLUG};

/// Home page: layout heading and intro only
pub fn home_page() -> PageSource {
    PageSource {
        slug: HOME_SLUG.to_string(),
        title: None,
        description: None,
        heading: "Full Stack Engineer, and builder.".to_string(),
        intro: "I enjoy building both front-end and backend applications.".to_string(),
        groups: Vec::new(),
    }
}

/// The "uses" page. The workstation group is kept but disabled.
pub fn uses_page() -> PageSource {
    PageSource {
        slug: "uses".to_string(),
        title: Some("Uses".to_string()),
        description: Some(
            "Software I use, gadgets I love, and other things I recommend.".to_string(),
        ),
        heading: "Software I use, gadgets I love, and other things I recommend.".to_string(),
        intro: "I get asked a lot about the things I use to build software, stay productive, \
                or buy to fool myself into thinking I’m being productive when I’m really just \
                procrastinating. Here’s a big list of all of my favorite stuff."
            .to_string(),
        groups: vec![
            ContentGroup::new(
                "Workstation",
                vec![
                    ContentItem::new(
                        "16” MacBook Pro, M1 Max, 64GB RAM (2021)",
                        "I was using an Intel-based 16” MacBook Pro prior to this and the \
                         difference is night and day. I’ve never heard the fans turn on a \
                         single time, even under the incredibly heavy loads I put it through \
                         with our various launch simulations.",
                    ),
                    ContentItem::new(
                        "Apple Pro Display XDR (Standard Glass)",
                        "The only display on the market if you want something HiDPI and \
                         bigger than 27”. When you’re working at planetary scale, every pixel \
                         you can get counts.",
                    ),
                    ContentItem::new(
                        "IBM Model M SSK Industrial Keyboard",
                        "They don’t make keyboards the way they used to. I buy these any time \
                         I see them go up for sale and keep them in storage in case I need \
                         parts or need to retire my main.",
                    ),
                    ContentItem::new(
                        "Apple Magic Trackpad",
                        "Something about all the gestures makes me feel like a wizard with \
                         special powers. I really like feeling like a wizard with special \
                         powers.",
                    ),
                    ContentItem::new(
                        "Herman Miller Aeron Chair",
                        "If I’m going to slouch in the worst ergonomic position imaginable \
                         all day, I might as well do it in an expensive chair.",
                    ),
                ],
            )
            .disabled(),
            ContentGroup::new(
                "Development tools",
                vec![
                    ContentItem::new(
                        "Visual Studio",
                        "When I need full-scale enterprise tools, Visual Studio delivers \
                         everything from powerful debugging to seamless Azure integration.",
                    ),
                    ContentItem::new(
                        "Visual Studio Code",
                        "I don’t care if it’s missing all the bells and whistles of \
                         heavyweight IDEs. Visual Studio Code remains my go-to editor for \
                         speed, flexibility, and extensibility.",
                    ),
                    ContentItem::new(
                        "SQL Server Management Studio",
                        "For database work, I switch to SQL Server Management Studio for its \
                         comprehensive control.",
                    ),
                    ContentItem::new(
                        "Azure Data Studio",
                        "I switch to Azure Data Studio for a more modern, developer-friendly \
                         experience.",
                    ),
                    ContentItem::new(
                        "NGROK",
                        "When it’s time to demo or test webhooks, NGROK makes exposing local \
                         servers to the internet seamless.",
                    ),
                ],
            ),
            ContentGroup::new(
                "Design",
                vec![ContentItem::new(
                    "Figma",
                    "Figma is hands-down the best tool for modern interface design and \
                     collaboration. Figma helps bring ideas to life faster, without ever \
                     needing to leave the browser.",
                )],
            ),
            ContentGroup::new(
                "Productivity",
                vec![
                    ContentItem::new(
                        "Microsoft To Do",
                        "Microsoft To Do keeps me focused better than any complex \
                         productivity suite ever could. With its clean interface, smart daily \
                         planning (“My Day”), and deep integration with Outlook and Microsoft \
                         365, it helps me stay on top of personal and project tasks without \
                         the clutter. Sometimes, less really is more.",
                    ),
                    ContentItem::new(
                        "Azure DevOps",
                        "Azure DevOps delivers the end-to-end workflow that actually gets \
                         things shipped. From code repos and CI/CD pipelines to project \
                         boards and test plans, it brings everything together in one tightly \
                         integrated platform. Whether I’m tracking user stories or automating \
                         deployments, Azure DevOps keeps the entire software lifecycle moving \
                         with precision.",
                    ),
                ],
            ),
        ],
    }
}

/// All starter pages, home first
pub fn starter_pages() -> Vec<PageSource> {
    vec![home_page(), uses_page()]
}
