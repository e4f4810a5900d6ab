//! Content module - page sources, content groups and validation

pub mod defaults;
mod error;
mod group;
pub mod loader;
mod markdown;
mod page;

pub use error::ContentError;
pub use group::{enabled_groups, BodyFormat, ContentGroup, ContentItem};
pub use markdown::MarkdownRenderer;
pub use page::{PageMetadata, PageSource, HOME_SLUG};
