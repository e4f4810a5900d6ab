//! Content validation errors

use thiserror::Error;

/// Faults in page sources. Any of these aborts the build.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Group title must not be empty (page '{page}', group #{index})")]
    EmptyGroupTitle { page: String, index: usize },

    #[error("Item title must not be empty (page '{page}', group '{group}', item #{index})")]
    EmptyItemTitle {
        page: String,
        group: String,
        index: usize,
    },

    #[error("Invalid href '{href}' on item '{item}' (page '{page}')")]
    InvalidHref {
        page: String,
        item: String,
        href: String,
    },

    #[error("Duplicate page slug '{0}'")]
    DuplicateSlug(String),

    #[error("Invalid page slug '{0}': use lowercase letters, digits and dashes")]
    InvalidSlug(String),

    #[error("Failed to parse page '{page}': {source}")]
    Parse {
        page: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
