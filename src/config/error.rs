//! Configuration errors

use thiserror::Error;

/// Faults in the resolved site configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid site URL '{url}' (from {origin}): expected an absolute http(s) URL")]
    InvalidSiteUrl { url: String, origin: &'static str },
}
