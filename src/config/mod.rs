//! Configuration module

mod error;
mod site;

pub use error::ConfigError;
pub use site::resolve_site_url;
pub use site::AnalyticsConfig;
pub use site::SiteConfig;
pub use site::SITE_URL_ENV;
