//! Helper functions shared by the content model and the generator
//!
//! URL building and validation, HTML escaping and head tags, and the
//! date arithmetic behind the years-of-experience field.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
