//! URL helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Links a card title may carry: absolute http(s) and mailto URLs,
    /// site-absolute and relative paths, and in-page fragments.
    static ref HREF_RE: Regex = Regex::new(
        r"^(?:https?://[A-Za-z0-9](?:[A-Za-z0-9.-]*[A-Za-z0-9])?(?::\d+)?(?:[/?#]\S*)?|mailto:[^\s@]+@[^\s@]+|/\S*|\.{1,2}/\S*|#\S*)$"
    )
    .unwrap();

    /// Base URLs a site may be served from: absolute http(s) with an optional
    /// port and path, no query or fragment since paths are appended to it.
    static ref SITE_URL_RE: Regex = Regex::new(
        r"^https?://[A-Za-z0-9](?:[A-Za-z0-9.-]*[A-Za-z0-9])?(?::\d+)?(?:/[^\s?#]*)?$"
    )
    .unwrap();
}

/// Join `path` under the site root: `("/blog/", "/uses/")` gives `/blog/uses/`
fn url_for(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com", "/", "feed.xml") // -> "https://example.com/feed.xml"
/// ```
pub fn full_url_for(base: &str, root: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{}{}", base, url_for(root, path))
}

/// Whether `href` is a syntactically valid URL or path for a card link
pub fn is_valid_href(href: &str) -> bool {
    HREF_RE.is_match(href)
}

/// Whether `url` can serve as the site's base URL
pub fn is_valid_site_url(url: &str) -> bool {
    SITE_URL_RE.is_match(url)
}
