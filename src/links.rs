/// Classify an anchor href for transition interception.
///
/// Internal means: non-empty, not a fragment, not a `mailto:`/`tel:` action,
/// carries no scheme (`://`), and is not protocol-relative (`//host`). This
/// is deliberately stricter than "starts with /" so relative hrefs like
/// `story.html` are intercepted too.
pub fn is_internal_href(href: &str) -> bool {
    if href.is_empty() {
        return false;
    }
    if href.starts_with('#') || href.starts_with("mailto:") || href.starts_with("tel:") {
        return false;
    }
    if href.starts_with("//") || href.contains("://") {
        return false;
    }
    true
}

/// Last segment of a location pathname; an empty segment (site root or a
/// trailing slash) means the index page.
pub fn page_name(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some("") | None => "index.html",
        Some(seg) => seg,
    }
}

/// Nav links carry page-relative hrefs, so highlighting is an exact match
/// against the current page name.
#[inline]
pub fn link_is_current(href: &str, page: &str) -> bool {
    href == page
}
