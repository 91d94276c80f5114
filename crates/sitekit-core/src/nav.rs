// File: src/nav.rs
// Purpose: Current-page link matching and in-page anchor parsing

/// Whether a navigation link `href` points at the page at `current_path`.
///
/// The home link (`/` or `/index.html`) matches the site root or any path
/// ending in `/index.html`. Other root-relative links match when the path
/// equals them or ends with them. Relative links and in-page anchors
/// (`/#section`) never match.
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    if href == "/" || href == "/index.html" {
        current_path == "/" || current_path.ends_with("/index.html")
    } else if href.starts_with('/') && !href.starts_with("/#") {
        current_path == href || current_path.ends_with(href)
    } else {
        false
    }
}

/// Element id targeted by an in-page anchor href, if any.
///
/// `#` and `#!` are placeholders for script-driven links and are ignored.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    if href == "#" || href == "#!" {
        return None;
    }
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", "/", true)]
    #[case("/index.html", "/", true)]
    #[case("/nl/index.html", "/index.html", true)]
    #[case("/about.html", "/", false)]
    #[case("/about.html", "/about.html", true)]
    #[case("/site/about.html", "/about.html", true)]
    #[case("/contact.html", "/about.html", false)]
    #[case("/", "/#contact", false)]
    #[case("/about.html", "about.html", false)]
    #[case("/about.html", "https://example.com/about.html", false)]
    fn test_is_active_link(#[case] path: &str, #[case] href: &str, #[case] expected: bool) {
        assert_eq!(is_active_link(path, href), expected);
    }

    #[rstest]
    #[case("#contact", Some("contact"))]
    #[case("#", None)]
    #[case("#!", None)]
    #[case("/page#x", None)]
    fn test_anchor_target_id(#[case] href: &str, #[case] expected: Option<&str>) {
        assert_eq!(anchor_target_id(href), expected);
    }
}
