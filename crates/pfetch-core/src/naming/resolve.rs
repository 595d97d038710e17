//! Resolution of scraped (possibly relative) links.

use url::Url;

/// Resolves a scraped `href` against the page it was found on.
///
/// Absolute hrefs are returned unchanged (trimmed). Relative hrefs are joined
/// onto `base`; without a base, or when joining fails, the href is returned
/// verbatim so the fetcher reports it as an invalid URL.
pub fn resolve_link(base: Option<&Url>, href: &str) -> String {
    let href = href.trim();
    match Url::parse(href) {
        Ok(_) => href.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => base
            .and_then(|b| b.join(href).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| href.to_string()),
        Err(_) => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.test/registry/index.html").unwrap()
    }

    #[test]
    fn absolute_passes_through() {
        assert_eq!(
            resolve_link(Some(&base()), " https://cdn.example.test/a.pdf "),
            "https://cdn.example.test/a.pdf"
        );
    }

    #[test]
    fn relative_is_joined() {
        assert_eq!(
            resolve_link(Some(&base()), "docs/a.pdf"),
            "https://example.test/registry/docs/a.pdf"
        );
        assert_eq!(
            resolve_link(Some(&base()), "/files/b.pdf"),
            "https://example.test/files/b.pdf"
        );
    }

    #[test]
    fn relative_without_base_is_kept() {
        assert_eq!(resolve_link(None, "/files/b.pdf"), "/files/b.pdf");
    }
}
