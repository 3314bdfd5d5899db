//! External-link validation for interactive nodes.

/// Schemes a node link may use.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `url` is usable as an external action.
///
/// Accepts `http`/`https` URLs with a non-empty authority and `mailto:`
/// links with a non-empty address. Anything else (empty strings, relative
/// paths, `javascript:` and other schemes, embedded whitespace) is
/// rejected, which makes the owning node non-interactive.
#[must_use]
pub fn is_well_formed(url: &str) -> bool {
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };
    let scheme = scheme.to_ascii_lowercase();
    if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        return false;
    }
    if scheme == "mailto" {
        return !rest.is_empty();
    }
    rest.strip_prefix("//")
        .and_then(|after| after.split(['/', '?', '#']).next())
        .is_some_and(|authority| !authority.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_web_and_mail_links() {
        assert!(is_well_formed("https://github.com/someone"));
        assert!(is_well_formed("HTTP://example.org"));
        assert!(is_well_formed("https://example.org?q=1"));
        assert!(is_well_formed("mailto:hello@example.org"));
    }

    #[test]
    fn rejects_malformed_links() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("github.com"));
        assert!(!is_well_formed("https://"));
        assert!(!is_well_formed("https:///path"));
        assert!(!is_well_formed("https://exa mple.org"));
        assert!(!is_well_formed("javascript:alert(1)"));
        assert!(!is_well_formed("mailto:"));
    }
}
