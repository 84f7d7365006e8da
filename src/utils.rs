use regex::Regex;

#[must_use]
pub const fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// A base URL is either an absolute http(s) URL or an absolute path
/// completed by the origin the app is served from.
#[must_use]
pub fn is_valid_base_url(value: &str) -> bool {
    let url_regex = Regex::new(r"^(https?://\S+|/\S*)$").ok();

    // If regex fails to compile, return false as a fallback
    url_regex.is_some_and(|regex| regex.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_accepted() {
        assert!(is_valid_base_url("https://api.example.com"));
        assert!(is_valid_base_url("http://localhost:5000/api"));
    }

    #[test]
    fn test_absolute_paths_accepted() {
        assert!(is_valid_base_url("/api"));
        assert!(is_valid_base_url("/"));
    }

    #[test]
    fn test_other_shapes_rejected() {
        assert!(!is_valid_base_url("api.example.com"));
        assert!(!is_valid_base_url("ftp://example.com"));
        assert!(!is_valid_base_url("http:// spaced.example.com"));
        assert!(!is_valid_base_url(""));
    }
}
