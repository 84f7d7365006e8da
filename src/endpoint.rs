use log::warn;
use serde::Serialize;

use crate::utils;

/// Fallback for development builds: a backend run locally next to the app.
pub const DEVELOPMENT_FALLBACK: &str = "http://localhost:5000/api";

/// Fallback for deployed builds: same-origin, the reverse proxy in front of
/// the backend completes the rest.
pub const PRODUCTION_FALLBACK: &str = "/api";

/// Which rule produced the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EndpointSource {
    Override,
    DevelopmentDefault,
    ProductionDefault,
}

/// Resolves the API base URL: a present, non-blank override wins verbatim,
/// otherwise the build mode picks the fallback.
#[must_use]
pub fn resolve(override_url: Option<&str>, is_development: bool) -> String {
    resolve_with_source(override_url, is_development).0
}

#[must_use]
pub fn resolve_with_source(
    override_url: Option<&str>,
    is_development: bool,
) -> (String, EndpointSource) {
    match override_url {
        Some(raw) if !raw.trim().is_empty() => {
            if !utils::is_valid_base_url(raw) {
                warn!(
                    "base url override {:?} is neither an absolute url nor an absolute path",
                    raw
                );
            }
            (raw.to_owned(), EndpointSource::Override)
        }
        _ => {
            if is_development {
                (
                    DEVELOPMENT_FALLBACK.to_owned(),
                    EndpointSource::DevelopmentDefault,
                )
            } else {
                (
                    PRODUCTION_FALLBACK.to_owned(),
                    EndpointSource::ProductionDefault,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_returned_verbatim_in_both_modes() {
        assert_eq!(
            resolve(Some("https://api.example.com"), false),
            "https://api.example.com"
        );
        assert_eq!(
            resolve(Some("https://api.example.com"), true),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_absent_override_uses_development_fallback() {
        assert_eq!(resolve(None, true), DEVELOPMENT_FALLBACK);
    }

    #[test]
    fn test_absent_override_uses_production_fallback() {
        assert_eq!(resolve(None, false), PRODUCTION_FALLBACK);
    }

    #[test]
    fn test_blank_override_behaves_as_absent() {
        assert_eq!(resolve(Some(""), true), DEVELOPMENT_FALLBACK);
        assert_eq!(resolve(Some("   "), false), PRODUCTION_FALLBACK);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let first = resolve(Some("http://localhost:9999"), true);
        let second = resolve(Some("http://localhost:9999"), true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_source_reflects_which_rule_fired() {
        let (_, source) = resolve_with_source(Some("https://api.example.com"), false);
        assert_eq!(source, EndpointSource::Override);

        let (_, source) = resolve_with_source(None, true);
        assert_eq!(source, EndpointSource::DevelopmentDefault);

        let (_, source) = resolve_with_source(None, false);
        assert_eq!(source, EndpointSource::ProductionDefault);
    }

    #[test]
    fn test_suspicious_override_still_returned_verbatim() {
        assert_eq!(resolve(Some("api.example.com"), false), "api.example.com");
    }
}
