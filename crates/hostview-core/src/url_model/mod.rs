//! URL building from the host and port fields.
//!
//! An IP-like host with a valid port becomes `http://host:port`; anything
//! else is lower-cased and given `https://` unless it already starts with
//! "http". The result must parse as a URL before anyone gets to present it.

mod compose;
mod resolved;

pub use compose::compose_url;
pub use resolved::ResolvedUrl;

use crate::error::BuildError;

/// Builds the URL for `host` and `port` and checks that it parses.
///
/// `port` is only consulted when `host` is IP-like. On failure the error is
/// logged and returned; nothing is partially constructed.
///
/// # Examples
///
/// - `build_url("192.168.1.1", "8080")` → `"http://192.168.1.1:8080"`
/// - `build_url("Example.COM", "")` → `"https://example.com"`
/// - `build_url("HTTP://foo.com", "")` → `"http://foo.com"`
pub fn build_url(host: &str, port: &str) -> Result<ResolvedUrl, BuildError> {
    let result = compose_url(host, port).and_then(ResolvedUrl::parse);
    match &result {
        Ok(resolved) => tracing::debug!(url = %resolved, "built URL"),
        Err(e) => tracing::warn!(host, port, error = %e, "URL build failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_and_port_become_plain_http() {
        let url = build_url("192.168.1.1", "8080").unwrap();
        assert_eq!(url.as_str(), "http://192.168.1.1:8080");
        assert_eq!(url.url().port(), Some(8080));
    }

    #[test]
    fn domain_is_lowercased_and_gets_https() {
        let url = build_url("Example.COM", "").unwrap();
        assert_eq!(url.as_str(), "https://example.com");
    }

    #[test]
    fn port_is_ignored_for_domains() {
        let url = build_url("example.com", "8080").unwrap();
        assert_eq!(url.as_str(), "https://example.com");
    }

    #[test]
    fn existing_scheme_is_kept_and_case_folded() {
        let url = build_url("HTTP://foo.com", "").unwrap();
        assert_eq!(url.as_str(), "http://foo.com");
        let url = build_url("https://Foo.com/Path", "").unwrap();
        assert_eq!(url.as_str(), "https://foo.com/path");
    }

    #[test]
    fn ip_with_invalid_port_is_rejected() {
        assert!(matches!(
            build_url("10.0.0.1", "0"),
            Err(BuildError::InvalidPort { .. })
        ));
        assert!(matches!(
            build_url("10.0.0.1", ""),
            Err(BuildError::InvalidPort { .. })
        ));
    }

    #[test]
    fn empty_host_does_not_build() {
        assert!(matches!(
            build_url("", ""),
            Err(BuildError::Malformed { .. })
        ));
    }

    #[test]
    fn http_prefixed_host_without_scheme_does_not_build() {
        // "http" prefix is taken as a scheme, so there is nothing to prepend.
        assert!(matches!(
            build_url("httpbin.org", ""),
            Err(BuildError::Malformed { .. })
        ));
    }

    #[test]
    fn out_of_range_octets_build_but_fail_to_parse() {
        assert!(matches!(
            build_url("999.1.1.1", "80"),
            Err(BuildError::Malformed { .. })
        ));
    }

    #[test]
    fn host_with_spaces_is_malformed() {
        assert!(matches!(
            build_url("not a host", ""),
            Err(BuildError::Malformed { .. })
        ));
    }

    #[test]
    fn port_is_appended_as_typed() {
        let url = build_url("1.2.3.4", "0080").unwrap();
        assert_eq!(url.as_str(), "http://1.2.3.4:0080");
        assert_eq!(url.url().port_or_known_default(), Some(80));
    }

    #[test]
    fn signed_port_passes_validation_but_not_parsing() {
        assert!(matches!(
            build_url("1.2.3.4", "+443"),
            Err(BuildError::Malformed { url, .. }) if url == "http://1.2.3.4:+443"
        ));
    }
}
