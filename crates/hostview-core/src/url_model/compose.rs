//! String composition of the URL, before parsing.

use crate::error::BuildError;
use crate::input::{is_ip_like, parse_port};

/// Composes the URL text for `host` and `port` without validating it as a URL.
///
/// The port is checked first, then appended as typed.
pub fn compose_url(host: &str, port: &str) -> Result<String, BuildError> {
    if is_ip_like(host) {
        if parse_port(port).is_none() {
            return Err(BuildError::InvalidPort {
                port: port.to_string(),
            });
        }
        return Ok(format!("http://{host}:{port}"));
    }

    let lowered = host.to_lowercase();
    if lowered.starts_with("http") {
        Ok(lowered)
    } else {
        Ok(format!("https://{lowered}"))
    }
}
