//! Host and port input validation.
//!
//! Pure predicates over the two text fields of the launcher screen. The IP
//! check is syntactic: four dot-separated groups of one to three digits, with
//! no range check on the octets ("999.999.999.999" is IP-like).

mod port;

use regex::Regex;
use std::sync::OnceLock;

pub use port::{is_valid_port, parse_port};

const IP_LIKE_PATTERN: &str = r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$";

static IP_LIKE_RE: OnceLock<Regex> = OnceLock::new();

fn ip_like_re() -> &'static Regex {
    IP_LIKE_RE.get_or_init(|| Regex::new(IP_LIKE_PATTERN).expect("IP pattern is valid"))
}

/// Returns true if `host` has the shape of an IPv4 address.
///
/// Octet values are not range-checked.
pub fn is_ip_like(host: &str) -> bool {
    ip_like_re().is_match(host)
}

/// Returns true if the go action may fire for this host/port pair.
///
/// A host that is not IP-like ignores the port entirely; an IP-like host
/// needs a valid port.
pub fn trigger_enabled(host: &str, port: &str) -> bool {
    !is_ip_like(host) || is_valid_port(port)
}
