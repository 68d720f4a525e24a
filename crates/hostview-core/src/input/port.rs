//! Port text parsing.

/// Parses `text` as a base-10 port in `1..=65535`.
///
/// Goes through a wide integer first so that "0", "-1" and "65536" are
/// rejected by the range check rather than by `u16` overflow.
pub fn parse_port(text: &str) -> Option<u16> {
    let value = text.parse::<i64>().ok()?;
    if (1..=65535).contains(&value) {
        u16::try_from(value).ok()
    } else {
        None
    }
}

/// Returns true if `text` is a port number in `1..=65535`.
pub fn is_valid_port(text: &str) -> bool {
    parse_port(text).is_some()
}
