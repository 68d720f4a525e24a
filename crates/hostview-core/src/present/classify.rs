//! Map curl errors onto navigation failures.

use crate::error::NavigationError;

/// Classify a curl error from a page load.
pub fn classify_curl_error(e: &curl::Error) -> NavigationError {
    let detail = e.to_string();
    if e.is_aborted_by_callback() {
        return NavigationError::Cancelled;
    }
    if e.is_operation_timedout() {
        return NavigationError::Timeout(detail);
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return NavigationError::Resolve(detail);
    }
    if e.is_couldnt_connect()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return NavigationError::Connect(detail);
    }
    NavigationError::Other(detail)
}
