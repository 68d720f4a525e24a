//! Derived, render-ready view of the screen.

use serde::Serialize;

use super::{Phase, Screen};
use crate::input::{is_ip_like, trigger_enabled};

/// Snapshot of what the screen shows. Recomputed from the fields each time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub host: String,
    /// Present only while the port field is shown.
    pub port: Option<String>,
    pub show_port: bool,
    pub can_submit: bool,
    /// URL being presented, if any.
    pub presenting: Option<String>,
    pub last_error: Option<String>,
}

impl ScreenView {
    pub(super) fn derive(screen: &Screen) -> Self {
        let show_port = is_ip_like(&screen.host);
        let presenting = match &screen.phase {
            Phase::Presenting(url) => Some(url.to_string()),
            Phase::Editing => None,
        };
        Self {
            host: screen.host.clone(),
            port: show_port.then(|| screen.port.clone()),
            show_port,
            can_submit: trigger_enabled(&screen.host, &screen.port),
            presenting,
            last_error: screen.last_error.clone(),
        }
    }
}
