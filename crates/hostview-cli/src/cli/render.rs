//! Text rendering of the screen and of navigation events.

use std::io::Write;

use hostview_core::present::{LogObserver, NavigationEvent, NavigationObserver};
use hostview_core::ScreenView;

/// Writes the screen the way the user sees it: the port line only when the
/// host is IP-like, and the go state.
pub fn render_view(out: &mut dyn Write, view: &ScreenView) -> std::io::Result<()> {
    if let Some(url) = &view.presenting {
        writeln!(out, "presenting {url}  (type 'back' to return)")?;
        return Ok(());
    }
    writeln!(out, "host: {}", view.host)?;
    if let Some(port) = &view.port {
        writeln!(out, "port: {port}")?;
    }
    let go = if view.can_submit { "enabled" } else { "disabled" };
    writeln!(out, "go:   {go}")?;
    if let Some(err) = &view.last_error {
        writeln!(out, "error: {err}")?;
    }
    Ok(())
}

/// One line describing a navigation event.
pub fn describe_event(event: &NavigationEvent) -> String {
    match event {
        NavigationEvent::Started { url } => format!("loading {url}"),
        NavigationEvent::Finished {
            url,
            status,
            content_type,
            bytes,
            truncated,
        } => {
            let mut line = format!("loaded {url}");
            let mut details = Vec::new();
            if let Some(status) = status {
                details.push(format!("HTTP {status}"));
            }
            if let Some(ct) = content_type {
                details.push(ct.clone());
            }
            if *bytes > 0 {
                let more = if *truncated { "+" } else { "" };
                details.push(format!("{bytes}{more} bytes"));
            }
            if !details.is_empty() {
                line.push_str(&format!(" ({})", details.join(", ")));
            }
            line
        }
        NavigationEvent::Failed { url, error } => format!("failed {url}: {error}"),
    }
}

/// Prints events to the screen and forwards them to the log.
pub struct EventPrinter<'a> {
    out: &'a mut dyn Write,
    log: LogObserver,
}

impl<'a> EventPrinter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            log: LogObserver,
        }
    }
}

impl NavigationObserver for EventPrinter<'_> {
    fn on_event(&mut self, event: &NavigationEvent) {
        self.log.on_event(event);
        if let Err(e) = writeln!(self.out, "{}", describe_event(event)) {
            tracing::warn!("failed to print navigation event: {}", e);
        }
    }
}
