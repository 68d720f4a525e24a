//! Navigation events reported by presenters.

use crate::error::NavigationError;

/// One step of a page load, in the order a presenter reports them:
/// `Started`, then exactly one of `Finished` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Started {
        url: String,
    },
    Finished {
        /// Final URL after redirects.
        url: String,
        /// HTTP status, when the presenter saw one.
        status: Option<u32>,
        content_type: Option<String>,
        /// Body bytes read (capped by the presenter).
        bytes: usize,
        /// True if the body was cut off at the cap.
        truncated: bool,
    },
    Failed {
        url: String,
        error: NavigationError,
    },
}

impl NavigationEvent {
    pub fn url(&self) -> &str {
        match self {
            NavigationEvent::Started { url }
            | NavigationEvent::Finished { url, .. }
            | NavigationEvent::Failed { url, .. } => url,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, NavigationEvent::Started { .. })
    }
}

/// Receives navigation events from a presenter.
pub trait NavigationObserver {
    fn on_event(&mut self, event: &NavigationEvent);
}

impl<F> NavigationObserver for F
where
    F: FnMut(&NavigationEvent),
{
    fn on_event(&mut self, event: &NavigationEvent) {
        self(event)
    }
}

/// Writes every event to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl NavigationObserver for LogObserver {
    fn on_event(&mut self, event: &NavigationEvent) {
        match event {
            NavigationEvent::Started { url } => tracing::info!(url, "navigation started"),
            NavigationEvent::Finished {
                url,
                status,
                content_type,
                bytes,
                truncated,
            } => tracing::info!(
                url,
                status = ?status,
                content_type = content_type.as_deref().unwrap_or("-"),
                bytes,
                truncated,
                "navigation finished"
            ),
            NavigationEvent::Failed { url, error } => {
                tracing::warn!(url, error = %error, "navigation failed")
            }
        }
    }
}

/// Keeps every event, optionally forwarding to an inner observer.
#[derive(Default)]
pub struct CollectObserver<'a> {
    events: Vec<NavigationEvent>,
    inner: Option<&'a mut dyn NavigationObserver>,
}

impl<'a> CollectObserver<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects and also forwards each event to `inner`.
    pub fn forwarding(inner: &'a mut dyn NavigationObserver) -> Self {
        Self {
            events: Vec::new(),
            inner: Some(inner),
        }
    }

    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    /// The `Finished` or `Failed` event, if one was reported.
    pub fn outcome(&self) -> Option<&NavigationEvent> {
        self.events.iter().rev().find(|e| e.is_terminal())
    }

    pub fn into_events(self) -> Vec<NavigationEvent> {
        self.events
    }
}

impl NavigationObserver for CollectObserver<'_> {
    fn on_event(&mut self, event: &NavigationEvent) {
        if let Some(inner) = self.inner.as_mut() {
            inner.on_event(event);
        }
        self.events.push(event.clone());
    }
}
