//! State of the single launcher screen.
//!
//! Two text fields, a phase, and the last error. What the screen shows
//! (the port field, whether go is enabled) is derived from the fields on
//! demand through [`Screen::view`] rather than stored.

mod view;

pub use view::ScreenView;

use crate::error::SubmitError;
use crate::input::trigger_enabled;
use crate::url_model::{build_url, ResolvedUrl};

/// Where the screen is in its two-state lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fields are editable; nothing is presented.
    #[default]
    Editing,
    /// The given URL has been handed to the presenter.
    Presenting(ResolvedUrl),
}

#[derive(Debug, Default)]
pub struct Screen {
    host: String,
    port: String,
    phase: Phase,
    last_error: Option<String>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Error from the last failed submit, cleared by the next edit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the host text. A different value clears the port.
    pub fn set_host(&mut self, host: impl Into<String>) {
        let host = host.into();
        if host != self.host {
            self.host = host;
            self.port.clear();
        }
        self.last_error = None;
    }

    pub fn set_port(&mut self, port: impl Into<String>) {
        self.port = port.into();
        self.last_error = None;
    }

    /// Builds the URL and moves to [`Phase::Presenting`].
    ///
    /// The returned URL is what the caller hands to the presenter. On error
    /// the screen stays in editing and keeps the message for display.
    pub fn submit(&mut self) -> Result<ResolvedUrl, SubmitError> {
        if let Phase::Presenting(url) = &self.phase {
            return Err(SubmitError::AlreadyPresenting {
                url: url.to_string(),
            });
        }
        if !trigger_enabled(&self.host, &self.port) {
            return Err(self.record(SubmitError::TriggerDisabled));
        }

        match build_url(&self.host, &self.port) {
            Ok(url) => {
                tracing::info!(url = %url, "presenting");
                self.phase = Phase::Presenting(url.clone());
                self.last_error = None;
                Ok(url)
            }
            Err(e) => Err(self.record(SubmitError::Build(e))),
        }
    }

    /// Leaves [`Phase::Presenting`]. Returns false if nothing was presented.
    pub fn dismiss(&mut self) -> bool {
        match std::mem::take(&mut self.phase) {
            Phase::Presenting(url) => {
                tracing::debug!(url = %url, "dismissed");
                true
            }
            Phase::Editing => false,
        }
    }

    pub fn view(&self) -> ScreenView {
        ScreenView::derive(self)
    }

    fn record(&mut self, err: SubmitError) -> SubmitError {
        self.last_error = Some(err.to_string());
        err
    }
}
