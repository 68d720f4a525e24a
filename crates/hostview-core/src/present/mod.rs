//! Presenting a built URL.
//!
//! A [`Presenter`] receives the [`ResolvedUrl`] as an argument at the moment
//! it is asked to show it; nothing is read from shared state afterwards.
//! Navigation events are reported to a [`NavigationObserver`] for diagnostics
//! only. No caller branches on them and nothing is retried.

mod cancel;
mod classify;
mod events;
mod probe;
mod system;

pub use cancel::CancelToken;
pub use classify::classify_curl_error;
pub use events::{CollectObserver, LogObserver, NavigationEvent, NavigationObserver};
pub use probe::{ProbeOptions, ProbePresenter};
pub use system::SystemPresenter;

use crate::config::{HostviewConfig, PresenterKind};
use crate::error::PresentError;
use crate::url_model::ResolvedUrl;

/// Something that can show a URL to the user.
pub trait Presenter {
    /// Short name used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Shows `url`, reporting start and finish/failure to `observer`.
    fn present(
        &self,
        url: &ResolvedUrl,
        observer: &mut dyn NavigationObserver,
    ) -> Result<(), PresentError>;
}

/// Builds the presenter of the given kind from config.
pub fn from_config(
    cfg: &HostviewConfig,
    kind: PresenterKind,
    cancel: CancelToken,
) -> Box<dyn Presenter> {
    match kind {
        PresenterKind::Probe => Box::new(
            ProbePresenter::new(ProbeOptions::from(&cfg.probe_or_default())).with_cancel(cancel),
        ),
        PresenterKind::System => {
            Box::new(SystemPresenter::from_config(&cfg.system_or_default()))
        }
    }
}
