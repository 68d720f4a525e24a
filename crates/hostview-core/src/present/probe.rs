//! Presenter that loads the page with libcurl.
//!
//! Stands in for an embedded browser view: it performs the GET a browser
//! would, follows redirects, reads the body up to a cap, and reports the
//! final URL, status and content type. Any HTTP status counts as a finished
//! load; only transport failures are reported as failed.

use std::time::Duration;

use curl::easy::Easy;

use super::cancel::CancelToken;
use super::classify::classify_curl_error;
use super::events::{NavigationEvent, NavigationObserver};
use super::Presenter;
use crate::config::ProbeConfig;
use crate::error::{NavigationError, PresentError};
use crate::url_model::ResolvedUrl;

#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_body_bytes: usize,
    pub max_redirects: u32,
    pub user_agent: String,
}

impl From<&ProbeConfig> for ProbeOptions {
    fn from(cfg: &ProbeConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_body_bytes: cfg.max_body_bytes,
            max_redirects: cfg.max_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self::from(&ProbeConfig::default())
    }
}

pub struct ProbePresenter {
    options: ProbeOptions,
    cancel: CancelToken,
}

/// What a finished load looked like.
#[derive(Debug)]
struct PageLoad {
    final_url: String,
    status: u32,
    content_type: Option<String>,
    bytes: usize,
    truncated: bool,
}

impl ProbePresenter {
    pub fn new(options: ProbeOptions) -> Self {
        Self {
            options,
            cancel: CancelToken::new(),
        }
    }

    /// Aborts the load when `cancel` is set.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    fn load(&self, url: &ResolvedUrl) -> Result<PageLoad, NavigationError> {
        if self.cancel.is_cancelled() {
            return Err(NavigationError::Cancelled);
        }

        let mut easy = self
            .configure(url)
            .map_err(|e| NavigationError::Other(format!("curl setup: {e}")))?;

        let mut bytes = 0usize;
        let mut truncated = false;
        let performed = self.perform(&mut easy, &mut bytes, &mut truncated);

        match performed {
            Ok(()) => {}
            Err(e) if truncated && e.is_write_error() => {
                tracing::debug!(
                    url = %url,
                    cap = self.options.max_body_bytes,
                    "body cut off at cap"
                );
            }
            Err(e) => return Err(classify_curl_error(&e)),
        }

        let status = easy.response_code().map_err(|e| classify_curl_error(&e))?;
        let final_url = easy
            .effective_url()
            .ok()
            .flatten()
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());
        let content_type = easy.content_type().ok().flatten().map(str::to_string);

        Ok(PageLoad {
            final_url,
            status,
            content_type,
            bytes,
            truncated,
        })
    }

    fn perform(
        &self,
        easy: &mut Easy,
        bytes: &mut usize,
        truncated: &mut bool,
    ) -> Result<(), curl::Error> {
        let cap = self.options.max_body_bytes;
        let cancel = self.cancel.clone();

        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            let room = cap.saturating_sub(*bytes);
            if data.len() > room {
                *bytes += room;
                *truncated = true;
                // Short write stops the transfer.
                return Ok(room);
            }
            *bytes += data.len();
            Ok(data.len())
        })?;
        transfer.progress_function(move |_, _, _, _| !cancel.is_cancelled())?;
        transfer.perform()
    }

    fn configure(&self, url: &ResolvedUrl) -> Result<Easy, curl::Error> {
        let mut easy = Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirects)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        easy.useragent(&self.options.user_agent)?;
        easy.progress(true)?;
        Ok(easy)
    }
}

impl Presenter for ProbePresenter {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn present(
        &self,
        url: &ResolvedUrl,
        observer: &mut dyn NavigationObserver,
    ) -> Result<(), PresentError> {
        observer.on_event(&NavigationEvent::Started {
            url: url.to_string(),
        });

        match self.load(url) {
            Ok(page) => {
                observer.on_event(&NavigationEvent::Finished {
                    url: page.final_url,
                    status: Some(page.status),
                    content_type: page.content_type,
                    bytes: page.bytes,
                    truncated: page.truncated,
                });
                Ok(())
            }
            Err(error) => {
                observer.on_event(&NavigationEvent::Failed {
                    url: url.to_string(),
                    error: error.clone(),
                });
                Err(error.into())
            }
        }
    }
}
