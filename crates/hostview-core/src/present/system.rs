//! Presenter that hands the URL to the desktop's default browser.

use std::process::Command;

use super::events::{NavigationEvent, NavigationObserver};
use super::Presenter;
use crate::config::SystemConfig;
use crate::error::{NavigationError, PresentError};
use crate::url_model::ResolvedUrl;

/// Spawns the platform opener (or a configured command) with the URL as
/// its last argument. The load itself happens outside this process, so an
/// opener that exits cleanly is reported as finished with no status.
#[derive(Debug, Clone, Default)]
pub struct SystemPresenter {
    command: Option<Vec<String>>,
}

impl SystemPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &SystemConfig) -> Self {
        Self {
            command: cfg.command.clone().filter(|c| !c.is_empty()),
        }
    }

    fn command_for(&self, url: &str) -> Command {
        match self.command.as_deref() {
            Some([program, args @ ..]) => {
                let mut cmd = Command::new(program);
                cmd.args(args).arg(url);
                cmd
            }
            _ => platform_opener(url),
        }
    }
}

#[cfg(target_os = "macos")]
fn platform_opener(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn platform_opener(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

impl Presenter for SystemPresenter {
    fn name(&self) -> &'static str {
        "system"
    }

    fn present(
        &self,
        url: &ResolvedUrl,
        observer: &mut dyn NavigationObserver,
    ) -> Result<(), PresentError> {
        let url_text = url.to_string();
        observer.on_event(&NavigationEvent::Started {
            url: url_text.clone(),
        });

        let mut cmd = self.command_for(&url_text);
        let program = cmd.get_program().to_string_lossy().into_owned();
        tracing::debug!(program = %program, url = %url_text, "spawning opener");

        // Wait for the opener. xdg-open and open return once the browser has the URL.
        let status = match cmd.status() {
            Ok(status) => status,
            Err(source) => {
                observer.on_event(&NavigationEvent::Failed {
                    url: url_text,
                    error: NavigationError::Other(format!(
                        "failed to launch {program}: {source}"
                    )),
                });
                return Err(PresentError::Spawn { program, source });
            }
        };

        if !status.success() {
            let error = NavigationError::Other(format!("{program} exited with {status}"));
            tracing::warn!(program = %program, %status, "opener failed");
            observer.on_event(&NavigationEvent::Failed {
                url: url_text,
                error: error.clone(),
            });
            return Err(PresentError::Navigation(error));
        }

        observer.on_event(&NavigationEvent::Finished {
            url: url_text,
            status: None,
            content_type: None,
            bytes: 0,
            truncated: false,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::CollectObserver;

    fn url() -> ResolvedUrl {
        ResolvedUrl::parse("https://example.com".to_string()).unwrap()
    }

    #[test]
    fn configured_command_gets_url_last() {
        let p = SystemPresenter::from_config(&SystemConfig {
            command: Some(vec!["firefox".into(), "--new-tab".into()]),
        });
        let cmd = p.command_for("https://example.com");
        assert_eq!(cmd.get_program(), "firefox");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["--new-tab", "https://example.com"]);
    }

    #[test]
    fn empty_command_falls_back_to_platform_opener() {
        let p = SystemPresenter::from_config(&SystemConfig {
            command: Some(Vec::new()),
        });
        let cmd = p.command_for("https://example.com");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(
            args.last().copied(),
            Some(std::ffi::OsStr::new("https://example.com"))
        );
    }

    #[test]
    fn missing_program_reports_failure() {
        let p = SystemPresenter::from_config(&SystemConfig {
            command: Some(vec!["hostview-no-such-opener".into()]),
        });
        let mut events = CollectObserver::new();
        let err = p.present(&url(), &mut events).unwrap_err();
        assert!(matches!(err, PresentError::Spawn { .. }));
        assert!(matches!(
            events.outcome(),
            Some(NavigationEvent::Failed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn spawned_opener_reports_finished() {
        let p = SystemPresenter::from_config(&SystemConfig {
            command: Some(vec!["true".into()]),
        });
        let mut events = CollectObserver::new();
        p.present(&url(), &mut events).unwrap();
        assert_eq!(
            events.outcome(),
            Some(&NavigationEvent::Finished {
                url: "https://example.com".into(),
                status: None,
                content_type: None,
                bytes: 0,
                truncated: false,
            })
        );
    }

    #[cfg(unix)]
    #[test]
    fn opener_exit_failure_is_reported() {
        let p = SystemPresenter::from_config(&SystemConfig {
            command: Some(vec!["false".into()]),
        });
        let mut events = CollectObserver::new();
        let err = p.present(&url(), &mut events).unwrap_err();
        assert!(matches!(
            err,
            PresentError::Navigation(NavigationError::Other(_))
        ));
        assert!(matches!(
            events.outcome(),
            Some(NavigationEvent::Failed { .. })
        ));
    }
}
