use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which presenter receives the built URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenterKind {
    /// Fetch the page with libcurl and report what came back.
    #[default]
    Probe,
    /// Hand the URL to the platform opener (xdg-open, open, start).
    System,
}

/// Probe presenter parameters (optional `[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Stop reading the body after this many bytes.
    pub max_body_bytes: usize,
    /// Maximum redirects followed.
    pub max_redirects: u32,
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 30,
            max_body_bytes: 64 * 1024,
            max_redirects: 10,
            user_agent: format!("hostview/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// System presenter parameters (optional `[system]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Program and leading arguments used instead of the platform opener.
    /// The URL is appended as the last argument.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

/// Global configuration loaded from `~/.config/hostview/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostviewConfig {
    /// Presenter used when none is given on the command line.
    #[serde(default)]
    pub presenter: PresenterKind,
    /// Optional probe settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub probe: Option<ProbeConfig>,
    #[serde(default)]
    pub system: Option<SystemConfig>,
}

impl HostviewConfig {
    pub fn probe_or_default(&self) -> ProbeConfig {
        self.probe.clone().unwrap_or_default()
    }

    pub fn system_or_default(&self) -> SystemConfig {
        self.system.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hostview")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HostviewConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HostviewConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<HostviewConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: HostviewConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}

fn write_to(path: &Path, cfg: &HostviewConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}
