//! CLI for the hostview launcher.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hostview_core::config::{self, HostviewConfig, PresenterKind};
use hostview_core::present::{self, CancelToken, Presenter};
use std::io;
use std::path::{Path, PathBuf};

use commands::{run_check, run_completions, run_interactive, run_open};

/// Top-level CLI for hostview.
#[derive(Debug, Parser)]
#[command(name = "hostview")]
#[command(
    about = "hostview: enter an IP (with port) or a domain and open it",
    long_about = None
)]
pub struct Cli {
    /// Presenter to use instead of the one in config.toml.
    #[arg(long, global = true, value_enum)]
    pub presenter: Option<PresenterArg>,

    /// Config file to read instead of ~/.config/hostview/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Defaults to the interactive screen.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresenterArg {
    /// Load the page with libcurl and report the result.
    Probe,
    /// Open the page in the desktop's default browser.
    System,
}

impl From<PresenterArg> for PresenterKind {
    fn from(arg: PresenterArg) -> Self {
        match arg {
            PresenterArg::Probe => PresenterKind::Probe,
            PresenterArg::System => PresenterKind::System,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Edit host and port on a line-based screen, then go.
    Interactive,

    /// Build the URL for a host (and port, for IP addresses) and present it.
    Open {
        /// IP address or domain name.
        host: String,
        /// Port; only used when the host is an IP address.
        #[arg(long, short)]
        port: Option<String>,
    },

    /// Show what the screen would derive for a host/port without presenting.
    Check {
        /// IP address or domain name.
        host: String,
        /// Port; only used when the host is an IP address.
        #[arg(long, short)]
        port: Option<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            Some(CliCommand::Completions { shell }) => {
                run_completions(shell, &mut io::stdout())?;
            }
            Some(CliCommand::Check { host, port, json }) => {
                run_check(&host, port.as_deref(), json, &mut io::stdout())?;
            }
            Some(CliCommand::Open { host, port }) => {
                let presenter = presenter_for(cli.config.as_deref(), cli.presenter)?;
                run_open(&host, port.as_deref(), presenter.as_ref(), &mut io::stdout())?;
            }
            Some(CliCommand::Interactive) | None => {
                let presenter = presenter_for(cli.config.as_deref(), cli.presenter)?;
                let stdin = io::stdin();
                run_interactive(stdin.lock(), &mut io::stdout(), presenter.as_ref())?;
            }
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<HostviewConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

fn presenter_for(
    config_path: Option<&Path>,
    arg: Option<PresenterArg>,
) -> Result<Box<dyn Presenter>> {
    let cfg = load_config(config_path)?;
    let kind = arg.map(PresenterKind::from).unwrap_or(cfg.presenter);
    Ok(present::from_config(&cfg, kind, CancelToken::new()))
}

#[cfg(test)]
mod tests;
