//! `hostview open <host> [--port P]` – build the URL and present it once.

use anyhow::{Context, Result};
use hostview_core::present::Presenter;
use std::io::Write;

use super::screen_with;
use crate::cli::render::EventPrinter;

pub fn run_open(
    host: &str,
    port: Option<&str>,
    presenter: &dyn Presenter,
    out: &mut dyn Write,
) -> Result<()> {
    let mut screen = screen_with(host, port);
    if port.is_some() && !screen.view().show_port {
        tracing::info!(host, "port ignored for non-IP host");
    }

    let url = screen.submit().context("cannot open")?;
    writeln!(out, "opening {url} with {}", presenter.name())?;

    let mut printer = EventPrinter::new(out);
    presenter
        .present(&url, &mut printer)
        .with_context(|| format!("failed to present {url}"))?;
    Ok(())
}
