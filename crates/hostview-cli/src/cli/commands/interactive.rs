//! `hostview` / `hostview interactive` – the launcher screen on a terminal.
//!
//! One command per line. The screen is re-rendered after every command, so
//! the port line appears and disappears as the host changes shape.

use anyhow::Result;
use hostview_core::present::Presenter;
use hostview_core::{Phase, Screen};
use std::io::{BufRead, Write};

use crate::cli::render::{render_view, EventPrinter};

const HELP: &str = "\
commands:
  host <text>   set the IP address or domain (clears the port)
  port <text>   set the port (only shown for IP addresses)
  go            build the URL and present it
  back          dismiss the presented page
  show          redraw the screen
  help          this text
  quit          leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Host(String),
    Port(String),
    Go,
    Back,
    Show,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest.trim_start_matches(' ')),
        None => (line.trim(), ""),
    };
    match word {
        "host" => Ok(Input::Host(rest.to_string())),
        "port" => Ok(Input::Port(rest.to_string())),
        "go" => Ok(Input::Go),
        "back" => Ok(Input::Back),
        "show" | "" => Ok(Input::Show),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" => Ok(Input::Quit),
        other => Err(format!("unknown command {other:?}; type 'help'")),
    }
}

/// Runs the screen until `quit` or end of input.
pub fn run_interactive<R: BufRead>(
    input: R,
    out: &mut dyn Write,
    presenter: &dyn Presenter,
) -> Result<()> {
    let mut screen = Screen::new();
    writeln!(out, "{HELP}")?;
    render_view(out, &screen.view())?;

    for line in input.lines() {
        let line = line?;
        let cmd = match parse_line(&line) {
            Ok(cmd) => cmd,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };
        tracing::debug!(?cmd, "screen input");

        match cmd {
            Input::Quit => break,
            Input::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Input::Show => {}
            Input::Host(host) => {
                if is_presenting(&screen) {
                    writeln!(out, "type 'back' before editing")?;
                    continue;
                }
                screen.set_host(host);
            }
            Input::Port(port) => {
                if is_presenting(&screen) {
                    writeln!(out, "type 'back' before editing")?;
                    continue;
                }
                if !screen.view().show_port {
                    writeln!(out, "the port field is only shown for IP addresses")?;
                    continue;
                }
                screen.set_port(port);
            }
            Input::Go => {
                // Errors are kept on the screen and rendered below.
                if let Ok(url) = screen.submit() {
                    let mut printer = EventPrinter::new(out);
                    if let Err(e) = presenter.present(&url, &mut printer) {
                        tracing::warn!("presenter {} failed: {}", presenter.name(), e);
                    }
                }
            }
            Input::Back => {
                if !screen.dismiss() {
                    writeln!(out, "nothing is presented")?;
                    continue;
                }
            }
        }
        render_view(out, &screen.view())?;
    }

    Ok(())
}

fn is_presenting(screen: &Screen) -> bool {
    matches!(screen.phase(), Phase::Presenting(_))
}
