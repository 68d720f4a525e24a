//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod interactive;
mod open;

pub use check::run_check;
pub use completions::run_completions;
pub use interactive::run_interactive;
pub use open::run_open;

use hostview_core::Screen;

/// A screen with the host typed in and, when given, the port after it.
/// The order matters: setting the host clears the port.
fn screen_with(host: &str, port: Option<&str>) -> Screen {
    let mut screen = Screen::new();
    screen.set_host(host);
    if let Some(port) = port {
        screen.set_port(port);
    }
    screen
}
