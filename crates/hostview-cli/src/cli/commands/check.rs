//! `hostview check <host> [--port P] [--json]` – show derived state and the
//! URL that would be presented, without presenting it.

use anyhow::Result;
use std::io::Write;

use super::screen_with;
use crate::cli::render::render_view;

pub fn run_check(host: &str, port: Option<&str>, json: bool, out: &mut dyn Write) -> Result<()> {
    let mut screen = screen_with(host, port);
    let before = screen.view();
    let result = screen.submit();

    if json {
        let (url, error) = match &result {
            Ok(url) => (Some(url.to_string()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        let mut report = serde_json::to_value(&before)?;
        if let Some(fields) = report.as_object_mut() {
            fields.insert("url".to_string(), serde_json::json!(url));
            fields.insert("error".to_string(), serde_json::json!(error));
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        render_view(out, &before)?;
        match &result {
            Ok(url) => writeln!(out, "url:  {url}")?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    result?;
    Ok(())
}
