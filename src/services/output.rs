//! Writes the requested components of an API response to an output stream.

use crate::cli::OutputMode;
use crate::services::api::ApiResponse;
use std::io::Write;

/// Writes the parts of the response selected by the output mode: the status
/// code on its own line (unless bodyOnly), then the pretty-printed JSON body
/// (unless statusCodeOnly). A body parse failure emits nothing.
pub fn write_response(
    out: &mut impl Write,
    mode: OutputMode,
    rep: &ApiResponse,
) -> anyhow::Result<()> {
    let want_body =
        mode != OutputMode::StatusCodeOnly && !rep.body.is_empty() && rep.status != 204;

    let mut pretty = String::new();
    if want_body {
        let value: serde_json::Value = serde_json::from_slice(&rep.body)?;
        pretty = serde_json::to_string_pretty(&value)?;
    }

    if mode != OutputMode::BodyOnly {
        writeln!(out, "{}", rep.status)?;
    }

    if mode != OutputMode::StatusCodeOnly && !pretty.is_empty() {
        writeln!(out, "{}", pretty)?;
    }

    Ok(())
}
