//! Stdout output for one-shot commands
//!
//! JSON responses use the `{"status":"ok","data":...}` envelope. HTML is
//! written raw.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_envelope(&mut stdout, data)?;
    stdout.flush()?;
    Ok(())
}

/// Write an HTML fragment to stdout
pub fn write_html(html: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", html)?;
    stdout.flush()?;
    Ok(())
}

fn write_envelope<W: Write, T: Serialize>(out: &mut W, data: &T) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}
