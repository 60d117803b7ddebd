//! Command implementations behind the `plantrec` subcommands.
//!
//! Each command issues exactly one API call and returns the response body;
//! the binary prints it with [`print_json`].

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;

pub mod diagnostics;
pub mod plants;
pub mod questions;
pub mod recommendations;
pub mod study;

/// Pretty-prints a response body to stdout.
pub fn print_json(value: &Value) -> Result<()> {
    let stdout = std::io::stdout();
    write_json(&mut stdout.lock(), value)
}

/// Writes `value` as indented JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to write JSON output")?;
    writeln!(out).context("Failed to write JSON output")?;
    Ok(())
}
