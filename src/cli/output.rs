//! Handles all user-facing output for the CLI.
//!
//! Plain listings go one item per line; `--json` output is pretty-printed with
//! `serde_json`. The report header is highlighted when stdout is a terminal.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::Result;
use crate::session::ReportHeader;

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Writes one line per item.
pub fn write_lines<W, I, S>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for item in items {
        writeln!(out, "{}", item.as_ref())?;
    }
    Ok(())
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the report header, labels in bold cyan when colour is enabled.
pub fn write_header<W: WriteColor>(out: &mut W, header: &ReportHeader) -> io::Result<()> {
    write_label(out, ReportHeader::VARIANTS_LABEL)?;
    write!(out, " {} | ", header.variants)?;
    write_label(out, ReportHeader::SETUP_LABEL)?;
    writeln!(out, " {}", header.setup)
}

fn write_label<W: WriteColor>(out: &mut W, label: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{label}:")?;
    out.reset()
}

/// A stdout stream that only colours when attached to a terminal.
pub fn stdout_stream() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}
