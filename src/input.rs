//! Reading the target URL from standard input.

use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Text of the interactive prompt
pub const PROMPT: &str = "Enter the Url: ";

/// Write the interactive prompt and flush it
///
/// The binary passes standard error here so standard output carries only
/// tuple lines.
pub fn write_prompt<W: Write>(writer: &mut W) -> Result<()> {
    writer.write_all(PROMPT.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Read exactly one line and return it without its line terminator
///
/// # Errors
///
/// Returns [`Error::Input`] if the reader is at EOF or the line is blank, and
/// [`Error::Io`] if reading fails (including non-UTF-8 input).
pub fn read_url<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        debug!("standard input closed before a URL was read");
        return Err(Error::Input);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    if line.trim().is_empty() {
        return Err(Error::Input);
    }

    Ok(line)
}
