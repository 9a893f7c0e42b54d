//! Input-parsing helpers for the interactive session.
//!
//! Each prompt writes its text without a trailing newline, flushes, and then
//! blocks on one line of input. Integer prompts require the whole line to
//! parse as a base-10 integer; a malformed line is an error, not a re-prompt.

use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
};

/// Failure while prompting for input.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed")]
    Io(#[from] io::Error),

    /// The input stream ended while a prompt was waiting for a line.
    #[error("unexpected end of input")]
    Eof,

    /// An integer prompt received a line that is not base-10 text.
    ///
    /// This is fatal: the observed program does not catch it either.
    #[error("invalid integer input")]
    Parse(#[from] ParseIntError),
}

/// Prints `prompt` and reads one line, trimmed of surrounding whitespace.
pub fn read_string<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String, PromptError> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof);
    }
    Ok(line.trim().to_owned())
}

/// Prints `prompt` and reads one line as a base-10 integer.
///
/// An optional leading sign is accepted, anything else fails.
pub fn read_int<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<i32, PromptError> {
    let line = read_string(reader, writer, prompt)?;
    Ok(line.parse()?)
}
