//! Line-oriented console I/O shared by the seats and the session.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Borrowed input and output streams.
///
/// Generic readers and writers keep the game loop testable with in-memory
/// buffers.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    /// Wraps the given streams.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Writes `message` without a newline and reads one line.
    ///
    /// Returns `None` at end of input. Bytes that are not UTF-8 come back
    /// as replacement characters, so the caller sees an unparseable line.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read from input")?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&line).into_owned()))
    }

    /// Writes one line.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("Failed to write output")
    }
}
