//! Line-oriented console I/O.
//!
//! Generic over the reader and writer so whole sessions can be scripted
//! in tests.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` without a newline and read one line of input.
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask a y/n question. Anything starting with `y` or `Y` is yes;
    /// end of input is no.
    pub fn confirm(&mut self, text: &str) -> io::Result<bool> {
        Ok(self
            .prompt(text)?
            .is_some_and(|answer| answer.trim_start().starts_with(['y', 'Y'])))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Bytes that are not UTF-8 become U+FFFD, so a stray byte reads as
    // invalid input rather than an I/O error.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
