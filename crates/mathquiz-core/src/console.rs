//! Line-oriented console I/O over arbitrary reader/writer handles.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

const RESET: &str = "\x1b[0m";
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Foreground colors used for feedback lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Red => "\x1b[31m",
        }
    }
}

/// Console wrapper used by the interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Read one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read lines until one parses as an integer, without printing anything
    /// in between. `None` at end of input.
    pub fn read_integer(&mut self) -> Result<Option<i64>> {
        loop {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) => {
                    if let Ok(value) = line.trim().parse::<i64>() {
                        return Ok(Some(value));
                    }
                    tracing::debug!(input = %line, "ignoring non-integer answer");
                }
            }
        }
    }

    /// Print `message` and read until an integer in `[min, max]` arrives.
    ///
    /// Malformed and out-of-range input are treated alike: the message is
    /// printed again with no further explanation. `None` at end of input.
    pub fn prompt_integer(&mut self, message: &str, min: i64, max: i64) -> Result<Option<i64>> {
        loop {
            self.println(message)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                _ => tracing::debug!(input = %line, min, max, "rejected prompt input"),
            }
        }
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write to output")?;
        self.output.flush().context("failed to flush output")
    }

    /// Print a line in `color`, or plain when color is off.
    pub fn println_colored(&mut self, text: &str, color: Color) -> Result<()> {
        if self.color {
            let line = format!("{}{text}{RESET}", color.code());
            self.println(&line)
        } else {
            self.println(text)
        }
    }

    /// Clear the screen and reset terminal attributes.
    pub fn clear(&mut self) -> Result<()> {
        write!(self.output, "{CLEAR}{RESET}").context("failed to write to output")?;
        self.output.flush().context("failed to flush output")
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
