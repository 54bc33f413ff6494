//! Line-oriented prompting over any `BufRead`/`Write` pair.

use std::fmt::Display;
use std::io::{BufRead, ErrorKind, Write};

use stockroom_core::InputError;

use crate::error::{ConsoleError, ConsoleResult};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line.
    pub fn line(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => Err(ConsoleError::InputClosed),
            Ok(_) => Ok(buf.trim().to_string()),
            Err(err) if err.kind() == ErrorKind::InvalidData => Err(ConsoleError::InvalidInput(err)),
            Err(err) => Err(ConsoleError::Io(err)),
        }
    }

    /// Prompt until `parse` accepts the line, printing each rejection.
    pub fn parse_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> ConsoleResult<T> {
        loop {
            let raw = self.line(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Prompt until a non-blank line is entered.
    pub fn non_empty(&mut self, prompt: &str, field: &'static str) -> ConsoleResult<String> {
        self.parse_until(prompt, |raw| {
            if raw.is_empty() {
                Err(InputError::Empty(field))
            } else {
                Ok(raw.to_string())
            }
        })
    }
}

/// Parse a signed 32-bit whole number; anything wider is not a number.
pub fn parse_number(raw: &str) -> Result<i32, InputError> {
    raw.trim().parse().map_err(|_| InputError::InvalidNumber)
}
