//! Console output and typed-answer input.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where a review session shows prompts and reads answers.
pub trait Terminal {
    /// Show one line of output.
    fn show(&mut self, line: &str);

    /// Block for one typed answer, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or a storage error if
    /// reading fails.
    fn read_answer(&mut self) -> Result<String>;
}

/// Terminal backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn show(&mut self, line: &str) {
        println!("{line}");
    }

    fn read_answer(&mut self) -> Result<String> {
        io::stdout().flush()?;
        read_answer_line(&mut io::stdin().lock())
    }
}

/// Read one line of input, replacing bytes that are not UTF-8.
///
/// Garbage input still comes back as an answer so it can be scored.
fn read_answer_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    let read = reader.read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Err(Error::InputClosed);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Terminal fed from a fixed list of answers, for testing.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedTerminal {
    /// Create a terminal that answers with `answers` in order.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Lines shown so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Terminal for ScriptedTerminal {
    fn show(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_answer(&mut self) -> Result<String> {
        self.answers.pop_front().ok_or(Error::InputClosed)
    }
}
