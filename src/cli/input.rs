//! # Line Input
//!
//! The shell loop reads from a [`LineReader`] so the same loop drives the
//! interactive rustyline editor and piped scripts.

use eyre::{Result, WrapErr};
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl+C at the prompt.
    Interrupted,
    Eof,
}

pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;

    fn add_history(&mut self, _line: &str) {}
}

/// Reads newline-separated commands without printing prompts.
pub struct ScriptReader<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> LineReader for ScriptReader<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Input> {
        self.buf.clear();
        let read = self
            .reader
            .read_line(&mut self.buf)
            .wrap_err("failed to read input")?;

        if read == 0 {
            return Ok(Input::Eof);
        }

        Ok(Input::Line(self.buf.trim_end_matches(['\n', '\r']).to_string()))
    }
}
