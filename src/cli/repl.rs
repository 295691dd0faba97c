//! # REPL - Interactive Front End
//!
//! Wraps a [`Shell`] with a rustyline editor:
//!
//! - Line editing and history (loaded at start, saved on exit)
//! - `students> ` prompt
//! - Ctrl+C discards the current line, Ctrl+D leaves the shell
//!
//! The loop itself lives in [`Shell::run`]; this module only supplies the
//! terminal-backed [`LineReader`].
//!
//! ## Error Handling
//!
//! Command errors are printed and the REPL keeps going. Only a failure of
//! the terminal itself ends the session early; history is still saved.

use super::commands::INTRO;
use super::input::{Input, LineReader};
use super::shell::Shell;
use crate::store::StudentStore;
use eyre::{eyre, Result, WrapErr};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;
use std::path::PathBuf;
use tracing::warn;

pub struct EditorReader {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl EditorReader {
    pub fn new(history_file: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new().wrap_err("failed to initialize line editor")?;

        if let Some(path) = &history_file {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_file,
        })
    }

    pub fn save_history(&mut self) {
        if let Some(path) = &self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "could not save history");
            }
        }
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(eyre!("error reading input: {}", err)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            self.editor.add_history_entry(trimmed).ok();
        }
    }
}

pub struct Repl<S> {
    shell: Shell<S>,
    reader: EditorReader,
}

impl<S: StudentStore> Repl<S> {
    pub fn new(store: S, history_file: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            shell: Shell::new(store),
            reader: EditorReader::new(history_file)?,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", INTRO);

        let mut stdout = io::stdout();
        let result = self.shell.run(&mut self.reader, &mut stdout);
        self.reader.save_history();
        result
    }
}
