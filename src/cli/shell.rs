//! # Shell Controller
//!
//! The read-eval-print state machine. A [`Shell`] owns one store and turns
//! each input line into exactly one [`CommandResult`].
//!
//! ## States
//!
//! ```text
//!            ┌──────────────────────────────┐
//!            │ blank / help / any command   │
//!            │ (errors included)            │
//!            ▼                              │
//!      ┌───────────┐  exit, quit, EOF  ┌────────────┐
//!  ───>│  Running  │──────────────────>│ Terminated │
//!      └───────────┘                   └────────────┘
//! ```
//!
//! ## Per-Line Decision Tree
//!
//! 1. Blank line: `Continue`, nothing printed.
//! 2. `help` / `exit` / `quit`: handled directly.
//! 3. Parse `name(args)`; syntax failures are reported.
//! 4. Look the name up in the command table; unknown names are reported.
//! 5. Check arity; a mismatch prints the usage line. The store is not touched.
//! 6. Coerce arguments per parameter and invoke the store.
//! 7. Format the result, or report the store's error.
//!
//! Errors never change state. Only `exit`, `quit` and end of input do.

use super::commands::{self, help_text, Function, MetaCommand};
use super::error::ShellError;
use super::input::{Input, LineReader};
use super::table::TableFormatter;
use crate::config::{FAREWELL, PRIMARY_PROMPT};
use crate::parsing::{coerce_date, coerce_int, coerce_text, parse_command, Literal};
use crate::store::{NewStudent, Student, StudentStore};
use eyre::Result;
use std::io::Write;
use tracing::debug;

pub const NO_ROWS: &str = "(no rows)";
pub const RESET_CONFIRMATION: &str = "Students table reset to initial seed (John, Jane, Jim).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Output(String),
    Exit,
    Continue,
    Error(String),
}

pub struct Shell<S> {
    store: S,
    state: ShellState,
}

impl<S: StudentStore> Shell<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: ShellState::Running,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn handle_line(&mut self, line: &str) -> CommandResult {
        if self.state == ShellState::Terminated {
            return CommandResult::Exit;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::Continue;
        }

        if let Some(meta) = MetaCommand::parse(trimmed) {
            return match meta {
                MetaCommand::Help => CommandResult::Output(help_text()),
                MetaCommand::Exit => {
                    self.state = ShellState::Terminated;
                    CommandResult::Exit
                }
            };
        }

        match self.evaluate(trimmed) {
            Ok(output) => CommandResult::Output(output),
            Err(err) => {
                debug!(error = %err, "command failed");
                CommandResult::Error(err.to_string())
            }
        }
    }

    pub fn end_of_input(&mut self) {
        self.state = ShellState::Terminated;
    }

    /// Drives the loop until `exit`, `quit` or end of input. Only I/O
    /// failures on the reader or writer are returned as errors.
    pub fn run<R, W>(&mut self, reader: &mut R, out: &mut W) -> Result<()>
    where
        R: LineReader,
        W: Write,
    {
        while self.state == ShellState::Running {
            match reader.read_line(PRIMARY_PROMPT)? {
                Input::Line(line) => {
                    reader.add_history(&line);
                    let result = self.handle_line(&line);
                    write_result(out, &result)?;
                }
                Input::Interrupted => writeln!(out, "^C")?,
                Input::Eof => {
                    self.end_of_input();
                    writeln!(out, "{}", FAREWELL)?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    fn evaluate(&mut self, line: &str) -> std::result::Result<String, ShellError> {
        let command = parse_command(line)?;

        let spec = commands::lookup(&command.name)
            .ok_or_else(|| ShellError::UnknownFunction(command.name.clone()))?;

        if !spec.accepts(command.arity()) {
            return Err(ShellError::Arity { usage: spec.usage });
        }

        debug!(function = spec.name, arity = command.arity(), "dispatching command");
        self.invoke(spec.function, command.arguments)
    }

    /// Arity has already been checked, so positional indexing is in bounds.
    fn invoke(
        &mut self,
        function: Function,
        args: Vec<Literal>,
    ) -> std::result::Result<String, ShellError> {
        match function {
            Function::GetAllStudents => {
                let students = self.store.list_students()?;
                Ok(render_students(&students))
            }
            Function::AddStudent => {
                let student = NewStudent {
                    first_name: coerce_text(&args[0]),
                    last_name: coerce_text(&args[1]),
                    email: coerce_text(&args[2]),
                    enrollment_date: args.get(3).cloned().map_or(Literal::None, coerce_date),
                };
                let student_id = self.store.insert_student(&student)?;
                Ok(format!("Added student_id = {}", student_id))
            }
            Function::UpdateStudentEmail => {
                let student_id = coerce_int("student_id", &args[0])?;
                let new_email = coerce_text(&args[1]);
                let updated = self.store.update_email(student_id, &new_email)?;
                Ok(format!("Rows updated = {}", updated))
            }
            Function::DeleteStudent => {
                let student_id = coerce_int("student_id", &args[0])?;
                let deleted = self.store.delete_student(student_id)?;
                Ok(format!("Rows deleted = {}", deleted))
            }
            Function::ResetToSeed => {
                self.store.reset_to_seed()?;
                Ok(RESET_CONFIRMATION.to_string())
            }
        }
    }
}

pub fn render_students(students: &[Student]) -> String {
    if students.is_empty() {
        return NO_ROWS.to_string();
    }

    let formatter = TableFormatter::new(students);
    let count = formatter.row_count();
    format!(
        "{}{} row{} in set",
        formatter.render(),
        count,
        if count == 1 { "" } else { "s" }
    )
}

pub fn write_result<W: Write>(out: &mut W, result: &CommandResult) -> Result<()> {
    match result {
        CommandResult::Output(text) | CommandResult::Error(text) => writeln!(out, "{}", text)?,
        CommandResult::Exit => writeln!(out, "{}", FAREWELL)?,
        CommandResult::Continue => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    fn shell() -> Shell<SqliteStore> {
        Shell::new(SqliteStore::open_in_memory().unwrap())
    }

    fn output(result: CommandResult) -> String {
        match result {
            CommandResult::Output(text) => text,
            other => panic!("Expected Output, got {:?}", other),
        }
    }

    fn error(result: CommandResult) -> String {
        match result {
            CommandResult::Error(text) => text,
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[test]
    fn blank_lines_continue_silently() {
        let mut shell = shell();
        assert_eq!(shell.handle_line(""), CommandResult::Continue);
        assert_eq!(shell.handle_line("   \t"), CommandResult::Continue);
        assert_eq!(shell.state(), ShellState::Running);
    }

    #[test]
    fn exit_and_quit_terminate() {
        for word in ["exit", "quit", "  quit  ", "exit()", "quit()"] {
            let mut shell = shell();
            assert_eq!(shell.handle_line(word), CommandResult::Exit);
            assert_eq!(shell.state(), ShellState::Terminated);
        }
    }

    #[test]
    fn terminated_shell_ignores_further_input() {
        let mut shell = shell();
        shell.end_of_input();
        assert_eq!(shell.handle_line("resetToSeed()"), CommandResult::Exit);
    }

    #[test]
    fn help_keeps_running() {
        let mut shell = shell();
        for line in ["help", "help()"] {
            let text = output(shell.handle_line(line));
            assert!(text.contains("addStudent"));
            assert_eq!(shell.state(), ShellState::Running);
        }
    }

    #[test]
    fn list_renders_seed_rows() {
        let mut shell = shell();
        let text = output(shell.handle_line("getAllStudents()"));

        assert!(text.contains("john.doe@example.com"));
        assert!(text.contains("| Enrolled"));
        assert!(text.ends_with("3 rows in set"));
    }

    #[test]
    fn empty_table_prints_no_rows_marker() {
        let mut shell = shell();
        for id in 1..=3 {
            shell.handle_line(&format!("deleteStudent({})", id));
        }
        assert_eq!(output(shell.handle_line("getAllStudents()")), NO_ROWS);
    }

    #[test]
    fn add_without_date_is_accepted() {
        let mut shell = shell();
        assert_eq!(
            output(shell.handle_line(r#"addStudent("Ada","Lovelace","ada@x.com")"#)),
            "Added student_id = 4"
        );
    }

    #[test]
    fn string_ids_are_coerced() {
        let mut shell = shell();
        assert_eq!(output(shell.handle_line(r#"deleteStudent("2")"#)), "Rows deleted = 1");
    }

    #[test]
    fn non_integer_id_is_a_coercion_error() {
        let mut shell = shell();
        let text = error(shell.handle_line(r#"updateStudentEmail("abc","x@y.com")"#));
        assert_eq!(text, r#"Error: student_id must be an integer, got string "abc""#);
        assert_eq!(shell.state(), ShellState::Running);
    }

    #[test]
    fn invalid_calendar_date_is_rejected_by_store() {
        let mut shell = shell();
        let text = error(shell.handle_line(r#"addStudent("A","B","a@b.c","2023-02-30")"#));
        assert_eq!(
            text,
            "Error: failed to add student: enrollment_date must be a valid YYYY-MM-DD date"
        );
    }

    #[test]
    fn reset_confirms() {
        let mut shell = shell();
        shell.handle_line("deleteStudent(1)");
        assert_eq!(output(shell.handle_line("resetToSeed()")), RESET_CONFIRMATION);
        assert!(output(shell.handle_line("getAllStudents()")).contains("john.doe@example.com"));
    }

    #[test]
    fn write_result_formats_results() {
        let mut buf = Vec::new();
        write_result(&mut buf, &CommandResult::Output("Rows deleted = 1".to_string())).unwrap();
        write_result(&mut buf, &CommandResult::Continue).unwrap();
        write_result(&mut buf, &CommandResult::Exit).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "Rows deleted = 1\nBye!\n");
    }
}
