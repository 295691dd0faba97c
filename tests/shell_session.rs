//! # Shell Session Integration Tests
//!
//! End-to-end tests that drive the shell loop the way a user or a piped
//! script does, through the public API only.
//!
//! ## Test Categories
//!
//! 1. **Dispatch guards**: unknown functions, arity and syntax errors never
//!    reach the store (checked with a recording store)
//! 2. **CRUD scenarios**: add/list/update/delete against a real SQLite file
//! 3. **Error reporting**: every failure is one prefixed line and the loop
//!    keeps running
//! 4. **Termination**: `exit`, `quit` and end of input; Ctrl-C only
//!    discards the current line
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test --test shell_session
//! ```

use std::io::Cursor;
use std::collections::VecDeque;
use students::cli::{Input, LineReader, ScriptReader};
use students::{
    CommandResult, NewStudent, Shell, ShellState, SqliteStore, Student, StudentStore,
};
use tempfile::tempdir;

/// Counts every call so tests can prove the store was never reached.
#[derive(Default)]
struct RecordingStore {
    calls: Vec<&'static str>,
}

impl StudentStore for RecordingStore {
    fn list_students(&mut self) -> eyre::Result<Vec<Student>> {
        self.calls.push("list_students");
        Ok(Vec::new())
    }

    fn insert_student(&mut self, _student: &NewStudent) -> eyre::Result<i64> {
        self.calls.push("insert_student");
        Ok(1)
    }

    fn update_email(&mut self, _student_id: i64, _new_email: &str) -> eyre::Result<usize> {
        self.calls.push("update_email");
        Ok(0)
    }

    fn delete_student(&mut self, _student_id: i64) -> eyre::Result<usize> {
        self.calls.push("delete_student");
        Ok(0)
    }

    fn reset_to_seed(&mut self) -> eyre::Result<()> {
        self.calls.push("reset_to_seed");
        Ok(())
    }
}

/// Replays a fixed sequence of reader events, then reports end of input.
struct ScriptedEvents {
    events: VecDeque<Input>,
    history: Vec<String>,
}

impl ScriptedEvents {
    fn new(events: impl IntoIterator<Item = Input>) -> Self {
        Self {
            events: events.into_iter().collect(),
            history: Vec::new(),
        }
    }
}

impl LineReader for ScriptedEvents {
    fn read_line(&mut self, _prompt: &str) -> eyre::Result<Input> {
        Ok(self.events.pop_front().unwrap_or(Input::Eof))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

fn run_script<S: StudentStore>(shell: &mut Shell<S>, script: &str) -> String {
    let mut reader = ScriptReader::new(Cursor::new(script.to_string()));
    let mut out = Vec::new();
    shell.run(&mut reader, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn file_shell() -> (tempfile::TempDir, Shell<SqliteStore>) {
    let dir = tempdir().unwrap();
    let store = SqliteStore::open(dir.path().join("students.db")).unwrap();
    (dir, Shell::new(store))
}

fn text(result: CommandResult) -> String {
    match result {
        CommandResult::Output(text) | CommandResult::Error(text) => text,
        other => panic!("Expected printed text, got {:?}", other),
    }
}

mod dispatch_guard_tests {
    use super::*;

    #[test]
    fn arity_violations_print_usage_and_never_query_store() {
        let mut shell = Shell::new(RecordingStore::default());

        assert_eq!(
            shell.handle_line(r#"addStudent("A")"#),
            CommandResult::Error(
                "*** Usage: addStudent(first_name, last_name, email[, enrollment_date])"
                    .to_string()
            )
        );
        assert_eq!(
            shell.handle_line("getAllStudents(1)"),
            CommandResult::Error("*** Usage: getAllStudents()".to_string())
        );
        assert_eq!(
            shell.handle_line(r#"addStudent("a","b","c","2023-09-01","extra")"#),
            CommandResult::Error(
                "*** Usage: addStudent(first_name, last_name, email[, enrollment_date])"
                    .to_string()
            )
        );

        assert!(shell.store().calls.is_empty());
        assert_eq!(shell.state(), ShellState::Running);
    }

    #[test]
    fn unknown_function_is_reported_without_store_access() {
        let mut shell = Shell::new(RecordingStore::default());

        assert_eq!(
            shell.handle_line("fooBar()"),
            CommandResult::Error("*** Unknown function: fooBar".to_string())
        );
        assert!(shell.store().calls.is_empty());
    }

    #[test]
    fn syntax_errors_are_reported_without_store_access() {
        let mut shell = Shell::new(RecordingStore::default());

        let cases = [
            ("drop table students", "*** Unknown syntax: drop table students"),
            ("deleteStudent(1) ; rm", "*** Unknown syntax: deleteStudent(1) ; rm"),
            (
                r#"addStudent("a", __import__("os"), "c")"#,
                "Error: Could not parse arguments: unexpected identifier '__import__'",
            ),
            ("deleteStudent(1 + 1)", "Error: Could not parse arguments: expected ','"),
            (r#"addStudent("unterminated)"#, "Error: Could not parse arguments: unterminated"),
        ];

        for (line, expected_prefix) in cases {
            let printed = text(shell.handle_line(line));
            assert!(
                printed.starts_with(expected_prefix),
                "{:?} printed {:?}",
                line,
                printed
            );
        }

        assert!(shell.store().calls.is_empty());
    }

    #[test]
    fn coercion_errors_do_not_reach_store() {
        let mut shell = Shell::new(RecordingStore::default());

        let printed = text(shell.handle_line("deleteStudent(none)"));
        assert_eq!(printed, "Error: student_id must be an integer, got none none");
        assert!(shell.store().calls.is_empty());
    }

    #[test]
    fn well_formed_commands_dispatch_to_matching_operation() {
        let mut shell = Shell::new(RecordingStore::default());

        shell.handle_line("getAllStudents()");
        shell.handle_line(r#"addStudent("a","b","c")"#);
        shell.handle_line(r#"updateStudentEmail(1,"x@y.com")"#);
        shell.handle_line("deleteStudent(1)");
        shell.handle_line("resetToSeed()");

        assert_eq!(
            shell.store().calls,
            vec![
                "list_students",
                "insert_student",
                "update_email",
                "delete_student",
                "reset_to_seed"
            ]
        );
    }
}

mod crud_scenario_tests {
    use super::*;

    #[test]
    fn added_student_appears_in_listing() {
        let (_dir, mut shell) = file_shell();

        let added = text(shell.handle_line(r#"addStudent("Afaq","Virk","afaq@x.com","2023-09-03")"#));
        assert_eq!(added, "Added student_id = 4");

        let listing = text(shell.handle_line("getAllStudents()"));
        let row = listing
            .lines()
            .find(|line| line.contains("afaq@x.com"))
            .unwrap_or_else(|| panic!("no row for new student in:\n{}", listing));
        assert!(row.starts_with("|  4 | Afaq"), "row: {}", row);
        assert!(row.contains("Virk"));
        assert!(row.contains("2023-09-03"));
    }

    #[test]
    fn updating_missing_student_reports_zero_rows() {
        let (_dir, mut shell) = file_shell();

        assert_eq!(
            shell.handle_line(r#"updateStudentEmail(9999,"x@y.com")"#),
            CommandResult::Output("Rows updated = 0".to_string())
        );
        assert_eq!(
            shell.handle_line("deleteStudent(9999)"),
            CommandResult::Output("Rows deleted = 0".to_string())
        );
    }

    #[test]
    fn duplicate_email_is_an_error_and_row_count_is_unchanged() {
        let (_dir, mut shell) = file_shell();

        let first = text(shell.handle_line(r#"addStudent("A","B","dup@x.com","2023-09-01")"#));
        assert!(first.starts_with("Added student_id = "));

        let second = shell.handle_line(r#"addStudent("A","B","dup@x.com","2023-09-01")"#);
        assert_eq!(
            second,
            CommandResult::Error("Error: a student with email 'dup@x.com' already exists".to_string())
        );
        assert_eq!(shell.state(), ShellState::Running);

        let students = shell.store_mut().list_students().unwrap();
        assert_eq!(students.len(), 4);
    }

    #[test]
    fn update_then_delete_round_trip() {
        let (_dir, mut shell) = file_shell();

        assert_eq!(
            text(shell.handle_line(r#"updateStudentEmail(1, "john@school.edu")"#)),
            "Rows updated = 1"
        );
        assert_eq!(text(shell.handle_line("deleteStudent(1)")), "Rows deleted = 1");

        let listing = text(shell.handle_line("getAllStudents()"));
        assert!(!listing.contains("john@school.edu"));
        assert!(listing.ends_with("2 rows in set"));
    }

    #[test]
    fn data_persists_across_store_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.db");

        {
            let mut shell = Shell::new(SqliteStore::open(&path).unwrap());
            shell.handle_line(r#"addStudent("Kept","Row","kept@x.com")"#);
        }

        let mut shell = Shell::new(SqliteStore::open(&path).unwrap());
        assert!(text(shell.handle_line("getAllStudents()")).contains("kept@x.com"));
    }
}

mod session_loop_tests {
    use super::*;

    #[test]
    fn blank_lines_print_nothing() {
        let (_dir, mut shell) = file_shell();

        let out = run_script(&mut shell, "\n   \n\t\n");
        assert_eq!(out, "Bye!\n");
    }

    #[test]
    fn errors_do_not_stop_the_script() {
        let (_dir, mut shell) = file_shell();

        let out = run_script(
            &mut shell,
            "fooBar()\nnot a call\ndeleteStudent(\"x\")\ndeleteStudent(3)\n",
        );
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            vec![
                "*** Unknown function: fooBar",
                "*** Unknown syntax: not a call",
                r#"Error: student_id must be an integer, got string "x""#,
                "Rows deleted = 1",
                "Bye!",
            ]
        );
    }

    #[test]
    fn exit_stops_reading_remaining_lines() {
        let mut shell = Shell::new(RecordingStore::default());

        let out = run_script(&mut shell, "exit\ngetAllStudents()\n");
        assert_eq!(out, "Bye!\n");
        assert_eq!(shell.state(), ShellState::Terminated);
        assert!(shell.store().calls.is_empty());
    }

    #[test]
    fn quit_behaves_like_exit() {
        let mut shell = Shell::new(RecordingStore::default());

        let out = run_script(&mut shell, "quit\n");
        assert_eq!(out, "Bye!\n");
        assert_eq!(shell.state(), ShellState::Terminated);
    }

    #[test]
    fn end_of_input_terminates() {
        let mut shell = Shell::new(RecordingStore::default());

        let out = run_script(&mut shell, "getAllStudents()");
        assert_eq!(out, "(no rows)\nBye!\n");
        assert_eq!(shell.state(), ShellState::Terminated);
    }

    #[test]
    fn help_prints_usage_and_continues() {
        let mut shell = Shell::new(RecordingStore::default());

        let out = run_script(&mut shell, "help\ngetAllStudents()\n");
        assert!(out.contains("Accepted commands"));
        assert!(out.contains("(no rows)"));
    }

    #[test]
    fn call_form_exit_stops_the_session() {
        for script in ["exit()\ngetAllStudents()\n", "quit()\ngetAllStudents()\n"] {
            let mut shell = Shell::new(RecordingStore::default());

            let out = run_script(&mut shell, script);
            assert_eq!(out, "Bye!\n");
            assert_eq!(shell.state(), ShellState::Terminated);
            assert!(shell.store().calls.is_empty());
        }
    }

    #[test]
    fn interrupt_discards_the_line_and_keeps_running() {
        let mut shell = Shell::new(RecordingStore::default());
        let mut reader = ScriptedEvents::new([
            Input::Interrupted,
            Input::Line("getAllStudents()".to_string()),
            Input::Interrupted,
        ]);
        let mut out = Vec::new();

        shell.run(&mut reader, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "^C\n(no rows)\n^C\nBye!\n");
        assert_eq!(shell.store().calls, vec!["list_students"]);
        assert_eq!(reader.history, vec!["getAllStudents()"]);
        assert_eq!(shell.state(), ShellState::Terminated);
    }
}
