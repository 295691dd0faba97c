//! # Command Table
//!
//! The fixed set of function-call commands the shell understands and the
//! meta-commands handled before any parsing.
//!
//! ## Function Commands
//!
//! | Name                 | Arity | Parameters                                     |
//! |----------------------|-------|------------------------------------------------|
//! | `getAllStudents`     | 0     |                                                |
//! | `addStudent`         | 3-4   | first_name, last_name, email[, enrollment_date]|
//! | `updateStudentEmail` | 2     | student_id, new_email                          |
//! | `deleteStudent`      | 1     | student_id                                     |
//! | `resetToSeed`        | 0     | (testing only)                                 |
//!
//! ## Meta-Commands
//!
//! `help`, `exit` and `quit` are recognized by the leading run of word
//! characters (`[A-Za-z0-9_]`). Anything after it is ignored, so `exit()`
//! and `help addStudent` are meta-commands too.
//!
//! The table is a `static` array built at compile time. Adding a command
//! means adding a [`Function`] variant, a row here, and an arm in the
//! shell's dispatcher.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    GetAllStudents,
    AddStudent,
    UpdateStudentEmail,
    DeleteStudent,
    ResetToSeed,
}

#[derive(Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub function: Function,
    pub min_args: usize,
    pub max_args: usize,
    pub usage: &'static str,
    pub example: Option<&'static str>,
    pub test_only: bool,
}

impl CommandSpec {
    pub fn accepts(&self, arg_count: usize) -> bool {
        (self.min_args..=self.max_args).contains(&arg_count)
    }
}

pub static COMMANDS: [CommandSpec; 5] = [
    CommandSpec {
        name: "getAllStudents",
        function: Function::GetAllStudents,
        min_args: 0,
        max_args: 0,
        usage: "getAllStudents()",
        example: None,
        test_only: false,
    },
    CommandSpec {
        name: "addStudent",
        function: Function::AddStudent,
        min_args: 3,
        max_args: 4,
        usage: "addStudent(first_name, last_name, email[, enrollment_date])",
        example: Some(r#"addStudent("Alice","Wong","alice.wong@example.com","2023-09-03")"#),
        test_only: false,
    },
    CommandSpec {
        name: "updateStudentEmail",
        function: Function::UpdateStudentEmail,
        min_args: 2,
        max_args: 2,
        usage: "updateStudentEmail(student_id, new_email)",
        example: Some(r#"updateStudentEmail(12,"alice.w@example.edu")"#),
        test_only: false,
    },
    CommandSpec {
        name: "deleteStudent",
        function: Function::DeleteStudent,
        min_args: 1,
        max_args: 1,
        usage: "deleteStudent(student_id)",
        example: Some("deleteStudent(12)"),
        test_only: false,
    },
    CommandSpec {
        name: "resetToSeed",
        function: Function::ResetToSeed,
        min_args: 0,
        max_args: 0,
        usage: "resetToSeed()",
        example: None,
        test_only: true,
    },
];

/// Names are case-sensitive.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Exit,
}

impl MetaCommand {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim_start();
        let end = input
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(input.len());

        match &input[..end] {
            "help" => Some(MetaCommand::Help),
            "exit" | "quit" => Some(MetaCommand::Exit),
            _ => None,
        }
    }
}

pub const INTRO: &str = r#"Function-call shell. Examples:
  getAllStudents()
  addStudent("John","Doe","john.doe@example.com","2023-09-01")
  updateStudentEmail(12,"john.doe@school.edu")
  deleteStudent(12)
Type 'help' for more details. Type 'exit' or 'quit' to leave."#;

pub fn help_text() -> String {
    let mut text = String::from("Accepted commands (exact names):\n");

    for spec in &COMMANDS {
        text.push_str("\n  ");
        text.push_str(spec.usage);
        if spec.test_only {
            text.push_str("\n    - Testing only: restores the seed rows (John, Jane, Jim)");
        }
        if let Some(example) = spec.example {
            text.push_str("\n    - Example:\n      ");
            text.push_str(example);
        }
        text.push('\n');
    }

    text.push_str(
        r#"
Notes:
- Strings must be quoted. Dates should be "YYYY-MM-DD".
- Only literal values are accepted: strings, numbers, true/false, none.
- Whitespace is allowed. Function names are case-sensitive.
- Use exit or quit (or Ctrl+D) to leave."#,
    );

    text
}
