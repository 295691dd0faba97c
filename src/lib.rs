//! # Students - Function-Call Shell for a Students Table
//!
//! A command-line tool that manages one `students` table through an
//! interactive shell whose commands look like function calls:
//!
//! ```text
//! students> addStudent("Afaq","Virk","afaq@x.com","2023-09-03")
//! Added student_id = 4
//! students> updateStudentEmail(9999,"x@y.com")
//! Rows updated = 0
//! students> fooBar()
//! *** Unknown function: fooBar
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use students::cli::{ScriptReader, Shell};
//! use students::store::SqliteStore;
//!
//! let store = SqliteStore::open("./students.db")?;
//! let mut shell = Shell::new(store);
//! shell.run(&mut ScriptReader::new(std::io::stdin().lock()), &mut std::io::stdout())?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      bin/students.rs (startup)      │
//! ├─────────────────────────────────────┤
//! │   cli: REPL, shell state machine    │
//! ├─────────────────────────────────────┤
//! │   parsing: call shape, literals,    │
//! │            coercion                 │
//! ├─────────────────────────────────────┤
//! │   store: StudentStore over SQLite   │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`cli`]: REPL, shell controller, command table, table output, demo
//! - [`parsing`]: `name(args)` parsing with a literal-only argument grammar
//! - [`store`]: the `StudentStore` trait and its SQLite implementation
//! - [`config`]: startup configuration and constants
//! - [`logging`]: tracing subscriber setup

pub mod cli;
pub mod config;
pub mod logging;
pub mod parsing;
pub mod store;

pub use cli::{CommandResult, Shell, ShellError, ShellState};
pub use parsing::{Literal, ParsedCommand};
pub use store::{NewStudent, SqliteStore, Student, StudentStore, UniqueViolation};
