//! # Students CLI Module
//!
//! The interactive function-call shell over the students table. It
//! supports:
//!
//! - Function-call commands such as `addStudent("Ada","Lovelace","ada@x.com")`
//! - ASCII table-formatted listings
//! - `help`, `exit` and `quit` meta-commands
//! - A scripted `demo` walkthrough
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CLI Entry Point                        │
//! │                    (bin/students.rs)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │   Repl (rustyline)         │   ScriptReader (piped stdin)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     Shell state machine                     │
//! │  - meta-commands, parse, lookup, arity, coerce, dispatch    │
//! │  - every failure becomes one printed line                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │   Command table       │   Table formatter   │   ShellError  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  StudentStore (SQLite)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - `commands`: the static command table, meta-commands, help text
//! - `demo`: the `demo` mode walkthrough
//! - `error`: the shell's error taxonomy and its printed form
//! - `input`: the `LineReader` seam and the script reader
//! - `repl`: rustyline-backed interactive front end
//! - `shell`: the per-line state machine and the loop
//! - `table`: ASCII table formatter for student rows

pub mod commands;
pub mod demo;
pub mod error;
pub mod input;
pub mod repl;
pub mod shell;
pub mod table;

pub use demo::run_demo;
pub use error::ShellError;
pub use input::{Input, LineReader, ScriptReader};
pub use repl::Repl;
pub use shell::{CommandResult, Shell, ShellState};
