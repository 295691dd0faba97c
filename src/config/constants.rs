//! # Shell Configuration Constants
//!
//! All fixed names and defaults used by the binary, the REPL, and the store
//! live here so the CLI front end and the integration tests agree on them.
//!
//! ## Environment Variables
//!
//! ```text
//! STUDENTS_DB        database file path      (default: ./students.db)
//! STUDENTS_HISTORY   REPL history file       (default: ~/.students_history, "" disables)
//! STUDENTS_LOG       tracing EnvFilter spec  (default: warn)
//! ```
//!
//! Command-line flags take precedence over the environment.

use std::time::Duration;

pub const DATABASE_ENV_VAR: &str = "STUDENTS_DB";
pub const DEFAULT_DATABASE_FILE: &str = "students.db";

pub const HISTORY_ENV_VAR: &str = "STUDENTS_HISTORY";
pub const DEFAULT_HISTORY_FILE: &str = ".students_history";

pub const LOG_ENV_VAR: &str = "STUDENTS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

pub const PRIMARY_PROMPT: &str = "students> ";
pub const FAREWELL: &str = "Bye!";

/// How long SQLite waits on a locked database before failing the statement.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Delay between steps of the `demo` walkthrough.
pub const DEMO_STEP_PAUSE: Duration = Duration::from_secs(2);
