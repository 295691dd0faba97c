//! # Startup Configuration
//!
//! Resolves what the binary should do from its arguments and environment.
//! Resolution is a pure function of the argument list and an environment
//! lookup closure, so it can be tested without touching the process
//! environment.
//!
//! ## Precedence
//!
//! 1. Command-line flags (`--db`, `--verbose`)
//! 2. Environment variables (`STUDENTS_DB`, `STUDENTS_LOG`, `STUDENTS_HISTORY`)
//! 3. Built-in defaults from [`constants`]
//!
//! ## Usage
//!
//! ```ignore
//! use students::config::{Config, Invocation};
//!
//! match Config::from_env()? {
//!     Invocation::Run(config) => { /* open store, start shell */ }
//!     Invocation::Help => print_usage(),
//!     Invocation::Version => print_version(),
//! }
//! ```

pub mod constants;
pub use constants::*;

use eyre::{bail, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Shell,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub history_path: Option<PathBuf>,
    pub log_filter: String,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
    Version,
}

impl Config {
    pub fn from_env() -> Result<Invocation> {
        Self::resolve(env::args().skip(1), |key| env::var(key).ok())
    }

    /// `args` excludes the program name.
    pub fn resolve<I, F>(args: I, lookup: F) -> Result<Invocation>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut mode: Option<Mode> = None;
        let mut database_path: Option<PathBuf> = None;
        let mut verbose = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Invocation::Help),
                "--version" | "-v" => return Ok(Invocation::Version),
                "--verbose" | "-V" => verbose = true,
                "--db" | "-d" => match args.next() {
                    Some(path) if !path.is_empty() => database_path = Some(PathBuf::from(path)),
                    _ => bail!("{} requires a database path", arg),
                },
                opt if opt.starts_with('-') => bail!("Unknown option: {}", opt),
                positional => {
                    if mode.is_some() {
                        bail!("Multiple modes specified");
                    }
                    mode = Some(match positional {
                        "shell" => Mode::Shell,
                        "demo" => Mode::Demo,
                        other => bail!("Unknown mode '{}': expected 'shell' or 'demo'", other),
                    });
                }
            }
        }

        let database_path = match database_path {
            Some(path) => path,
            None => match lookup(DATABASE_ENV_VAR) {
                Some(value) if value.is_empty() => {
                    bail!("{} is set but empty; unset it or give a file path", DATABASE_ENV_VAR)
                }
                Some(value) => PathBuf::from(value),
                None => PathBuf::from(DEFAULT_DATABASE_FILE),
            },
        };

        let log_filter = if verbose {
            VERBOSE_LOG_FILTER.to_string()
        } else {
            lookup(LOG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
        };

        let history_path = resolve_history_path(lookup(HISTORY_ENV_VAR), lookup("HOME"));

        Ok(Invocation::Run(Config {
            database_path,
            history_path,
            log_filter,
            mode: mode.unwrap_or(Mode::Shell),
        }))
    }
}

/// An explicitly empty override disables history persistence.
pub fn resolve_history_path(custom: Option<String>, home: Option<String>) -> Option<PathBuf> {
    if let Some(custom_path) = custom {
        if custom_path.is_empty() {
            return None;
        }
        return Some(PathBuf::from(custom_path));
    }

    home.map(|home| PathBuf::from(home).join(DEFAULT_HISTORY_FILE))
}
