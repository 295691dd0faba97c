//! Diagnostic logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer so they never
//! mix with shell output on stdout. The filter uses `EnvFilter` syntax
//! (`warn`, `students=debug`, ...) and comes from `--verbose` or
//! `STUDENTS_LOG`.

use eyre::{eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

pub fn init(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter)
        .wrap_err_with(|| format!("invalid log filter '{}'", filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {}", e))
}
