//! # Students CLI Entry Point
//!
//! Binary entry point for the students shell.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive shell on ./students.db
//! students
//!
//! # Shell on a specific database file
//! students --db ./data/school.db shell
//!
//! # Scripted CRUD walkthrough
//! students demo
//!
//! # Piped commands (no prompt, same output)
//! printf 'getAllStudents()\n' | students
//! ```

use eyre::{Result, WrapErr};
use std::io::{self, IsTerminal};
use students::cli::{run_demo, Repl, ScriptReader, Shell};
use students::config::{
    Config, Invocation, Mode, DATABASE_ENV_VAR, DEFAULT_DATABASE_FILE, DEMO_STEP_PAUSE,
    HISTORY_ENV_VAR, LOG_ENV_VAR,
};
use students::logging;
use students::store::SqliteStore;
use tracing::debug;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match Config::from_env()? {
        Invocation::Run(config) => config,
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Version => {
            println!("students {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    logging::init(&config.log_filter)?;
    debug!(?config, "resolved configuration");

    let mut store = SqliteStore::open(&config.database_path).wrap_err_with(|| {
        format!(
            "failed to prepare database at {}",
            config.database_path.display()
        )
    })?;

    match config.mode {
        Mode::Demo => run_demo(&mut store, &mut io::stdout(), DEMO_STEP_PAUSE),
        Mode::Shell if io::stdin().is_terminal() => {
            Repl::new(store, config.history_path.clone())?.run()
        }
        Mode::Shell => {
            let mut reader = ScriptReader::new(io::stdin().lock());
            Shell::new(store).run(&mut reader, &mut io::stdout())
        }
    }
}

fn print_usage() {
    println!("students - function-call shell for the students table");
    println!();
    println!("USAGE:");
    println!("    students [OPTIONS] [MODE]");
    println!();
    println!("MODES:");
    println!("    shell              Interactive shell (default)");
    println!("    demo               Walk through add, update and delete");
    println!();
    println!("OPTIONS:");
    println!("    -d, --db <PATH>    Database file (default: {})", DEFAULT_DATABASE_FILE);
    println!("    -V, --verbose      Debug logging to stderr");
    println!("    -h, --help         Print help information");
    println!("    -v, --version      Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    {:<18} Database file when --db is not given", DATABASE_ENV_VAR);
    println!("    {:<18} History file (empty disables history)", HISTORY_ENV_VAR);
    println!("    {:<18} Log filter, e.g. 'info' or 'students=debug'", LOG_ENV_VAR);
}
