//! Fuzz testing for the shell controller.
//!
//! Runs sequences of arbitrary lines through a shell backed by an
//! in-memory SQLite store. Whatever the input, each line must produce a
//! result without panicking, and only exit/quit may terminate the shell.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use students::cli::commands::MetaCommand;
use students::cli::{CommandResult, Shell, ShellState};
use students::store::SqliteStore;

#[derive(Debug, Arbitrary)]
struct SessionInput {
    lines: Vec<String>,
}

fuzz_target!(|input: SessionInput| {
    let store = match SqliteStore::open_in_memory() {
        Ok(store) => store,
        Err(_) => return,
    };
    let mut shell = Shell::new(store);

    for line in input.lines.iter().take(32) {
        let is_exit = MetaCommand::parse(line.trim()) == Some(MetaCommand::Exit);
        let result = shell.handle_line(line);

        if is_exit {
            assert_eq!(result, CommandResult::Exit);
            assert_eq!(shell.state(), ShellState::Terminated);
            break;
        }
        assert_eq!(shell.state(), ShellState::Running);
        assert_ne!(result, CommandResult::Exit);
    }
});
