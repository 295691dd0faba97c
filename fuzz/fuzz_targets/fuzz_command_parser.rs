//! Fuzz testing for the command parser.
//!
//! Feeds arbitrary lines to `parse_command` to make sure malformed input
//! is rejected with an error instead of a panic, and that every accepted
//! command re-renders to text that parses back to the same command.

#![no_main]

use libfuzzer_sys::fuzz_target;

use students::parsing::{coerce_date, parse_command};

fuzz_target!(|line: &str| {
    let Ok(command) = parse_command(line) else {
        return;
    };

    let rendered = command.to_string();
    let reparsed = parse_command(&rendered).expect("rendered command must parse");
    assert_eq!(reparsed, command);

    for arg in command.arguments {
        let once = coerce_date(arg);
        assert_eq!(coerce_date(once.clone()), once);
    }
});
