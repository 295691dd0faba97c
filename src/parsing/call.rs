//! # Function-Call Command Parsing
//!
//! Splits one line of shell input into a function name and its literal
//! arguments. The line must have the shape `name(args)`:
//!
//! ```text
//! ^\s*([A-Za-z_]\w*)\s*\((.*)\)\s*$
//! ```
//!
//! The argument text is everything between the first `(` and the last `)`
//! and is handed to the literal parser. Lines that do not have the call
//! shape (trailing text after `)`, no parentheses at all) fail with
//! [`ParseError::UnknownSyntax`]; unbalanced parentheses or bad literals
//! inside the call fail with [`ParseError::InvalidArguments`].

use super::literal::{parse_literal_list, Literal, LiteralError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CALL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_]\w*)\s*\((.*)\)\s*$").expect("call pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    pub name: String,
    pub arguments: Vec<Literal>,
}

impl ParsedCommand {
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The line is not shaped like a function call.
    UnknownSyntax(String),
    InvalidArguments(LiteralError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownSyntax(line) => write!(f, "*** Unknown syntax: {}", line),
            ParseError::InvalidArguments(err) => {
                write!(f, "Error: Could not parse arguments: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse_command(line: &str) -> Result<ParsedCommand, ParseError> {
    let captures = CALL_PATTERN
        .captures(line)
        .ok_or_else(|| ParseError::UnknownSyntax(line.trim().to_string()))?;

    let name = captures.get(1).map_or("", |m| m.as_str());
    let args_text = captures.get(2).map_or("", |m| m.as_str());

    let arguments = parse_literal_list(args_text).map_err(ParseError::InvalidArguments)?;

    Ok(ParsedCommand {
        name: name.to_string(),
        arguments,
    })
}
