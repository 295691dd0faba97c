//! # Shell Errors
//!
//! Every failure a single command can produce. All of them are caught by
//! the shell and printed as one line; none ends the session.
//!
//! | Variant           | Printed as                                   |
//! |-------------------|----------------------------------------------|
//! | `Syntax`          | `*** Unknown syntax: <line>` or              |
//! |                   | `Error: Could not parse arguments: <detail>` |
//! | `UnknownFunction` | `*** Unknown function: <name>`               |
//! | `Arity`           | `*** Usage: <signature>`                     |
//! | `TypeCoercion`    | `Error: <parameter> must be ...`             |
//! | `Operation`       | `Error: <store error chain>`                 |
//!
//! Scripts can detect a failed command by the `Error:` or `***` prefix.

use crate::parsing::{CoercionError, ParseError};
use std::fmt;

#[derive(Debug)]
pub enum ShellError {
    Syntax(ParseError),
    UnknownFunction(String),
    Arity { usage: &'static str },
    TypeCoercion(CoercionError),
    Operation(eyre::Report),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Syntax(err) => write!(f, "{}", err),
            ShellError::UnknownFunction(name) => write!(f, "*** Unknown function: {}", name),
            ShellError::Arity { usage } => write!(f, "*** Usage: {}", usage),
            ShellError::TypeCoercion(err) => write!(f, "Error: {}", err),
            ShellError::Operation(report) => write!(f, "Error: {:#}", report),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Syntax(err) => Some(err),
            ShellError::TypeCoercion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for ShellError {
    fn from(err: ParseError) -> Self {
        ShellError::Syntax(err)
    }
}

impl From<CoercionError> for ShellError {
    fn from(err: CoercionError) -> Self {
        ShellError::TypeCoercion(err)
    }
}

impl From<eyre::Report> for ShellError {
    fn from(report: eyre::Report) -> Self {
        ShellError::Operation(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{coerce_int, parse_command, Literal};
    use eyre::WrapErr;

    #[test]
    fn every_variant_carries_a_failure_prefix() {
        let errors = vec![
            ShellError::from(parse_command("nonsense").unwrap_err()),
            ShellError::from(parse_command("f(x)").unwrap_err()),
            ShellError::UnknownFunction("fooBar".to_string()),
            ShellError::Arity { usage: "deleteStudent(student_id)" },
            ShellError::from(coerce_int("student_id", &Literal::None).unwrap_err()),
            ShellError::from(eyre::eyre!("disk full")),
        ];

        for err in errors {
            let line = err.to_string();
            assert!(
                line.starts_with("Error: ") || line.starts_with("*** "),
                "unprefixed message: {}",
                line
            );
            assert!(!line.contains('\n'));
        }
    }

    #[test]
    fn operation_error_shows_full_chain() {
        let report: eyre::Result<()> = Err(eyre::eyre!("UNIQUE constraint failed"));
        let err = ShellError::from(report.wrap_err("failed to add student").unwrap_err());

        assert_eq!(
            err.to_string(),
            "Error: failed to add student: UNIQUE constraint failed"
        );
    }
}
