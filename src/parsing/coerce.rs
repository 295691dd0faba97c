//! # Argument Coercion
//!
//! Converts parsed literals into the types a data operation expects.
//!
//! - [`coerce_date`] promotes an ISO `YYYY-MM-DD` string to a date when it
//!   names a real calendar day. It never fails: anything else is returned
//!   as-is and left for the store to accept or reject.
//! - [`coerce_int`] turns an integer-like literal into an `i64` or fails
//!   with a [`CoercionError`] naming the parameter.
//! - [`coerce_text`] gives the text form of any literal for string-typed
//!   parameters.
//!
//! Only the dispatch layer knows which argument positions are date-typed, so
//! these functions are applied per parameter rather than to the whole list.

use super::literal::Literal;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static ISO_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is a valid regex"));

pub fn coerce_date(value: Literal) -> Literal {
    match value {
        Literal::Str(s) if ISO_DATE_PATTERN.is_match(&s) => {
            match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Ok(date) => Literal::Date(date),
                Err(_) => Literal::Str(s),
            }
        }
        other => other,
    }
}

pub fn coerce_int(parameter: &'static str, value: &Literal) -> Result<i64, CoercionError> {
    let coerced = match value {
        Literal::Int(i) => Some(*i),
        Literal::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
            Some(*f as i64)
        }
        Literal::Str(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    coerced.ok_or_else(|| CoercionError {
        parameter,
        expected: "an integer",
        found: value.clone(),
    })
}

pub fn coerce_text(value: &Literal) -> String {
    value.as_text()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoercionError {
    pub parameter: &'static str,
    pub expected: &'static str,
    pub found: Literal,
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be {}, got {} {}",
            self.parameter,
            self.expected,
            self.found.kind(),
            self.found
        )
    }
}

impl std::error::Error for CoercionError {}
