//! # Command Line Parsing
//!
//! Turns a line like `addStudent("Ada", "Lovelace", "ada@x.com", "2023-09-01")`
//! into a [`ParsedCommand`] and converts its literals to parameter types.
//!
//! ## Module Structure
//!
//! - `call`: call-shape matching, `name(args)` to [`ParsedCommand`]
//! - `literal`: restricted literal grammar for the argument list
//! - `coerce`: per-parameter conversion (dates, integers, text)
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌────────────────┐   ┌───────────────┐
//! │   line   │──>│ parse_command│──>│ ParsedCommand  │──>│ coerce_* per  │
//! │  (text)  │   │  (call.rs)   │   │ name + literals│   │ parameter slot│
//! └──────────┘   └──────────────┘   └────────────────┘   └───────────────┘
//! ```
//!
//! No expression is ever evaluated: the literal parser only recognizes
//! strings, numbers, booleans and none.

mod call;
mod coerce;
mod literal;

pub use call::{parse_command, ParseError, ParsedCommand};
pub use coerce::{coerce_date, coerce_int, coerce_text, CoercionError};
pub use literal::{parse_literal_list, Literal, LiteralError, LiteralParser};
