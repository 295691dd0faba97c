//! # Argument Literal Parsing
//!
//! A small recursive-descent parser for the argument list of a shell
//! function call. Only literal values are accepted; identifiers, nested
//! calls and operators are rejected, so nothing typed at the prompt is
//! ever evaluated.
//!
//! ## Grammar
//!
//! ```text
//! list     := ws ( literal ws ( ',' ws literal ws )* ( ',' ws )? )?
//! literal  := string | number | keyword
//! string   := '"' char* '"' | '\'' char* '\''
//! number   := [+-]? digits ( '.' digits? )? ( [eE] [+-]? digits )?
//!           | [+-]? '.' digits ( [eE] [+-]? digits )?
//! keyword  := true | false | none | null        (case-insensitive)
//! ```
//!
//! A number containing `.` or an exponent is a float, otherwise an integer.
//! Strings support the escapes `\n \t \r \0 \\ \' \"`; any other escape is
//! kept verbatim, backslash included.
//!
//! ## Usage
//!
//! ```ignore
//! use students::parsing::{parse_literal_list, Literal};
//!
//! let args = parse_literal_list(r#""John", 42, 3.5, true, none"#)?;
//! assert_eq!(args[1], Literal::Int(42));
//! ```

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
}

impl Literal {
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::None => "none",
            Literal::Bool(_) => "boolean",
            Literal::Int(_) => "integer",
            Literal::Float(_) => "float",
            Literal::Str(_) => "string",
            Literal::Date(_) => "date",
        }
    }

    /// Plain text form used when a literal fills a string-typed parameter.
    /// Keywords are capitalized (`None`, `True`, `False`) whatever case
    /// they were typed in.
    pub fn as_text(&self) -> String {
        match self {
            Literal::None => "None".to_string(),
            Literal::Bool(true) => "True".to_string(),
            Literal::Bool(false) => "False".to_string(),
            Literal::Int(i) => i.to_string(),
            Literal::Float(f) => format!("{:?}", f),
            Literal::Str(s) => s.clone(),
            Literal::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Renders the literal as argument source text that parses back to an
/// equivalent value. Dates render as their ISO string.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => write!(f, "none"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(v) => write!(f, "{:?}", v),
            Literal::Str(s) => write_quoted(f, s),
            Literal::Date(d) => write!(f, "\"{}\"", d.format("%Y-%m-%d")),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    pub message: String,
    /// Byte offset into the argument text.
    pub position: usize,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column {}", self.message, self.position + 1)
    }
}

impl std::error::Error for LiteralError {}

pub fn parse_literal_list(input: &str) -> Result<Vec<Literal>, LiteralError> {
    LiteralParser::new(input).parse_list()
}

pub struct LiteralParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn parse_list(mut self) -> Result<Vec<Literal>, LiteralError> {
        let mut values = Vec::new();

        self.skip_whitespace();
        if self.at_end() {
            return Ok(values);
        }

        loop {
            values.push(self.parse_literal()?);
            self.skip_whitespace();

            match self.peek() {
                None => break,
                Some(',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.at_end() {
                        break;
                    }
                }
                Some(c) => {
                    return Err(self.error(format!(
                        "expected ',' or end of arguments, found '{}'",
                        c
                    )))
                }
            }
        }

        Ok(values)
    }

    fn parse_literal(&mut self) -> Result<Literal, LiteralError> {
        match self.peek() {
            None => Err(self.error("expected a literal")),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote),
            Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => self.parse_number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.parse_keyword(),
            Some(',') => Err(self.error("expected a literal before ','")),
            Some(c) => Err(self.error(format!("unexpected character '{}'", c))),
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<Literal, LiteralError> {
        let start = self.pos;
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error_at(start, "unterminated string literal")),
                Some(c) if c == quote => break,
                Some('\\') => match self.bump() {
                    None => return Err(self.error_at(start, "unterminated string literal")),
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('0') => value.push('\0'),
                    Some('\\') => value.push('\\'),
                    Some('\'') => value.push('\''),
                    Some('"') => value.push('"'),
                    Some(other) => {
                        value.push('\\');
                        value.push(other);
                    }
                },
                Some(c) => value.push(c),
            }
        }

        Ok(Literal::Str(value))
    }

    fn parse_number(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        let mut is_float = false;

        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }

        let mut mantissa_digits = self.eat_digits();
        if self.peek() == Some('.') {
            is_float = true;
            self.bump();
            mantissa_digits += self.eat_digits();
        }
        if mantissa_digits == 0 {
            return Err(self.error_at(start, "expected digits in numeric literal"));
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.eat_digits() == 0 {
                return Err(self.error_at(start, "expected digits in exponent"));
            }
        }

        if matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_' || c == '.') {
            return Err(self.error_at(start, format!("invalid numeric literal '{}'", self.word_from(start))));
        }

        let text = &self.input[start..self.pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Literal::Float(v)),
                _ => Err(self.error_at(start, format!("float literal '{}' out of range", text))),
            }
        } else {
            text.parse::<i64>()
                .map(Literal::Int)
                .map_err(|_| self.error_at(start, format!("integer literal '{}' out of range", text)))
        }
    }

    fn parse_keyword(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        let word = &self.input[start..self.pos];

        match word.to_ascii_lowercase().as_str() {
            "true" => Ok(Literal::Bool(true)),
            "false" => Ok(Literal::Bool(false)),
            "none" | "null" => Ok(Literal::None),
            _ => Err(self.error_at(
                start,
                format!("unexpected identifier '{}': only literal values are allowed", word),
            )),
        }
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
            count += 1;
        }
        count
    }

    /// Slice from `start` through the end of the current run of word characters.
    fn word_from(&self, start: usize) -> &'a str {
        let rest = &self.input[self.pos..];
        let extra = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
            .unwrap_or(rest.len());
        &self.input[start..self.pos + extra]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn error(&self, message: impl Into<String>) -> LiteralError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, position: usize, message: impl Into<String>) -> LiteralError {
        LiteralError {
            message: message.into(),
            position,
        }
    }
}
