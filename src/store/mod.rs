//! # Student Store
//!
//! The data-access layer behind the shell. The shell only talks to the
//! [`StudentStore`] trait; [`SqliteStore`] is the production implementation.
//!
//! ## Table
//!
//! ```text
//! students
//! ├── student_id       INTEGER PRIMARY KEY AUTOINCREMENT
//! ├── first_name       TEXT NOT NULL
//! ├── last_name        TEXT NOT NULL
//! ├── email            TEXT NOT NULL UNIQUE
//! └── enrollment_date  TEXT (ISO date or NULL)
//! ```
//!
//! ## Semantics
//!
//! - `list_students` returns rows ordered by `student_id` ascending.
//! - `update_email` and `delete_student` report rows affected (0 or 1); a
//!   missing id is not an error.
//! - Inserting or updating to an email that already exists fails with
//!   [`UniqueViolation`], which callers can recover with
//!   `report.downcast_ref::<UniqueViolation>()`.
//! - `reset_to_seed` restores the three [`SEED_STUDENTS`] and restarts ids at 1.

mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::parsing::Literal;
use chrono::NaiveDate;
use eyre::Result;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `Literal::None` stores NULL. Anything other than a date is handed to
    /// the database unchanged and rejected there.
    pub enrollment_date: Literal,
}

pub trait StudentStore {
    fn list_students(&mut self) -> Result<Vec<Student>>;

    fn insert_student(&mut self, student: &NewStudent) -> Result<i64>;

    fn update_email(&mut self, student_id: i64, new_email: &str) -> Result<usize>;

    fn delete_student(&mut self, student_id: i64) -> Result<usize>;

    /// Test/demo only.
    fn reset_to_seed(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueViolation {
    pub email: String,
}

impl fmt::Display for UniqueViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a student with email '{}' already exists", self.email)
    }
}

impl std::error::Error for UniqueViolation {}

pub struct SeedStudent {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub enrollment_date: &'static str,
}

pub const SEED_STUDENTS: [SeedStudent; 3] = [
    SeedStudent {
        first_name: "John",
        last_name: "Doe",
        email: "john.doe@example.com",
        enrollment_date: "2023-09-01",
    },
    SeedStudent {
        first_name: "Jane",
        last_name: "Smith",
        email: "jane.smith@example.com",
        enrollment_date: "2023-09-01",
    },
    SeedStudent {
        first_name: "Jim",
        last_name: "Beam",
        email: "jim.beam@example.com",
        enrollment_date: "2023-09-02",
    },
];
