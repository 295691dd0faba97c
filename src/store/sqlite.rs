//! # SQLite-backed Student Store
//!
//! Owns a single `rusqlite::Connection`. Opening a store makes sure the
//! database file (and its parent directory) exists, then creates the
//! `students` table and seed rows if they are missing.
//!
//! Every write runs as one statement in autocommit mode, except
//! `reset_to_seed`, which clears and reseeds inside one transaction.

use super::schema;
use super::{NewStudent, Student, StudentStore, UniqueViolation};
use crate::config::BUSY_TIMEOUT;
use crate::parsing::Literal;
use eyre::{Result, WrapErr};
use rusqlite::types::{ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::{ffi, params, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const INVALID_ENROLLMENT_DATE: &str = "enrollment_date must be a valid YYYY-MM-DD date";

pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).wrap_err_with(|| {
                    format!("failed to create database directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .wrap_err_with(|| format!("failed to open database at {}", path.display()))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .wrap_err("failed to set busy timeout")?;

        let store = Self::from_connection(conn, Some(path.to_path_buf()))?;
        info!(path = %path.display(), "opened student database");
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().wrap_err("failed to open in-memory database")?;
        Self::from_connection(conn, None)
    }

    fn from_connection(mut conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        schema::ensure_table_and_seed(&mut conn)?;
        Ok(Self { conn, path })
    }

    /// `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl StudentStore for SqliteStore {
    fn list_students(&mut self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT student_id, first_name, last_name, email, enrollment_date
                 FROM students
                 ORDER BY student_id",
            )
            .wrap_err("failed to prepare student listing")?;

        let students = stmt
            .query_map([], |row| {
                Ok(Student {
                    student_id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    email: row.get(3)?,
                    enrollment_date: row.get(4)?,
                })
            })
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .wrap_err("failed to list students")?;

        Ok(students)
    }

    fn insert_student(&mut self, student: &NewStudent) -> Result<i64> {
        let student_id: i64 = self
            .conn
            .query_row(
                "INSERT INTO students (first_name, last_name, email, enrollment_date)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING student_id",
                params![
                    student.first_name,
                    student.last_name,
                    student.email,
                    student.enrollment_date
                ],
                |row| row.get(0),
            )
            .map_err(|e| write_error(e, &student.email, "failed to add student"))?;

        debug!(student_id, email = %student.email, "inserted student");
        Ok(student_id)
    }

    fn update_email(&mut self, student_id: i64, new_email: &str) -> Result<usize> {
        let updated = self
            .conn
            .execute(
                "UPDATE students SET email = ?1 WHERE student_id = ?2",
                params![new_email, student_id],
            )
            .map_err(|e| write_error(e, new_email, "failed to update student email"))?;

        debug!(student_id, updated, "updated student email");
        Ok(updated)
    }

    fn delete_student(&mut self, student_id: i64) -> Result<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM students WHERE student_id = ?1", params![student_id])
            .wrap_err("failed to delete student")?;

        debug!(student_id, deleted, "deleted student");
        Ok(deleted)
    }

    fn reset_to_seed(&mut self) -> Result<()> {
        schema::reset_to_seed(&mut self.conn)?;
        info!("students table reset to seed data");
        Ok(())
    }
}

fn write_error(err: rusqlite::Error, email: &str, context: &'static str) -> eyre::Report {
    if is_unique_violation(&err) {
        UniqueViolation {
            email: email.to_string(),
        }
        .into()
    } else if is_check_violation(&err) {
        eyre::eyre!(INVALID_ENROLLMENT_DATE).wrap_err(context)
    } else {
        eyre::Report::new(err).wrap_err(context)
    }
}

/// Only `enrollment_date` carries a CHECK constraint.
fn is_check_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_CHECK
    )
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl ToSql for Literal {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Literal::None => ToSqlOutput::Owned(Value::Null),
            Literal::Bool(b) => ToSqlOutput::Owned(Value::Integer(i64::from(*b))),
            Literal::Int(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            Literal::Float(f) => ToSqlOutput::Owned(Value::Real(*f)),
            Literal::Str(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Literal::Date(d) => ToSqlOutput::Owned(Value::Text(d.format("%Y-%m-%d").to_string())),
        })
    }
}
