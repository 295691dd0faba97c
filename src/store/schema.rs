//! DDL and seed statements for the `students` table.

use super::SEED_STUDENTS;
use eyre::{Result, WrapErr};
use rusqlite::{params, Connection};
use tracing::debug;

/// `date(x) IS x` only holds for calendar-valid `YYYY-MM-DD` text, so the
/// CHECK rejects `2023-02-30`, free text and numbers while allowing NULL.
const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS students (
        student_id      INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name      TEXT NOT NULL,
        last_name       TEXT NOT NULL,
        email           TEXT NOT NULL UNIQUE,
        enrollment_date TEXT CHECK (
            enrollment_date IS NULL OR date(enrollment_date) IS enrollment_date
        )
    )";

const INSERT_SEED: &str = "
    INSERT INTO students (first_name, last_name, email, enrollment_date)
    VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT (email) DO NOTHING";

pub(super) fn ensure_table_and_seed(conn: &mut Connection) -> Result<()> {
    let tx = conn
        .transaction()
        .wrap_err("failed to begin schema transaction")?;

    tx.execute(CREATE_TABLE, [])
        .wrap_err("failed to create students table")?;

    let mut seeded = 0;
    for seed in &SEED_STUDENTS {
        seeded += tx
            .execute(
                INSERT_SEED,
                params![seed.first_name, seed.last_name, seed.email, seed.enrollment_date],
            )
            .wrap_err_with(|| format!("failed to seed student {}", seed.email))?;
    }

    tx.commit().wrap_err("failed to commit schema")?;
    debug!(seeded, "students table ready");
    Ok(())
}

pub(super) fn reset_to_seed(conn: &mut Connection) -> Result<()> {
    let tx = conn
        .transaction()
        .wrap_err("failed to begin reset transaction")?;

    tx.execute("DELETE FROM students", [])
        .wrap_err("failed to clear students table")?;
    tx.execute("DELETE FROM sqlite_sequence WHERE name = 'students'", [])
        .wrap_err("failed to restart student ids")?;

    for seed in &SEED_STUDENTS {
        tx.execute(
            INSERT_SEED,
            params![seed.first_name, seed.last_name, seed.email, seed.enrollment_date],
        )
        .wrap_err_with(|| format!("failed to reseed student {}", seed.email))?;
    }

    tx.commit().wrap_err("failed to commit reset")
}
