//! # Demo Walkthrough
//!
//! Non-interactive tour of the four CRUD operations against the real store:
//! list, add a student, update their email, delete them, listing the table
//! after each step.

use super::shell::render_students;
use crate::parsing::Literal;
use crate::store::{NewStudent, StudentStore};
use chrono::NaiveDate;
use eyre::{eyre, Result, WrapErr};
use std::io::Write;
use std::thread;
use std::time::Duration;

const DEMO_EMAIL: &str = "afaq.virk@example.com";
const DEMO_UPDATED_EMAIL: &str = "afaq.virk@example.edu";

pub fn run_demo<S, W>(store: &mut S, out: &mut W, pause: Duration) -> Result<()>
where
    S: StudentStore,
    W: Write,
{
    print_students(store, out, "Initial students")?;
    sleep(pause);

    writeln!(out, "\nAdding a new student...")?;
    let enrolled = NaiveDate::from_ymd_opt(2023, 9, 3).ok_or_else(|| eyre!("invalid demo date"))?;
    let student_id = store
        .insert_student(&NewStudent {
            first_name: "Afaq".to_string(),
            last_name: "Virk".to_string(),
            email: DEMO_EMAIL.to_string(),
            enrollment_date: Literal::Date(enrolled),
        })
        .wrap_err("demo could not add its student")?;
    writeln!(out, "Added student_id = {}", student_id)?;
    print_students(store, out, "After add")?;
    sleep(pause);

    writeln!(out, "\nUpdating Afaq's email...")?;
    let updated = store.update_email(student_id, DEMO_UPDATED_EMAIL)?;
    writeln!(out, "Rows updated = {}", updated)?;
    print_students(store, out, "After update")?;
    sleep(pause);

    writeln!(out, "\nDeleting Afaq...")?;
    let deleted = store.delete_student(student_id)?;
    writeln!(out, "Rows deleted = {}", deleted)?;
    print_students(store, out, "After delete")?;

    writeln!(out, "\nDemo complete")?;
    Ok(())
}

fn print_students<S: StudentStore, W: Write>(store: &mut S, out: &mut W, label: &str) -> Result<()> {
    let students = store.list_students()?;
    writeln!(out, "\n=== {} ===", label)?;
    writeln!(out, "{}", render_students(&students))?;
    Ok(())
}

fn sleep(pause: Duration) {
    if !pause.is_zero() {
        thread::sleep(pause);
    }
}
