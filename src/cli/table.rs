//! # ASCII Table Formatter
//!
//! Renders student rows as an ASCII table for `getAllStudents()`.
//!
//! ## Output Format
//!
//! ```text
//! +----+-------+-------+------------------------+------------+
//! | ID | First | Last  | Email                  | Enrolled   |
//! +----+-------+-------+------------------------+------------+
//! |  1 | John  | Doe   | john.doe@example.com   | 2023-09-01 |
//! |  2 | Jane  | Smith | jane.smith@example.com | 2023-09-01 |
//! +----+-------+-------+------------------------+------------+
//! ```
//!
//! ## Column Width Calculation
//!
//! Column widths are the maximum of the header length and the longest value
//! in the column, capped at 50 characters; longer values are truncated with
//! "...". Widths count characters, not bytes, so accented names line up.
//!
//! The ID column is right-aligned, everything else left-aligned. A missing
//! enrollment date is shown as `NULL`.

use crate::store::Student;
use std::fmt::Write;

const MAX_COLUMN_WIDTH: usize = 50;
const HEADERS: [&str; 5] = ["ID", "First", "Last", "Email", "Enrolled"];
const RIGHT_ALIGNED: [bool; 5] = [true, false, false, false, false];

pub struct TableFormatter {
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    pub fn new(students: &[Student]) -> Self {
        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();

        let rows: Vec<Vec<String>> = students
            .iter()
            .map(|student| {
                let cells = format_student(student);
                for (width, cell) in widths.iter_mut().zip(&cells) {
                    *width = (*width).max(cell.chars().count()).min(MAX_COLUMN_WIDTH);
                }
                cells
            })
            .collect();

        Self { widths, rows }
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        self.write_separator(&mut output);
        let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        self.write_row(&mut output, &headers, false);
        self.write_separator(&mut output);

        for row in &self.rows {
            self.write_row(&mut output, row, true);
        }

        self.write_separator(&mut output);

        output
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn write_separator(&self, output: &mut String) {
        output.push('+');
        for width in &self.widths {
            output.push_str(&"-".repeat(*width + 2));
            output.push('+');
        }
        output.push('\n');
    }

    fn write_row(&self, output: &mut String, cells: &[String], align_numbers: bool) {
        output.push('|');
        for (i, cell) in cells.iter().enumerate() {
            let width = self.widths.get(i).copied().unwrap_or(1);
            let value = truncate(cell, width);
            if align_numbers && RIGHT_ALIGNED[i] {
                let _ = write!(output, " {:>width$} |", value, width = width);
            } else {
                let _ = write!(output, " {:<width$} |", value, width = width);
            }
        }
        output.push('\n');
    }
}

fn format_student(student: &Student) -> Vec<String> {
    vec![
        student.student_id.to_string(),
        student.first_name.clone(),
        student.last_name.clone(),
        student.email.clone(),
        student
            .enrollment_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "NULL".to_string()),
    ]
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let mut result: String = s.chars().take(max_len - 3).collect();
        result.push_str("...");
        result
    }
}
