//! Fixed-width table rendering

use crate::records::Student;
use std::fmt::{self, Write as _};

/// Line printed instead of a table when there is nothing to show
pub const EMPTY_NOTICE: &str = "The student list is empty.";

const INDEX_WIDTH: usize = 4;
const NAME_WIDTH: usize = 30;
const GROUP_WIDTH: usize = 20;
const GRADES_WIDTH: usize = 15;

/// Render records as a bordered table, one row per record
///
/// Widths are fixed; longer values are not truncated and push the row out of
/// alignment. The returned text ends with a newline.
///
/// # Errors
///
/// Returns an error if formatting a row fails.
pub fn render_table(students: &[Student]) -> Result<String, fmt::Error> {
    let mut table = String::new();
    write_table(&mut table, students)?;
    Ok(table)
}

fn write_table(table: &mut String, students: &[Student]) -> fmt::Result {
    if students.is_empty() {
        return writeln!(table, "{EMPTY_NOTICE}");
    }

    let border = format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(GROUP_WIDTH),
        "-".repeat(GRADES_WIDTH),
    );

    writeln!(table, "{border}")?;
    writeln!(
        table,
        "| {:^INDEX_WIDTH$} | {:^NAME_WIDTH$} | {:^GROUP_WIDTH$} | {:^GRADES_WIDTH$} |",
        "No", "Full name", "Group", "Grades",
    )?;
    writeln!(table, "{border}")?;

    for (index, student) in students.iter().enumerate() {
        writeln!(
            table,
            "| {:>INDEX_WIDTH$} | {:<NAME_WIDTH$} | {:<GROUP_WIDTH$} | {:>GRADES_WIDTH$} |",
            index + 1,
            student.name,
            student.group_number,
            student.grades,
        )?;
    }

    writeln!(table, "{border}")
}
