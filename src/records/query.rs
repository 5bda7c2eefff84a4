//! Record queries

use super::Student;

/// Mark that flags a failing student
pub const FAILING_MARK: char = '2';

/// Select every record whose grades contain the failing mark, in order
///
/// This is plain character containment on the grades text, so `"12 13"`
/// matches too.
#[must_use]
pub fn select_failing(students: &[Student]) -> Vec<Student> {
    students
        .iter()
        .filter(|student| student.grades.contains(FAILING_MARK))
        .cloned()
        .collect()
}
