//! Scanner for the "Course - Sec" column, such as "CHEM 10171 - 03".

use tracing::debug;

use super::lexer::Cursor;
use crate::language::SectionCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Department,
    CourseNumber,
    Filler,
    SectionNumber,
    Done,
}

/// Break a course/section label into department code, course number, and
/// section number. Returns None if any of the three is missing, in which
/// case the row should be discarded.
///
/// Whitespace is permitted between the department and the course number, so
/// "CHEM 10171 - 03" and "CHEM10171-03" scan identically.
pub fn parse_section_code(input: &str) -> Option<SectionCode> {
    let mut cursor = Cursor::new(input.trim());
    let mut state = State::Department;

    let mut department = "";
    let mut course = 0;
    let mut section = 0;

    while state != State::Done {
        state = match state {
            State::Department => {
                department = cursor.take_alpha();
                if department.is_empty() {
                    debug!(input, "No department code");
                    return None;
                }
                cursor.skip_whitespace();
                State::CourseNumber
            }
            State::CourseNumber => {
                course = to_number(cursor.take_digits())?;
                State::Filler
            }
            State::Filler => {
                cursor.skip_non_digits();
                State::SectionNumber
            }
            State::SectionNumber => {
                section = to_number(cursor.take_digits())?;
                State::Done
            }
            State::Done => State::Done,
        };
    }

    Some(SectionCode {
        department: department.to_string(),
        course,
        section,
    })
}

// An empty run, or one too long to represent, both mean the label is
// unusable.
fn to_number(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits
        .parse()
        .ok()
}
