//! scanners for class search table cells and profiler output

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, ParsedSection, ProfilerSample};

pub mod lexer;
mod location;
mod meeting;
mod profiler;
mod section;

pub use location::normalize_location;
pub use meeting::parse_meeting_time;
pub use profiler::parse_profile_line;
pub use section::parse_section_code;

/// Number of cells in a row of the class search results table.
pub const ROW_WIDTH: usize = 14;

const COURSE_SECTION: usize = 0;
const TITLE: usize = 1;
const CRN: usize = 7;
const INSTRUCTOR: usize = 9;
const WHEN: usize = 10;
const WHERE: usize = 13;

/// Read a file and return an owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Turn the text of one results table row into a section. Rows of the wrong
/// width, and rows whose label, CRN, or meeting time don't scan, are
/// discarded by returning None.
pub fn parse_section_row<S: AsRef<str>>(cells: &[S]) -> Option<ParsedSection> {
    if cells.len() != ROW_WIDTH {
        debug!("Skipping row with {} cells", cells.len());
        return None;
    }

    let cell = |i: usize| {
        cells[i]
            .as_ref()
            .trim()
    };

    let label = first_line(cell(COURSE_SECTION));
    let when = first_line(cell(WHEN));

    let Some(code) = parse_section_code(label) else {
        debug!(label, "Discarding row with unreadable section label");
        return None;
    };

    let Some(meeting) = parse_meeting_time(when) else {
        debug!(label, when, "Discarding row with unreadable meeting time");
        return None;
    };

    let Ok(crn) = cell(CRN).parse::<u64>() else {
        debug!(label, crn = cell(CRN), "Discarding row with unreadable CRN");
        return None;
    };

    Some(ParsedSection {
        code,
        title: cell(TITLE).to_string(),
        crn,
        instructor: cell(INSTRUCTOR).to_string(),
        meeting,
        location: normalize_location(cells[WHERE].as_ref()),
    })
}

/// Scan every line of a flat profile, keeping only the data rows.
pub fn parse_profile(content: &str) -> Vec<ProfilerSample> {
    let samples: Vec<ProfilerSample> = content
        .lines()
        .filter_map(parse_profile_line)
        .collect();

    debug!(
        "Found {} sample{}",
        samples.len(),
        if samples.len() == 1 { "" } else { "s" }
    );

    samples
}

fn first_line(text: &str) -> &str {
    text.lines()
        .next()
        .unwrap_or("")
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::language::{MeetingTime, SectionCode, Weekday};

    fn row(label: &str, crn: &str, when: &str) -> Vec<String> {
        let mut cells = vec![String::new(); ROW_WIDTH];
        cells[COURSE_SECTION] = label.to_string();
        cells[TITLE] = "  General Chemistry  ".to_string();
        cells[CRN] = crn.to_string();
        cells[INSTRUCTOR] = "\n Smith, Jane \n".to_string();
        cells[WHEN] = when.to_string();
        cells[WHERE] = "\n  Jordan Hall 101 \n\n".to_string();
        cells
    }

    #[test]
    fn complete_rows() {
        let cells = row(
            "\n  CHEM 10171 - 03\n  View Books\n",
            " 21834 ",
            " MWF 09:00-09:50AM\n  01/19 - 05/05\n",
        );

        assert_eq!(
            parse_section_row(&cells),
            Some(ParsedSection {
                code: SectionCode {
                    department: "CHEM".to_string(),
                    course: 10171,
                    section: 3,
                },
                title: "General Chemistry".to_string(),
                crn: 21834,
                instructor: "Smith, Jane".to_string(),
                meeting: MeetingTime {
                    days: vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
                    start: 900,
                    end: 950,
                },
                location: "Jordan Hall 101".to_string(),
            })
        );
    }

    #[test]
    fn discarded_rows() {
        assert_eq!(parse_section_row(&row("CHEM - 03", "1", "MWF 09:00-09:50AM")), None);
        assert_eq!(parse_section_row(&row("CHEM 10171 - 03", "1", "TBA")), None);
        assert_eq!(parse_section_row(&row("CHEM 10171 - 03", "n/a", "MWF 09:00-09:50AM")), None);

        let mut short = row("CHEM 10171 - 03", "1", "MWF 09:00-09:50AM");
        short.pop();
        assert_eq!(parse_section_row(&short), None);
    }

    #[test]
    fn profile_text() {
        let content = r#"
Flat profile:

Each sample counts as 0.01 seconds.
  %   cumulative   self              self     total
 time   seconds   seconds    calls  ms/call  ms/call  name
 50.00      0.02     0.02     1000     0.02     0.02  Interval::overlaps(Interval const&) const
 25.00      0.03     0.01       10     1.00     3.00  EventScheduler::schedule()
        "#;

        let samples = parse_profile(content);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name, "Interval::overlaps(Interval const&) const");
        assert_eq!(samples[1].self_seconds, 0.01);
    }
}
