//! Types representing scanned table rows, aggregated courses, and profiler
//! samples

use serde::Serialize;

/// Days on which a section can meet. The discriminants are the day indices
/// used when converting to minutes since Monday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
}

impl Weekday {
    /// The day letters as they appear in the "When" column. Thursday is 'R'.
    pub const LETTERS: &'static str = "MTWRF";

    const DAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// The day for a letter, by its position in `LETTERS`.
    pub fn from_letter(c: char) -> Option<Weekday> {
        let i = Weekday::LETTERS.find(c)?;
        Weekday::DAYS
            .get(i)
            .copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

/// The three components of a "CHEM 10171 - 03" label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionCode {
    pub department: String,
    pub course: u64,
    pub section: u64,
}

/// Days and 24-hour start and end times from a "MWF 09:00-09:50AM" label.
/// Times are HHMM integers, so 1430 is 2:30 PM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeetingTime {
    pub days: Vec<Weekday>,
    pub start: u32,
    pub end: u32,
}

/// One fully scanned row of the class search results table. Rows that fail
/// to scan are never represented by this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedSection {
    pub code: SectionCode,
    pub title: String,
    pub crn: u64,
    pub instructor: String,
    pub meeting: MeetingTime,
    pub location: String,
}

impl ParsedSection {
    pub fn department(&self) -> &str {
        &self.code.department
    }
}

/// One meeting of a section as `[start, end]` minutes since Monday 00:00.
pub type Interval = [u32; 2];

/// All the meetings of one section during the week, one interval per day.
pub type TimeBlock = Vec<Interval>;

/// Per-section descriptive values. Every list is index-aligned with the
/// `times` of the owning course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    pub department: Vec<String>,
    pub instructor: Vec<String>,
    pub crn: Vec<String>,
    pub location: Vec<String>,
    pub section: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Department,
    Instructor,
    Crn,
    Location,
    Section,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Department,
        Tag::Instructor,
        Tag::Crn,
        Tag::Location,
        Tag::Section,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tag::Department => "department",
            Tag::Instructor => "instructor",
            Tag::Crn => "crn",
            Tag::Location => "location",
            Tag::Section => "section",
        }
    }
}

impl Tags {
    pub fn values(&self, tag: Tag) -> &[String] {
        match tag {
            Tag::Department => &self.department,
            Tag::Instructor => &self.instructor,
            Tag::Crn => &self.crn,
            Tag::Location => &self.location,
            Tag::Section => &self.section,
        }
    }

    pub(crate) fn push(&mut self, section: &ParsedSection) {
        self.department
            .push(section.code.department.clone());
        self.instructor
            .push(section.instructor.clone());
        self.crn
            .push(section.crn.to_string());
        self.location
            .push(section.location.clone());
        self.section
            .push(section.code.section.to_string());
    }
}

/// One course in the final catalogue, holding every section's meetings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub id: u64,
    pub name: String,
    pub times: Vec<TimeBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// One data row of a flat profile.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfilerSample {
    pub percent: f64,
    pub total_seconds: f64,
    pub self_seconds: f64,
    pub calls: f64,
    pub name: String,
}
