//! Grouping scanned sections into one record per course.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::language::{CourseRecord, MeetingTime, ParsedSection, Tags, TimeBlock};
use crate::search::SubjectList;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Course numbers are five digits, so this multiplier keeps the department
/// index and course number from overlapping within an id.
const DEPARTMENT_STRIDE: u64 = 100_000;

/// Whether courses carry per-section tags alongside their times.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    Plain,
    #[default]
    Tagged,
}

/// Combine a department's position in the subject list with a course number.
/// None if the result doesn't fit.
pub fn course_id(department: usize, course: u64) -> Option<u64> {
    u64::try_from(department)
        .ok()?
        .checked_mul(DEPARTMENT_STRIDE)?
        .checked_add(course)
}

/// Convert HHMM 24-hour time on a given day to minutes since Monday 00:00.
pub fn minutes_since_monday(day: u32, military: u32) -> u32 {
    day * MINUTES_PER_DAY + military / 100 * 60 + military % 100
}

/// One `[start, end]` interval per meeting day, in the order the days were
/// listed.
pub fn to_block(meeting: &MeetingTime) -> TimeBlock {
    meeting
        .days
        .iter()
        .map(|day| {
            let day = day.index();
            [
                minutes_since_monday(day, meeting.start),
                minutes_since_monday(day, meeting.end),
            ]
        })
        .collect()
}

/// Courses keyed by id. Iteration order is the order in which each id was
/// first seen, and output depends on that.
#[derive(Debug)]
pub struct Catalogue<'s> {
    subjects: &'s SubjectList,
    variant: Variant,
    courses: Vec<CourseRecord>,
    positions: HashMap<u64, usize>,
}

impl<'s> Catalogue<'s> {
    pub fn new(subjects: &'s SubjectList, variant: Variant) -> Catalogue<'s> {
        Catalogue {
            subjects,
            variant,
            courses: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Add a section to its course, creating the course if this is the first
    /// section seen for it. A section whose department isn't in the subject
    /// list has no id and is skipped; returns whether it was added.
    pub fn insert(&mut self, section: &ParsedSection) -> bool {
        let Some(index) = self
            .subjects
            .index_of(section.department())
        else {
            warn!(
                department = section.department(),
                crn = section.crn,
                "Section department not in subject list"
            );
            return false;
        };

        let Some(id) = course_id(index, section.code.course) else {
            warn!(
                department = section.department(),
                course = section.code.course,
                crn = section.crn,
                "Course number too large for an id"
            );
            return false;
        };

        let position = match self
            .positions
            .get(&id)
        {
            Some(position) => *position,
            None => {
                debug!(id, name = %section.title, "New course");
                self.courses
                    .push(CourseRecord {
                        id,
                        name: section
                            .title
                            .clone(),
                        times: Vec::new(),
                        tags: match self.variant {
                            Variant::Plain => None,
                            Variant::Tagged => Some(Tags::default()),
                        },
                    });
                let position = self.courses.len() - 1;
                self.positions
                    .insert(id, position);
                position
            }
        };

        let course = &mut self.courses[position];
        course
            .times
            .push(to_block(&section.meeting));
        if let Some(tags) = &mut course.tags {
            tags.push(section);
        }

        true
    }

    pub fn get(&self, id: u64) -> Option<&CourseRecord> {
        let position = self
            .positions
            .get(&id)?;
        self.courses
            .get(*position)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn into_courses(self) -> Vec<CourseRecord> {
        self.courses
    }
}

/// Group sections into courses, in first-seen order.
pub fn convert_courses(
    sections: &[ParsedSection],
    subjects: &SubjectList,
    variant: Variant,
) -> Vec<CourseRecord> {
    let mut catalogue = Catalogue::new(subjects, variant);

    for section in sections {
        catalogue.insert(section);
    }

    debug!(
        "Grouped {} section{} into {} course{}",
        sections.len(),
        if sections.len() == 1 { "" } else { "s" },
        catalogue.len(),
        if catalogue.len() == 1 { "" } else { "s" }
    );

    catalogue.into_courses()
}
