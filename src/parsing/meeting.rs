//! Scanner for the "When" column, such as "MWF 09:00-09:50AM" or
//! "TR - 2:00P - 3:15P".

use tracing::debug;

use super::lexer::Cursor;
use crate::language::{MeetingTime, Weekday};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Meridiem {
    Ante,
    Post,
}

/// A clock reading as written, HMM or HHMM in 12-hour form. The meridiem is
/// absent when the start of a range leaves it to the end ("09:00-09:50AM").
#[derive(Debug, PartialEq, Eq)]
struct Reading {
    value: u32,
    meridiem: Option<Meridiem>,
}

/// Scan the days and the start and end times of a meeting. Returns None for
/// anything that is not a regular weekly meeting: no days, a letter that
/// isn't one of MTWRF (which is how "TBA" is rejected), or a time without an
/// AM/PM marker.
pub fn parse_meeting_time(input: &str) -> Option<MeetingTime> {
    let mut cursor = Cursor::new(input);

    cursor.skip_non_alpha();
    let days = read_days(&mut cursor)?;

    cursor.skip_non_digits();
    let start = read_reading(&mut cursor)?;

    cursor.skip_non_digits();
    let end = read_reading(&mut cursor)?;

    let Some(finish) = end.meridiem else {
        debug!(input, "No AM/PM marker on end time");
        return None;
    };

    let begin = match start.meridiem {
        Some(meridiem) => meridiem,
        None => infer_meridiem(start.value, end.value, finish),
    };

    Some(MeetingTime {
        days,
        start: to_military(start.value, begin),
        end: to_military(end.value, finish),
    })
}

fn read_days(cursor: &mut Cursor) -> Option<Vec<Weekday>> {
    let mut days = Vec::new();

    while let Some(c) = cursor.peek() {
        if c.is_ascii_digit() {
            break;
        }
        if c.is_alphabetic() {
            let Some(day) = Weekday::from_letter(c) else {
                debug!(letter = %c, "Not a day of the week");
                return None;
            };
            if !days.contains(&day) {
                days.push(day);
            }
        }
        cursor.next_char();
    }

    if days.is_empty() {
        None
    } else {
        Some(days)
    }
}

/// Read digits, passing over ':' separators, up to the first other
/// character. That must be an 'A' or 'P' marker, or the dash or space
/// separating the start of a range from its end.
fn read_reading(cursor: &mut Cursor) -> Option<Reading> {
    let mut value: u32 = 0;
    let mut seen = false;

    while let Some(c) = cursor.peek() {
        if c == ':' {
            // skip
        } else if let Some(digit) = c.to_digit(10) {
            value = value
                .checked_mul(10)?
                .checked_add(digit)?;
            seen = true;
        } else {
            break;
        }
        cursor.next_char();
    }

    if !seen {
        return None;
    }

    let meridiem = match cursor.peek()? {
        'A' => Some(Meridiem::Ante),
        'P' => Some(Meridiem::Post),
        '-' | '–' => None,
        c if c.is_whitespace() => None,
        c => {
            debug!(marker = %c, "Invalid AM/PM marker");
            return None;
        }
    };

    if meridiem.is_some() {
        cursor.next_char();
    }

    Some(Reading { value, meridiem })
}

// "11:00-12:15PM" starts in the morning even though the range ends PM; a
// start that reads later on the 12-hour dial than the end must be AM.
fn infer_meridiem(start: u32, end: u32, finish: Meridiem) -> Meridiem {
    match finish {
        Meridiem::Post if to_dial(start) > to_dial(end) => Meridiem::Ante,
        _ => finish,
    }
}

// 12:xx is the first hour on the dial, so it folds down to 0:xx.
fn to_dial(value: u32) -> u32 {
    if value >= 1200 {
        value - 1200
    } else {
        value
    }
}

fn to_military(value: u32, meridiem: Meridiem) -> u32 {
    match meridiem {
        Meridiem::Ante => to_dial(value),
        Meridiem::Post => to_dial(value) + 1200,
    }
}
