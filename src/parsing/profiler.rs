//! Scanner for data rows of a gprof flat profile.
//!
//! A data row is six numeric columns (% time, cumulative seconds, self
//! seconds, calls, self ms/call, total ms/call) followed by the function
//! name. Headers and blank lines fail to scan and are skipped by callers.

use super::lexer::Cursor;
use crate::language::ProfilerSample;

const COLUMNS: usize = 6;

pub fn parse_profile_line(line: &str) -> Option<ProfilerSample> {
    let mut cursor = Cursor::new(line.trim());
    let mut values = [0.0; COLUMNS];

    for value in values.iter_mut() {
        let token = cursor.take_while(|c| c.is_ascii_digit() || c == '.');
        cursor.skip_whitespace();

        if token.is_empty() {
            return None;
        }

        *value = token
            .parse()
            .ok()?;
    }

    // The last two columns (cost per call) are only scanned to reach the
    // name.
    let [percent, total_seconds, self_seconds, calls, _, _] = values;

    Some(ProfilerSample {
        percent,
        total_seconds,
        self_seconds,
        calls,
        name: cursor
            .remainder()
            .to_string(),
    })
}
