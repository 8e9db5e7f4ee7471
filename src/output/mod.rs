//! Output generation for the catalogue CLI application

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::language::{CourseRecord, WritingError};

/// Serialize courses as an indented JSON array.
pub fn to_json(courses: &[CourseRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(courses)
}

/// Write the catalogue to `filename`, replacing whatever was there.
pub fn write_catalogue<'i>(
    filename: &'i Path,
    courses: &[CourseRecord],
) -> Result<(), WritingError<'i>> {
    info!("Writing {} courses to {}", courses.len(), filename.display());

    let failed = |problem: String| WritingError { problem, filename };

    let file = File::create(filename).map_err(|error| failed(error.to_string()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, courses).map_err(|error| failed(error.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|error| failed(error.to_string()))?;
    writer
        .flush()
        .map_err(|error| failed(error.to_string()))
}
