use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.filename
                .to_string_lossy(),
            self.problem,
            self.details
        )
    }
}

impl std::error::Error for LoadingError<'_> {}

/// Failures of the class search collaborator. Malformed rows are not errors;
/// these are the conditions that end a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    Unavailable(String),
    Malformed(String),
    UnknownField(String),
    MissingOption {
        field: &'static str,
        label: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Unavailable(details) => {
                write!(f, "class search unavailable: {}", details)
            }
            SearchError::Malformed(details) => {
                write!(f, "malformed class search data: {}", details)
            }
            SearchError::UnknownField(field) => write!(f, "no options for field {}", field),
            SearchError::MissingOption { field, label } => {
                write!(f, "option '{}' not offered for {}", label, field)
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilingError {
    Launch(String),
    Failed { status: Option<i32>, stderr: String },
}

impl fmt::Display for ProfilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfilingError::Launch(details) => write!(f, "unable to run gprof: {}", details),
            ProfilingError::Failed { status, stderr } => match status {
                Some(code) => write!(f, "gprof exited with status {}: {}", code, stderr.trim()),
                None => write!(f, "gprof terminated by signal: {}", stderr.trim()),
            },
        }
    }
}

impl std::error::Error for ProfilingError {}

#[derive(Debug)]
pub struct WritingError<'i> {
    pub problem: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for WritingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.filename
                .to_string_lossy(),
            self.problem
        )
    }
}

impl std::error::Error for WritingError<'_> {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingError(pub String);

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to render report: {}", self.0)
    }
}

impl std::error::Error for RenderingError {}
