//! Template trait for rendering profile reports

use crate::language::{ProfilerSample, RenderingError};

/// Trait for templates that turn a selection of profile samples into text
pub trait Template {
    /// Render the samples, in the order given
    fn render(&self, samples: &[&ProfilerSample]) -> Result<String, RenderingError>;
}
