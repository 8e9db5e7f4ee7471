//! Templates for rendering profile samples into reports

mod table;
mod template;

pub use table::Table;
pub use template::Template;

use crate::language::{ProfilerSample, RenderingError};

/// Render a selection of samples using the specified template
pub fn fill(template: &impl Template, samples: &[&ProfilerSample]) -> Result<String, RenderingError> {
    template.render(samples)
}
