// Types for class search rows, catalogue courses, and profile samples

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
