pub mod aggregate;
pub mod language;
pub mod output;
pub mod parsing;
pub mod profile;
pub mod search;
pub mod templating;
