//! A class search answered from a saved JSON document rather than over the
//! network.
//!
//! ```json
//! {
//!     "subjects": [["ACCT", "Accountancy"], ["CHEM", "Chemistry and Biochemistry"]],
//!     "options": {
//!         "TERM": [["Spring Semester 2021", "202020"]],
//!         "DIVS": [["All", "A"]],
//!         "CAMPUS": [["Main", "M"]],
//!         "ATTR": [["Any", "0ANY"]],
//!         "CREDIT": [["All", "A"]]
//!     },
//!     "results": {
//!         "CHEM": [["CHEM 10171 - 01", "General Chemistry", ...]]
//!     }
//! }
//! ```
//!
//! Subjects are an array of pairs rather than an object so that their order
//! survives deserialization.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use super::{ClassSearch, Field, SearchForm};
use crate::language::SearchError;
use crate::parsing;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    subjects: Vec<(String, String)>,
    #[serde(default)]
    options: HashMap<String, Vec<(String, String)>>,
    #[serde(default)]
    results: HashMap<String, Vec<Vec<String>>>,
}

impl Snapshot {
    pub fn from_json(content: &str) -> Result<Snapshot, SearchError> {
        serde_json::from_str(content).map_err(|error| SearchError::Malformed(error.to_string()))
    }

    pub fn load(filename: &Path) -> Result<Snapshot, SearchError> {
        let content = parsing::load(filename)
            .map_err(|error| SearchError::Unavailable(error.to_string()))?;

        let snapshot = Snapshot::from_json(&content)?;
        debug!(
            subjects = snapshot.subjects.len(),
            tables = snapshot.results.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }
}

impl ClassSearch for Snapshot {
    fn subjects(&self) -> Result<Vec<(String, String)>, SearchError> {
        Ok(self
            .subjects
            .clone())
    }

    fn options(&self, field: Field) -> Result<Vec<(String, String)>, SearchError> {
        self.options
            .get(field.form_name())
            .cloned()
            .ok_or_else(|| SearchError::UnknownField(field.form_name().to_string()))
    }

    fn results(&self, form: &SearchForm) -> Result<Option<Vec<Vec<String>>>, SearchError> {
        Ok(self
            .results
            .get(form.subject())
            .cloned())
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn reading_documents() {
        let snapshot = Snapshot::from_json(
            r#"{
                "subjects": [["MATH", "Mathematics"], ["ACCT", "Accountancy"]],
                "options": { "TERM": [["Spring Semester 2021", "202020"]] },
                "results": { "MATH": [["a", "b"]] }
            }"#,
        )
        .unwrap();

        let subjects = snapshot
            .subjects()
            .unwrap();
        assert_eq!(subjects[0].0, "MATH");
        assert_eq!(subjects[1].0, "ACCT");

        assert_eq!(
            snapshot.options(Field::Term),
            Ok(vec![("Spring Semester 2021".to_string(), "202020".to_string())])
        );
        assert_eq!(
            snapshot.options(Field::Campus),
            Err(SearchError::UnknownField("CAMPUS".to_string()))
        );
    }

    #[test]
    fn malformed_documents() {
        assert!(matches!(
            Snapshot::from_json(r#"{ "subjects": {"MATH": "Mathematics"} }"#),
            Err(SearchError::Malformed(_))
        ));
        assert!(matches!(
            Snapshot::from_json("not json"),
            Err(SearchError::Malformed(_))
        ));
    }
}
