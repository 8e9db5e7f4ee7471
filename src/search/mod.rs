//! The class search: where subject lists, form options, and result tables
//! come from, and the per-run cache of the parts fetched only once.

use std::cell::OnceCell;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::language::{ParsedSection, SearchError};
use crate::parsing::parse_section_row;

mod snapshot;
mod subjects;

pub use snapshot::Snapshot;
pub use subjects::SubjectList;

/// Select boxes on the search form, other than the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Term,
    Division,
    Campus,
    Attribute,
    Credit,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Term,
        Field::Division,
        Field::Campus,
        Field::Attribute,
        Field::Credit,
    ];

    pub fn form_name(self) -> &'static str {
        match self {
            Field::Term => "TERM",
            Field::Division => "DIVS",
            Field::Campus => "CAMPUS",
            Field::Attribute => "ATTR",
            Field::Credit => "CREDIT",
        }
    }
}

const SUBJECT: &str = "SUBJ";

/// Access to a class search. Implementations do the fetching and the
/// locating of select boxes and table cells; everything here is text.
pub trait ClassSearch {
    /// Subject (code, name) pairs in the order the search lists them.
    fn subjects(&self) -> Result<Vec<(String, String)>, SearchError>;

    /// (label, form value) pairs offered for a select box.
    fn options(&self, field: Field) -> Result<Vec<(String, String)>, SearchError>;

    /// Cell text for each row of the results table, or None if the search
    /// returned no table at all.
    fn results(&self, form: &SearchForm) -> Result<Option<Vec<Vec<String>>>, SearchError>;
}

/// Readable labels to use for each select box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSettings {
    pub term: String,
    pub division: String,
    pub campus: String,
    pub attribute: String,
    pub credit: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            term: "Spring Semester 2021".to_string(),
            division: "All".to_string(),
            campus: "Main".to_string(),
            attribute: "Any".to_string(),
            credit: "All".to_string(),
        }
    }
}

impl SearchSettings {
    pub fn label(&self, field: Field) -> &str {
        match field {
            Field::Term => &self.term,
            Field::Division => &self.division,
            Field::Campus => &self.campus,
            Field::Attribute => &self.attribute,
            Field::Credit => &self.credit,
        }
    }
}

/// Label to form value mapping for one select box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options(HashMap<String, String>);

impl Options {
    pub fn new(pairs: Vec<(String, String)>) -> Options {
        Options(
            pairs
                .into_iter()
                .map(|(label, value)| (label.trim().to_string(), value))
                .collect(),
        )
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.0
            .get(label)
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormOptions(HashMap<Field, Options>);

impl FormOptions {
    pub fn get(&self, field: Field) -> Option<&Options> {
        self.0
            .get(&field)
    }
}

/// The fields posted to search one subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchForm {
    fields: Vec<(&'static str, String)>,
}

impl SearchForm {
    /// Translate the configured labels into form values. A label the search
    /// doesn't offer is an error; there is no sensible fallback term.
    pub fn build(
        settings: &SearchSettings,
        options: &FormOptions,
        subject: &str,
    ) -> Result<SearchForm, SearchError> {
        let mut fields = Vec::with_capacity(Field::ALL.len() + 1);

        for field in Field::ALL {
            let label = settings.label(field);
            let value = options
                .get(field)
                .and_then(|options| options.value(label))
                .ok_or_else(|| SearchError::MissingOption {
                    field: field.form_name(),
                    label: label.to_string(),
                })?;

            fields.push((field.form_name(), value.to_string()));
            if field == Field::Division {
                // SUBJ sits between DIVS and CAMPUS on the form
                fields.push((SUBJECT, subject.to_string()));
            }
        }

        Ok(SearchForm { fields })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn subject(&self) -> &str {
        self.get(SUBJECT)
            .unwrap_or("")
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }
}

/// Subject list and form options, each fetched on first use and then kept
/// for the rest of the run. Construct one per run and pass it around; a new
/// Cache means a new fetch.
#[derive(Debug, Default)]
pub struct Cache {
    subjects: OnceCell<SubjectList>,
    options: OnceCell<FormOptions>,
}

impl Cache {
    pub fn new() -> Cache {
        Cache::default()
    }

    pub fn subjects(&self, source: &impl ClassSearch) -> Result<&SubjectList, SearchError> {
        if let Some(subjects) = self
            .subjects
            .get()
        {
            return Ok(subjects);
        }

        let subjects = SubjectList::new(source.subjects()?);
        info!("Fetched {} subjects", subjects.len());

        Ok(self
            .subjects
            .get_or_init(|| subjects))
    }

    pub fn options(&self, source: &impl ClassSearch) -> Result<&FormOptions, SearchError> {
        if let Some(options) = self
            .options
            .get()
        {
            return Ok(options);
        }

        let mut map = HashMap::new();
        for field in Field::ALL {
            let pairs = source.options(field)?;
            debug!(field = field.form_name(), count = pairs.len(), "Fetched options");
            map.insert(field, Options::new(pairs));
        }

        Ok(self
            .options
            .get_or_init(|| FormOptions(map)))
    }
}

/// Fetch and scan the sections of one subject. Rows that don't scan are
/// dropped; a subject with no results table has no sections.
pub fn subject_sections(
    source: &impl ClassSearch,
    cache: &Cache,
    settings: &SearchSettings,
    subject: &str,
) -> Result<Vec<ParsedSection>, SearchError> {
    let options = cache.options(source)?;
    let form = SearchForm::build(settings, options, subject)?;

    let rows = match source.results(&form)? {
        Some(rows) => rows,
        None => {
            debug!(subject, "No results table");
            return Ok(Vec::new());
        }
    };

    let sections: Vec<ParsedSection> = rows
        .iter()
        .filter_map(|row| parse_section_row(row))
        .collect();

    debug!(
        subject,
        rows = rows.len(),
        kept = sections.len(),
        "Scanned results"
    );

    Ok(sections)
}

/// Fetch and scan every subject in list order.
pub fn all_sections(
    source: &impl ClassSearch,
    cache: &Cache,
    settings: &SearchSettings,
) -> Result<Vec<ParsedSection>, SearchError> {
    let subjects = cache.subjects(source)?;
    let mut sections = Vec::new();

    for (code, name) in subjects.iter() {
        let found = subject_sections(source, cache, settings, code)?;
        info!("Got {} courses for {} ({})", found.len(), name, code);
        sections.extend(found);
    }

    Ok(sections)
}
