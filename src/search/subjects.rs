use std::collections::HashMap;

/// The subject codes offered by the class search, in the order it lists
/// them. Course ids are derived from positions in this list, so one snapshot
/// is taken per run and never refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectList {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl SubjectList {
    pub fn new(entries: Vec<(String, String)>) -> SubjectList {
        let mut positions = HashMap::with_capacity(entries.len());

        for (i, (code, _)) in entries
            .iter()
            .enumerate()
        {
            positions
                .entry(code.clone())
                .or_insert(i);
        }

        SubjectList { entries, positions }
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.positions
            .get(code)
            .copied()
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        let i = self.index_of(code)?;
        Some(&self.entries[i].1)
    }

    /// (code, name) pairs in list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
