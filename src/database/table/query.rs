use crate::model::entry::Entry;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum QueryMatch {
    /// Exact, case sensitive match
    Value(String),
    #[default]
    Any,
}

impl QueryMatch {
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(value) => QueryMatch::Value(value),
            None => QueryMatch::Any,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            QueryMatch::Value(value) => value == candidate,
            QueryMatch::Any => true,
        }
    }
}

/// Entries can only be looked up by first and / or last name
#[derive(Clone, Debug, PartialEq, Default)]
pub struct QueryEntryData {
    pub first_name: QueryMatch,
    pub last_name: QueryMatch,
}

impl QueryEntryData {
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name: QueryMatch::from_option(first_name),
            last_name: QueryMatch::from_option(last_name),
        }
    }

    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        self.first_name.matches(&entry.first_name) && self.last_name.matches(&entry.last_name)
    }
}

#[tracing::instrument(skip(entries))]
pub fn filter<'a>(entries: &'a [Entry], query: &QueryEntryData) -> Vec<&'a Entry> {
    entries.iter().filter(|entry| query.matches(entry)).collect()
}
