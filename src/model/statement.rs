use crate::{
    consts::consts::PageNumber,
    database::table::{query::QueryEntryData, row::UpdateEntryData},
};

use super::entry::Entry;

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// Appends an entry, no duplicate check
    Insert(Entry),
    /// Returns a single page of entries
    ListPage { page: PageNumber, page_size: usize },
    /// Returns every entry matching the query, an empty query returns everything
    Search(QueryEntryData),
    /// Applies the update to every entry matching the query
    Update(QueryEntryData, UpdateEntryData),
}

impl Statement {
    pub fn is_mutation(&self) -> bool {
        match self {
            Statement::Insert(_) | Statement::Update(_, _) => true,
            Statement::ListPage { .. } | Statement::Search(_) => false,
        }
    }

    /// Prints complex logs in a more readable format
    pub fn log_format(&self) -> String {
        match self {
            Statement::Insert(entry) => format!("Insert [{}]", entry),
            _ => format!("{:?}", self),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub number: PageNumber,
    pub entries: Vec<Entry>,
    pub has_next: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatementResult {
    Single(Entry),
    List(Vec<Entry>),
    Page(Page),
    /// Entries as they are after the update, empty when nothing matched
    Updated(Vec<Entry>),
}

impl StatementResult {
    /// Whether the table changed and the phonebook file must be rewritten
    pub fn requires_write(&self) -> bool {
        match self {
            StatementResult::Single(_) => true,
            StatementResult::Updated(entries) => !entries.is_empty(),
            StatementResult::List(_) | StatementResult::Page(_) => false,
        }
    }
}
