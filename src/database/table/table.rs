use thiserror::Error;

use crate::{
    consts::consts::PageNumber,
    model::{
        entry::{Entry, EntryField},
        statement::{Page, Statement, StatementResult},
    },
};

use super::{
    query::{filter, QueryEntryData},
    row::UpdateEntryData,
};

#[derive(Error, Debug, PartialEq)]
pub enum ApplyErrors {
    // CRUD - UPDATE
    #[error("Cannot update, no fields to change were provided")]
    NoFieldsToUpdate,

    // Constraints
    #[error("Cannot set field to null: {0}")]
    NotNullConstraintViolation(EntryField),
}

/// The whole phonebook held in memory, in file order
#[derive(Debug, Default, Clone)]
pub struct EntryTable {
    entries: Vec<Entry>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Used when restoring from the phonebook file
    pub fn restore_table(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn apply(&mut self, statement: Statement) -> Result<StatementResult, ApplyErrors> {
        let statement_result = match statement {
            Statement::Insert(entry) => StatementResult::Single(self.insert(entry)),
            Statement::ListPage { page, page_size } => {
                StatementResult::Page(self.list_page(page, page_size))
            }
            Statement::Search(query) => StatementResult::List(self.search(&query)),
            Statement::Update(query, update) => {
                StatementResult::Updated(self.update(&query, &update)?)
            }
        };

        Ok(statement_result)
    }

    #[tracing::instrument(skip(self))]
    pub fn list_page(&self, page: PageNumber, page_size: usize) -> Page {
        // Saturating so that an absurd page number yields an empty page rather than overflowing
        let start = page.to_number().saturating_mul(page_size);
        let end = start.saturating_add(page_size);

        let entries: Vec<Entry> = self
            .entries
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        Page {
            number: page,
            has_next: page_size > 0 && end < self.entries.len(),
            entries,
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn insert(&mut self, entry: Entry) -> Entry {
        self.entries.push(entry.clone());
        entry
    }

    #[tracing::instrument(skip(self))]
    pub fn search(&self, query: &QueryEntryData) -> Vec<Entry> {
        filter(&self.entries, query).into_iter().cloned().collect()
    }

    /// Every match is updated, there is no notion of a single best match
    #[tracing::instrument(skip(self))]
    pub fn update(
        &mut self,
        query: &QueryEntryData,
        update: &UpdateEntryData,
    ) -> Result<Vec<Entry>, ApplyErrors> {
        update.validate()?;

        let updated = self
            .entries
            .iter_mut()
            .filter(|entry| query.matches(entry))
            .map(|entry| {
                update.apply(entry);
                entry.clone()
            })
            .collect();

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::database::table::row::UpdateStatement;

    fn entry(first_name: &str, last_name: &str, personal_number: &str) -> Entry {
        Entry::new(
            first_name.to_string(),
            last_name.to_string(),
            personal_number.to_string(),
        )
    }

    fn table_with(count: usize) -> EntryTable {
        let mut table = EntryTable::new();

        for i in 0..count {
            table.insert(entry(&format!("First{}", i), "Last", &i.to_string()));
        }

        table
    }

    mod insert {
        use super::*;

        #[test]
        fn appends_in_order() {
            // Given an empty table
            let mut table = EntryTable::new();

            // When we insert two entries
            let first = entry("Ivan", "Petrov", "1");
            let second = entry("Anna", "Ivanova", "2");

            let result = table.apply(Statement::Insert(first.clone()));
            table.insert(second.clone());

            // Then they are stored in insertion order
            assert_eq!(result, Ok(StatementResult::Single(first.clone())));
            assert_eq!(table.entries(), &[first, second]);
        }

        #[test]
        fn duplicates_are_allowed() {
            let mut table = EntryTable::new();

            table.insert(Entry::new_test());
            table.insert(Entry::new_test());

            assert_eq!(table.count(), 2);
        }

        #[test]
        fn insert_then_search_by_exact_name() {
            let mut table = table_with(5);
            let inserted = entry("Ivan", "Petrov", "42");

            table.insert(inserted.clone());

            let found = table.search(&QueryEntryData::new(
                Some("Ivan".to_string()),
                Some("Petrov".to_string()),
            ));

            assert_eq!(found, vec![inserted]);
        }
    }

    mod list_page {
        use super::*;

        #[rstest]
        #[case::first_page(10, 0, 3, 0..3, true)]
        #[case::middle_page(10, 1, 3, 3..6, true)]
        #[case::last_partial_page(10, 3, 3, 9..10, false)]
        #[case::exact_fit(9, 2, 3, 6..9, false)]
        #[case::single_page(2, 0, 30, 0..2, false)]
        #[case::past_the_end(10, 4, 3, 0..0, false)]
        #[case::empty_table(0, 0, 30, 0..0, false)]
        #[case::zero_page_size(10, 0, 0, 0..0, false)]
        fn returns_slice_of_ordered_entries(
            #[case] count: usize,
            #[case] page: usize,
            #[case] page_size: usize,
            #[case] expected: std::ops::Range<usize>,
            #[case] has_next: bool,
        ) {
            let table = table_with(count);

            let result = table.list_page(PageNumber(page), page_size);

            let expected_entries = if expected.is_empty() {
                vec![]
            } else {
                table.entries()[expected].to_vec()
            };

            assert_eq!(result.entries, expected_entries);
            assert_eq!(result.has_next, has_next);
            assert_eq!(result.number, PageNumber(page));
        }

        #[test]
        fn huge_page_number_does_not_overflow() {
            let table = table_with(3);

            let result = table.list_page(PageNumber(usize::MAX), usize::MAX);

            assert!(result.entries.is_empty());
            assert!(!result.has_next);
        }
    }

    mod search {
        use super::*;

        #[test]
        fn no_filters_returns_everything() {
            let mut table = table_with(4);

            let result = table.apply(Statement::Search(QueryEntryData::any()));

            assert_eq!(result, Ok(StatementResult::List(table.entries().to_vec())));
        }

        #[test]
        fn unmatched_filter_returns_empty() {
            let table = table_with(4);

            let result = table.search(&QueryEntryData::new(Some("Nobody".to_string()), None));

            assert!(result.is_empty());
        }
    }

    mod update {
        use super::*;

        #[test]
        fn changes_only_matching_entries() {
            // Given a table with two Ivans and one Anna
            let mut table = EntryTable::new();
            table.insert(entry("Ivan", "Petrov", "1"));
            table.insert(entry("Anna", "Petrova", "2"));
            table.insert(entry("Ivan", "Sidorov", "3"));

            // When we update every Ivan
            let update = UpdateEntryData {
                company_name: UpdateStatement::Set("Acme".to_string()),
                ..Default::default()
            };

            let updated = table
                .update(&QueryEntryData::new(Some("Ivan".to_string()), None), &update)
                .expect("update should succeed");

            // Then both Ivans change and Anna is untouched
            assert_eq!(updated.len(), 2);
            assert_eq!(
                table.entries()[0].company_name,
                Some("Acme".to_string())
            );
            assert_eq!(table.entries()[1], entry("Anna", "Petrova", "2"));
            assert_eq!(
                table.entries()[2].company_name,
                Some("Acme".to_string())
            );
        }

        #[test]
        fn no_match_is_a_noop() {
            let mut table = table_with(3);
            let before = table.entries().to_vec();

            let result = table.apply(Statement::Update(
                QueryEntryData::new(None, Some("Nobody".to_string())),
                UpdateEntryData {
                    first_name: UpdateStatement::Set("X".to_string()),
                    ..Default::default()
                },
            ));

            assert_eq!(result, Ok(StatementResult::Updated(vec![])));
            assert_eq!(table.entries(), before.as_slice());
        }

        #[test]
        fn rejected_update_leaves_table_unchanged() {
            let mut table = table_with(3);
            let before = table.entries().to_vec();

            let update = UpdateEntryData {
                office_number: UpdateStatement::Set("555".to_string()),
                last_name: UpdateStatement::Unset,
                ..Default::default()
            };

            let result = table.update(&QueryEntryData::any(), &update);

            assert_eq!(
                result,
                Err(ApplyErrors::NotNullConstraintViolation(EntryField::LastName))
            );
            assert_eq!(table.entries(), before.as_slice());
        }

        #[test]
        fn updating_the_searched_name_moves_the_entry() {
            let mut table = EntryTable::new();
            table.insert(entry("Ivan", "Petrov", "1"));

            table
                .update(
                    &QueryEntryData::new(Some("Ivan".to_string()), None),
                    &UpdateEntryData {
                        first_name: UpdateStatement::Set("Ioann".to_string()),
                        ..Default::default()
                    },
                )
                .expect("update should succeed");

            assert!(table
                .search(&QueryEntryData::new(Some("Ivan".to_string()), None))
                .is_empty());
            assert_eq!(
                table
                    .search(&QueryEntryData::new(Some("Ioann".to_string()), None))
                    .len(),
                1
            );
        }
    }
}
