use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use thiserror::Error;

use crate::{
    model::statement::{Statement, StatementResult},
    persistence::{snapshot::SnapshotManager, storage::StorageError},
};

use super::{
    options::DatabaseOptions,
    table::table::{ApplyErrors, EntryTable},
};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Apply(#[from] ApplyErrors),
}

/// Loads the phonebook once, applies statements in memory and rewrites the file after each mutation
pub struct Database {
    entry_table: EntryTable,
    snapshot_manager: SnapshotManager,
    database_options: DatabaseOptions,
}

impl Database {
    pub fn new(options: DatabaseOptions) -> Self {
        Self {
            entry_table: EntryTable::new(),
            snapshot_manager: SnapshotManager::new(options.storage_engine.get_engine()),
            database_options: options,
        }
    }

    /// Creates the database and restores the phonebook from storage
    pub fn open(options: DatabaseOptions) -> Result<Self, DatabaseError> {
        let mut database = Database::new(options);

        database.restore()?;

        Ok(database)
    }

    #[cfg(test)]
    pub fn new_test() -> Self {
        Database::new(DatabaseOptions::new_test())
    }

    pub fn restore(&mut self) -> Result<usize, DatabaseError> {
        let now = Instant::now();

        let entries = self.snapshot_manager.restore_snapshot()?;
        let restored_count = entries.len();

        self.entry_table.restore_table(entries);

        log::info!(
            "✅ Restored phonebook [Location: {}, Entries: {}, Duration: {}ms]",
            self.database_options.storage_engine.describe(),
            restored_count.to_formatted_string(&Locale::en),
            now.elapsed().as_millis(),
        );

        Ok(restored_count)
    }

    pub fn run_statement(&mut self, statement: Statement) -> Result<StatementResult, DatabaseError> {
        log::debug!("Received statement: {}", statement.log_format());

        let is_mutation = statement.is_mutation();

        let statement_result = match self.entry_table.apply(statement) {
            Ok(statement_result) => statement_result,
            Err(err) => {
                log::warn!("⚠️  Rejected statement: {}", err);
                return Err(err.into());
            }
        };

        // An update that matched nothing leaves the file untouched
        if is_mutation && statement_result.requires_write() {
            self.persist()?;
        }

        Ok(statement_result)
    }

    fn persist(&mut self) -> Result<(), DatabaseError> {
        let now = Instant::now();

        self.snapshot_manager.create_snapshot(&self.entry_table)?;

        log::info!(
            "📀 Persisted phonebook [Entries: {}, Duration: {}ms]",
            self.entry_table.count().to_formatted_string(&Locale::en),
            now.elapsed().as_millis(),
        );

        Ok(())
    }

    pub fn table(&self) -> &EntryTable {
        &self.entry_table
    }

    pub fn options(&self) -> &DatabaseOptions {
        &self.database_options
    }
}
