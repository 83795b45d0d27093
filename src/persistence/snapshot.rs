use crate::{database::table::table::EntryTable, model::entry::Entry};

use super::storage::{ReadBlobState, Storage, StorageError, StorageResult};

/// Reads and writes the whole phonebook as one JSON array
pub struct SnapshotManager {
    storage: Box<dyn Storage>,
}

impl SnapshotManager {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// A missing or empty file is an empty phonebook
    #[tracing::instrument(skip(self))]
    pub fn restore_snapshot(&self) -> StorageResult<Vec<Entry>> {
        let file_contents = match self.storage.read_blob()? {
            ReadBlobState::Found(file_contents) => file_contents,
            ReadBlobState::NotFound => return Ok(Vec::new()),
        };

        if file_contents.iter().all(|byte| byte.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&file_contents).map_err(StorageError::MalformedPhonebook)
    }

    #[tracing::instrument(skip(self, table))]
    pub fn create_snapshot(&mut self, table: &EntryTable) -> StorageResult<()> {
        let serialized_data =
            serde_json::to_vec_pretty(table.entries()).map_err(StorageError::UnableToSerialize)?;

        self.storage.init()?;
        self.storage.write_blob(&serialized_data)
    }
}
