use std::path::PathBuf;

use crate::{
    consts::consts::{DEFAULT_PAGE_SIZE, DEFAULT_PHONEBOOK_FILE},
    persistence::storage::StorageEngine,
};

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub storage_engine: StorageEngine,
    pub page_size: usize,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    /// Location of the phonebook file. Does not support shell paths, e.g. ~
    pub fn set_data_file(mut self, data_file: PathBuf) -> Self {
        self.storage_engine = StorageEngine::File(data_file);
        self
    }

    pub fn set_storage_engine(mut self, storage_engine: StorageEngine) -> Self {
        self.storage_engine = storage_engine;
        self
    }

    /// Number of entries per page when listing the phonebook
    pub fn set_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        // Defaults to $CWD/phonebook.json
        Self {
            storage_engine: StorageEngine::File(PathBuf::from(DEFAULT_PHONEBOOK_FILE)),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
impl DatabaseOptions {
    pub fn new_test() -> Self {
        DatabaseOptions::default().set_storage_engine(StorageEngine::Memory)
    }

    pub fn new_test_file() -> Self {
        let data_file: PathBuf = std::env::temp_dir()
            .join("phonebook")
            .join(uuid::Uuid::new_v4().to_string())
            .join(DEFAULT_PHONEBOOK_FILE);

        DatabaseOptions::default().set_data_file(data_file)
    }
}
