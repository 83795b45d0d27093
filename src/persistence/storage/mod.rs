use std::path::{Path, PathBuf};

use thiserror::Error;

use self::{file::FileStorage, memory::MemoryStorage};

pub mod file;
pub mod memory;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to initialize persistence: {0:#}")]
    UnableToInitializePersistence(anyhow::Error),

    #[error("Unable to read phonebook: {0:#}")]
    UnableToReadBlob(anyhow::Error),

    #[error("Unable to write phonebook: {0:#}")]
    UnableToWriteBlob(anyhow::Error),

    #[error("Phonebook is not a valid JSON array of entries: {0}")]
    MalformedPhonebook(serde_json::Error),

    #[error("Unable to serialize phonebook: {0}")]
    UnableToSerialize(serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, PartialEq)]
pub enum ReadBlobState {
    Found(Vec<u8>),
    NotFound,
}

/// Keeps the path that failed in the error chain
pub fn io_to_generic_error(path: &Path, error: std::io::Error) -> anyhow::Error {
    anyhow::Error::new(error).context(path.display().to_string())
}

/// Backing store for the phonebook, the whole phonebook is a single blob
pub trait Storage {
    /// Called before the first write, should be idempotent
    fn init(&self) -> StorageResult<()>;
    fn read_blob(&self) -> StorageResult<ReadBlobState>;
    /// Replaces the whole blob
    fn write_blob(&mut self, bytes: &[u8]) -> StorageResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageEngine {
    /// A JSON file on the local disk
    File(PathBuf),
    /// Used for testing purposes. Nothing outlives the process
    Memory,
}

impl StorageEngine {
    pub fn get_engine(&self) -> Box<dyn Storage> {
        match self {
            StorageEngine::File(path) => Box::new(FileStorage::new(path.clone())),
            StorageEngine::Memory => Box::new(MemoryStorage::new()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            StorageEngine::File(path) => path.display().to_string(),
            StorageEngine::Memory => "memory".to_string(),
        }
    }
}
