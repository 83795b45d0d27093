use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use super::{io_to_generic_error, ReadBlobState, Storage, StorageError, StorageResult};

pub struct FileStorage {
    file_path: PathBuf,
}

impl FileStorage {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl Storage for FileStorage {
    // Creates the parent directory, the file itself is created on write
    fn init(&self) -> StorageResult<()> {
        match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .map_err(|e| {
                    StorageError::UnableToInitializePersistence(io_to_generic_error(parent, e))
                }),
            _ => Ok(()),
        }
    }

    fn read_blob(&self) -> StorageResult<ReadBlobState> {
        match fs::read(&self.file_path) {
            Ok(bytes) => Ok(ReadBlobState::Found(bytes)),
            Err(err) => match err.kind() {
                std::io::ErrorKind::NotFound => Ok(ReadBlobState::NotFound),
                _ => Err(StorageError::UnableToReadBlob(io_to_generic_error(
                    &self.file_path,
                    err,
                ))),
            },
        }
    }

    fn write_blob(&mut self, bytes: &[u8]) -> StorageResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.file_path)
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(&self.file_path, e)))?;

        file.write_all(bytes)
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(&self.file_path, e)))?;

        // Not durable until the fsync
        file.sync_all()
            .map_err(|e| StorageError::UnableToWriteBlob(io_to_generic_error(&self.file_path, e)))
    }
}
