use super::{ReadBlobState, Storage, StorageResult};

#[derive(Default)]
pub struct MemoryStorage {
    blob: Option<Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self { blob: None }
    }

    pub fn with_contents(bytes: Vec<u8>) -> Self {
        Self { blob: Some(bytes) }
    }
}

impl Storage for MemoryStorage {
    fn init(&self) -> StorageResult<()> {
        Ok(())
    }

    fn read_blob(&self) -> StorageResult<ReadBlobState> {
        match &self.blob {
            Some(bytes) => Ok(ReadBlobState::Found(bytes.clone())),
            None => Ok(ReadBlobState::NotFound),
        }
    }

    fn write_blob(&mut self, bytes: &[u8]) -> StorageResult<()> {
        self.blob = Some(bytes.to_vec());
        Ok(())
    }
}
