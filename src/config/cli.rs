use crate::core::Storage;
use crate::utils::error::{Result, ZoneError};
use std::fs;

/// Writes straight to the local filesystem. Parent directories are never
/// created; a missing one surfaces as [`ZoneError::WriteError`].
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|source| ZoneError::WriteError {
            path: path.to_string(),
            source,
        })
    }
}
