use crate::domain::ports::EntrySource;
use crate::utils::error::{RenderError, Result};
use std::ffi::OsString;
use std::path::Path;

/// Lists a local directory, one level deep.
#[derive(Debug, Clone, Default)]
pub struct LocalDirectory;

impl LocalDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl EntrySource for LocalDirectory {
    async fn list_entries(&self, directory: &Path) -> Result<Vec<OsString>> {
        let unavailable = |source| RenderError::DirectoryUnavailable {
            path: directory.to_path_buf(),
            source,
        };

        let mut read_dir = tokio::fs::read_dir(directory).await.map_err(unavailable)?;
        let mut entries = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(unavailable)? {
            entries.push(entry.file_name());
        }

        tracing::debug!(
            "Listed {} entries in {}",
            entries.len(),
            directory.display()
        );
        Ok(entries)
    }
}
