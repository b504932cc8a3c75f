use super::LocalStorage;
use crate::core::{Result, StoreError};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-per-key storage backend
///
/// Each key maps to `<root>/<sanitized-key>.json`. Writes go through a
/// temp file followed by a rename, so a crash mid-write never leaves a
/// truncated value behind. Two handles (or two processes) sharing one
/// root are last-writer-wins with no detection, exactly like two browser
/// tabs sharing one localStorage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|err| {
            StoreError::Storage(format!(
                "Failed to create storage root '{}': {}",
                root.display(),
                err
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let sanitized = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect::<String>();
        self.root.join(format!("{sanitized}.json"))
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Storage(format!(
                "Failed to read key '{key}': {err}"
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).map_err(|err| {
            StoreError::Storage(format!("Failed to write temp file for key '{key}': {err}"))
        })?;
        fs::rename(&tmp, &path).map_err(|err| {
            StoreError::Storage(format!("Failed to commit value for key '{key}': {err}"))
        })?;
        debug!("wrote {} bytes under key '{key}'", value.len());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Storage(format!(
                "Failed to remove key '{key}': {err}"
            ))),
        }
    }
}
