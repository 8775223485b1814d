// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File-backed document store.
//!
//! Each key maps to `<dir>/<key>.yaml`. Writes go to a temporary sibling
//! first and are renamed into place, so a crash mid-write leaves the previous
//! document intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::BlobStore;
use crate::error::StorageError;

/// Document store rooted in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store for the given directory (created lazily on first save)
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Get the data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document stored under `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.yaml", key))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl BlobStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, e))?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.yaml.tmp", key));
        fs::write(&tmp, bytes).map_err(|e| Self::io_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| Self::io_error(key, e))?;

        debug!(path = %path.display(), bytes = bytes.len(), "saved document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.load("songdictionary").unwrap(), None);
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("data"));

        store.save("songdictionary", b"1: x").unwrap();
        assert!(store.path_for("songdictionary").exists());
        assert_eq!(store.load("songdictionary").unwrap(), Some(b"1: x".to_vec()));
    }

    #[test]
    fn test_save_replaces_previous() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.save("performancesets", b"[]").unwrap();
        store.save("performancesets", b"- name: x").unwrap();
        assert_eq!(
            store.load("performancesets").unwrap(),
            Some(b"- name: x".to_vec())
        );
        // No temp file left behind
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let store = FileStore::new(&blocker);
        let result = store.save("songdictionary", b"x");
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
