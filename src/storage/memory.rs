// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! In-memory document store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::BlobStore;
use crate::error::StorageError;

/// Shared in-memory store. Clones see the same documents, so a test can keep
/// one handle while a registry owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a document exists for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.documents
            .lock()
            .map(|docs| docs.contains_key(key))
            .unwrap_or(false)
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.lock().map(|docs| docs.len()).unwrap_or(0)
    }

    /// Check if no documents are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let docs = self.documents.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(docs.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let mut docs = self.documents.lock().map_err(|_| StorageError::Poisoned)?;
        docs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_documents() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save("songs", b"hello").unwrap();
        assert!(other.contains("songs"));
        assert_eq!(other.load("songs").unwrap(), Some(b"hello".to_vec()));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_overwrite() {
        let store = MemoryStore::new();
        store.save("k", b"one").unwrap();
        store.save("k", b"two").unwrap();
        assert_eq!(store.load("k").unwrap(), Some(b"two".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.load("k").unwrap(), None);
    }
}
