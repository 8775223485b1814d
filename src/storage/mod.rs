// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Persistence gateway.
//!
//! This module provides:
//! - BlobStore: key/value storage of opaque documents
//! - FileStore: one YAML file per key in a data directory
//! - MemoryStore: shared in-memory map for tests and throwaway sessions
//! - Codec helpers that turn registry state into documents and back

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::StorageError;

/// Default key for the song dictionary
pub const SONGS_KEY: &str = "songdictionary";

/// Default key for the performance set list
pub const SETS_KEY: &str = "performancesets";

/// Key/value store for persisted documents
pub trait BlobStore {
    /// Load the document stored under `key`, `None` if nothing was saved yet
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store a document under `key`, replacing any previous one
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).save(key, bytes)
    }
}

/// Encode a value as a YAML document
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, StorageError> {
    serde_yaml::to_string(value)
        .map(String::into_bytes)
        .map_err(|e| StorageError::Encode(e.to_string()))
}

/// Decode a YAML document
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StorageError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

/// Encode and save, logging instead of returning any failure
pub(crate) fn save_best_effort<S, T>(store: &S, key: &str, value: &T)
where
    S: BlobStore + ?Sized,
    T: Serialize + ?Sized,
{
    let result = encode(value).and_then(|bytes| store.save(key, &bytes));
    if let Err(e) = result {
        warn!(key, error = %e, "failed to persist document");
    }
}

/// Load and decode; missing, unreadable and undecodable documents all come back as `None`
pub(crate) fn load_best_effort<S, T>(store: &S, key: &str) -> Option<T>
where
    S: BlobStore + ?Sized,
    T: DeserializeOwned,
{
    let bytes = match store.load(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read document");
            return None;
        }
    };

    match decode(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "discarding undecodable document");
            None
        }
    }
}
