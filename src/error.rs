// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Errors raised by the persistence layer.
//!
//! Registries never surface these to callers; they are logged and dropped.

use thiserror::Error;

/// Failure while reading or writing a persisted document
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("encode error: {0}")]
    Encode(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("store lock poisoned")]
    Poisoned,
}

impl From<serde_yaml::Error> for StorageError {
    fn from(e: serde_yaml::Error) -> Self {
        StorageError::Decode(e.to_string())
    }
}
