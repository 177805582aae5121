//! In-memory blob store
//!
//! Holds recorded blobs in an `FxHashMap` behind a `parking_lot::RwLock`.
//! Lookups take the read lock and clone the `Arc`, so readers never copy
//! blob bytes and never block each other.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use cmdreplay_codec::Encode;
use cmdreplay_core::{Blob, BlobStore, CommandKey, ReplayResult};

/// Blob store backed by a hash map
///
/// Thread-safe through `parking_lot::RwLock`. Cloning the store shares the
/// underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<FxHashMap<CommandKey, Blob>>>,
}

impl MemoryBlobStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw blob bytes for a command, replacing any previous recording.
    ///
    /// Returns the previous blob if one existed.
    pub fn insert(&self, key: CommandKey, blob: impl Into<Blob>) -> Option<Blob> {
        let blob = blob.into();
        debug!(key = %key, len = blob.len(), "recording blob");
        self.blobs.write().insert(key, blob)
    }

    /// Encode `value` with the blob codec and store it for a command.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded.
    pub fn record<T: Encode + ?Sized>(&self, key: CommandKey, value: &T) -> ReplayResult<()> {
        let bytes = value.encode_blob()?;
        self.insert(key, bytes);
        Ok(())
    }

    /// Remove the recording for a command
    pub fn remove(&self, key: &CommandKey) -> Option<Blob> {
        self.blobs.write().remove(key)
    }

    /// True if a blob is recorded for the command
    pub fn contains(&self, key: &CommandKey) -> bool {
        self.blobs.read().contains_key(key)
    }

    /// Number of recorded blobs
    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    /// True if nothing is recorded
    pub fn is_empty(&self) -> bool {
        self.blobs.read().is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn lookup(&self, key: &CommandKey) -> ReplayResult<Option<Blob>> {
        Ok(self.blobs.read().get(key).cloned())
    }
}
