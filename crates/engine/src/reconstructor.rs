//! Result reconstruction
//!
//! Given a command key and the shape a caller expects, fetch the recorded
//! blob from the store and decode it.
//!
//! Two call conventions are provided for every shape:
//!
//! - **Result form** (`*_result`, `result`): returns `ReplayResult<T>` and
//!   never recovers from a failure.
//! - **Value form** (`*_value`, `value`): returns `T`, substituting the
//!   shape's zero value (`0`, `""`, empty sequence or map) on any lookup or
//!   decode failure. The error is dropped after an optional warning. A
//!   partly decoded value is never returned.
//!
//! Call sites that replay commands whose failures must not surface use the
//! value form; the choice between the two is the caller's, not a fallback
//! inside the decoder.

use std::collections::HashMap;

use tracing::{debug, warn};

use cmdreplay_codec::{decode_expected, Decoded, Expected, FromBlob, TagPolicy};
use cmdreplay_core::{
    Blob, BlobStore, CommandKey, ReplayError, ReplayResult, Shape, TaggedSequence,
};

use crate::config::ReplayConfig;

/// Decodes recorded command results fetched from a `BlobStore`.
///
/// Holds no mutable state, so one reconstructor can serve any number of
/// threads when the store is `Sync`.
#[derive(Debug, Clone)]
pub struct Reconstructor<S> {
    store: S,
    policy: TagPolicy,
    log_swallowed_errors: bool,
}

impl<S: BlobStore> Reconstructor<S> {
    /// Reconstructor with the default configuration
    pub fn new(store: S) -> Self {
        Reconstructor {
            store,
            policy: TagPolicy::default(),
            log_swallowed_errors: true,
        }
    }

    /// Reconstructor configured from a `ReplayConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config's tag policy is invalid.
    pub fn with_config(store: S, config: &ReplayConfig) -> ReplayResult<Self> {
        Ok(Reconstructor {
            store,
            policy: config.tag_policy()?,
            log_swallowed_errors: config.log_swallowed_errors,
        })
    }

    /// Replace the tagged-sequence policy
    pub fn with_policy(mut self, policy: TagPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active tagged-sequence policy
    pub fn policy(&self) -> TagPolicy {
        self.policy
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================================================================
    // Generic forms
    // ========================================================================

    /// Fetch and decode the blob recorded for `key` as `T`.
    pub fn result<T: FromBlob>(&self, key: &CommandKey) -> ReplayResult<T> {
        let blob = self.fetch(key, T::SHAPE)?;
        let value = T::from_blob(&blob, self.policy)?;
        self.note_skipped(key, value.skipped());
        Ok(value)
    }

    /// Like `result`, but yields `T::default()` on any failure.
    pub fn value<T: FromBlob>(&self, key: &CommandKey) -> T {
        self.result(key).unwrap_or_else(|e| {
            self.swallowed(key, T::SHAPE, &e);
            T::default()
        })
    }

    /// Fetch and decode according to a runtime expectation.
    pub fn result_expected(&self, key: &CommandKey, expected: Expected) -> ReplayResult<Decoded> {
        let blob = self.fetch(key, expected.shape())?;
        let decoded = decode_expected(&blob, expected, self.policy)?;
        if let Decoded::TaggedSequence(seq) = &decoded {
            self.note_skipped(key, seq.skipped);
        }
        Ok(decoded)
    }

    /// Like `result_expected`, but yields the expectation's zero value on
    /// any failure.
    pub fn value_expected(&self, key: &CommandKey, expected: Expected) -> Decoded {
        self.result_expected(key, expected).unwrap_or_else(|e| {
            self.swallowed(key, expected.shape(), &e);
            Decoded::zero(expected)
        })
    }

    // ========================================================================
    // Command families
    // ========================================================================

    /// Status reply (e.g. "OK") as text
    pub fn status_result(&self, key: &CommandKey) -> ReplayResult<String> {
        self.result(key)
    }

    /// Status reply, `""` on failure
    pub fn status_value(&self, key: &CommandKey) -> String {
        self.value(key)
    }

    /// String reply
    pub fn string_result(&self, key: &CommandKey) -> ReplayResult<String> {
        self.result(key)
    }

    /// String reply, `""` on failure
    pub fn string_value(&self, key: &CommandKey) -> String {
        self.value(key)
    }

    /// Integer reply (64-bit)
    pub fn int_result(&self, key: &CommandKey) -> ReplayResult<i64> {
        self.result(key)
    }

    /// Integer reply, `0` on failure
    pub fn int_value(&self, key: &CommandKey) -> i64 {
        self.value(key)
    }

    /// Float reply (64-bit)
    pub fn float_result(&self, key: &CommandKey) -> ReplayResult<f64> {
        self.result(key)
    }

    /// Float reply, `0.0` on failure
    pub fn float_value(&self, key: &CommandKey) -> f64 {
        self.value(key)
    }

    /// String-sequence reply
    pub fn string_slice_result(&self, key: &CommandKey) -> ReplayResult<Vec<String>> {
        self.result(key)
    }

    /// String-sequence reply, empty on failure
    pub fn string_slice_value(&self, key: &CommandKey) -> Vec<String> {
        self.value(key)
    }

    /// String-map reply
    pub fn string_map_result(&self, key: &CommandKey) -> ReplayResult<HashMap<String, String>> {
        self.result(key)
    }

    /// String-map reply, empty on failure
    pub fn string_map_value(&self, key: &CommandKey) -> HashMap<String, String> {
        self.value(key)
    }

    /// Heterogeneous reply recorded as a tagged sequence
    pub fn slice_result(&self, key: &CommandKey) -> ReplayResult<TaggedSequence> {
        self.result(key)
    }

    /// Tagged-sequence reply, empty on failure
    pub fn slice_value(&self, key: &CommandKey) -> TaggedSequence {
        self.value(key)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn fetch(&self, key: &CommandKey, shape: Shape) -> ReplayResult<Blob> {
        let blob = self
            .store
            .lookup(key)?
            .ok_or_else(|| ReplayError::KeyNotFound(key.clone()))?;
        debug!(key = %key, shape = %shape, len = blob.len(), "fetched blob");
        Ok(blob)
    }

    fn swallowed(&self, key: &CommandKey, shape: Shape, err: &ReplayError) {
        if self.log_swallowed_errors {
            warn!(key = %key, shape = %shape, error = %err, "returning zero value");
        }
    }

    fn note_skipped(&self, key: &CommandKey, skipped: usize) {
        if skipped > 0 {
            debug!(key = %key, skipped, "skipped undecodable tagged elements");
        }
    }
}
