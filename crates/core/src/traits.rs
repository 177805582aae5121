//! Store collaborator trait
//!
//! The replay layer never owns the recordings. It asks a `BlobStore` for the
//! blob recorded under a command key and decodes it. Anything behind the
//! trait (disk, network, a preloaded map) is the implementer's concern,
//! including retries and timeouts.

use std::sync::Arc;

use crate::error::ReplayResult;
use crate::types::CommandKey;

/// Immutable recorded blob, shared with the store that owns it.
pub type Blob = Arc<[u8]>;

/// Lookup of recorded blobs by command key.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait BlobStore: Send + Sync {
    /// Fetch the blob recorded for `key`.
    ///
    /// Returns `Ok(None)` on a miss. One synchronous call per lookup; the
    /// replay layer does not retry.
    ///
    /// # Errors
    ///
    /// Returns an error if the store itself fails.
    fn lookup(&self, key: &CommandKey) -> ReplayResult<Option<Blob>>;
}

impl<S: BlobStore + ?Sized> BlobStore for Arc<S> {
    fn lookup(&self, key: &CommandKey) -> ReplayResult<Option<Blob>> {
        (**self).lookup(key)
    }
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn lookup(&self, key: &CommandKey) -> ReplayResult<Option<Blob>> {
        (**self).lookup(key)
    }
}
