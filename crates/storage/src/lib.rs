//! Storage backends for recorded command results
//!
//! This crate implements `BlobStore` backends:
//! - MemoryBlobStore: FxHashMap-based store behind a `parking_lot::RwLock`
//!
//! Recordings are produced with the blob codec, so a store filled through
//! `MemoryBlobStore::record` always holds blobs the reconstructor can decode.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryBlobStore;
