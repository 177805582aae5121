//! Replay engine: reconstructs recorded command results
//!
//! This crate provides:
//! - Reconstructor: fetches blobs from a `BlobStore` and decodes them, in
//!   result form (errors surfaced) or value form (zero value on failure)
//! - ReplayConfig: `replay.toml` configuration (tag policy, logging)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod reconstructor;

pub use config::{ReplayConfig, CONFIG_FILE_NAME};
pub use reconstructor::Reconstructor;
