//! Core types and traits for command replay
//!
//! This crate defines the foundational types shared by the codec, the
//! storage backends and the reconstructor:
//! - CommandKey: lookup key derived from a command name and arguments
//! - Shape: expected decoded type category of a blob
//! - TypeTag: closed set of element types in a tagged sequence
//! - Value / TaggedSequence: dynamically typed decode results
//! - ReplayError: error type hierarchy
//! - BlobStore: the external store collaborator

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{ReplayError, ReplayResult};
pub use traits::{Blob, BlobStore};
pub use types::{CommandKey, Shape, TypeTag};
pub use value::{Complex128, Complex64, TaggedSequence, Value};
