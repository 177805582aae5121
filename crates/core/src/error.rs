//! Error types for the replay layer
//!
//! One error enum covers store lookups, blob decoding, encoding and
//! configuration. We use `thiserror` for `Display` and `Error`.

use thiserror::Error;

use crate::types::{CommandKey, TypeTag};

/// Result type alias for replay operations
pub type ReplayResult<T> = std::result::Result<T, ReplayError>;

/// Error types for the replay layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// No blob was recorded for the command
    #[error("Key not found: {0}")]
    KeyNotFound(CommandKey),

    /// The backing store failed for a reason other than a miss
    #[error("Storage error: {0}")]
    Storage(String),

    /// Scalar blob length does not match the width of the requested type
    #[error("Malformed scalar: {type_name} needs {expected} bytes, got {actual}")]
    MalformedScalar {
        /// Requested type name
        type_name: &'static str,
        /// Width of the type in bytes
        expected: usize,
        /// Bytes actually present
        actual: usize,
    },

    /// A sequence field claims more bytes than remain, or a negative length
    #[error("Truncated sequence: field needs {needed} bytes, {remaining} remaining")]
    TruncatedSequence {
        /// Bytes the field claimed (negative when the length itself was negative)
        needed: i64,
        /// Bytes left in the blob at that point
        remaining: usize,
    },

    /// A map field claims more bytes than remain, or a negative length
    #[error("Truncated map: field needs {needed} bytes, {remaining} remaining")]
    TruncatedMap {
        /// Bytes the field claimed (negative when the length itself was negative)
        needed: i64,
        /// Bytes left in the blob at that point
        remaining: usize,
    },

    /// Tagged sequence names a type outside the supported set
    #[error("Unsupported type: {0:?}")]
    UnsupportedType(String),

    /// Bytes left over after a complete parse
    #[error("Trailing bytes: {remaining} unconsumed")]
    TrailingBytes {
        /// Unconsumed byte count
        remaining: usize,
    },

    /// Value handed to the encoder does not match the sequence tag
    #[error("Tag mismatch: sequence is {expected}, value is {actual}")]
    TagMismatch {
        /// Declared sequence tag
        expected: TypeTag,
        /// Tag of the offending value
        actual: TypeTag,
    },

    /// Field too long to be described by a 32-bit length prefix
    #[error("Field too large: {len} bytes exceeds the 32-bit length prefix")]
    FieldTooLarge {
        /// Field length in bytes
        len: usize,
    },

    /// Configuration could not be read or is invalid
    #[error("Config error: {0}")]
    Config(String),
}

impl ReplayError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        ReplayError::Storage(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        ReplayError::Config(msg.into())
    }

    /// True for a store miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReplayError::KeyNotFound(_))
    }

    /// True when the blob was present but could not be decoded
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ReplayError::MalformedScalar { .. }
                | ReplayError::TruncatedSequence { .. }
                | ReplayError::TruncatedMap { .. }
                | ReplayError::UnsupportedType(_)
                | ReplayError::TrailingBytes { .. }
        )
    }
}
