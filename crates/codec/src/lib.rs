//! Blob codec for recorded command results
//!
//! Decodes the length-prefixed, little-endian blobs written by the recording
//! side back into typed values. Pure functions over byte slices: no I/O and
//! no shared state, so decodes can run on any number of threads.
//!
//! | Shape | Layout |
//! |---|---|
//! | scalar | raw fixed-width bytes, no header |
//! | string | raw bytes, no header |
//! | string sequence | `i32 count` + count x (`i32 len` + bytes) |
//! | string map | `i32 count` + count x (`i32 keylen` + key + `i32 vallen` + val) |
//! | tagged sequence | `i32 count` + `i32 taglen` + tag + count x (`i32 len` + bytes) |
//!
//! # Usage
//!
//! ```
//! use cmdreplay_codec::{decode_string_sequence, encode_string_sequence};
//!
//! let blob = encode_string_sequence(&["hello", "bye"]).unwrap();
//! assert_eq!(decode_string_sequence(&blob).unwrap(), vec!["hello", "bye"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decode;
pub mod encode;
pub mod reader;
pub mod scalar;
pub mod shape;
pub mod tagged;

pub use decode::{decode_string, decode_string_map, decode_string_sequence};
pub use encode::{
    encode_element, encode_scalar, encode_string, encode_string_map, encode_string_sequence,
    encode_tagged_sequence, BlobWriter, Encode,
};
pub use reader::{BlobReader, Frame};
pub use scalar::{decode_scalar, Scalar};
pub use shape::{decode_expected, Decoded, Expected, FromBlob};
pub use tagged::{decode_element, decode_tagged_sequence, TagPolicy};
