//! cmdreplay - decode recorded key-value-store command results
//!
//! A record/replay test harness stores each command's result as a raw blob
//! keyed by the command's arguments. At replay time this crate fetches the
//! blob and decodes it back into the typed value the live store would have
//! returned.
//!
//! # Quick Start
//!
//! ```
//! use cmdreplay::{CommandKey, MemoryBlobStore, Reconstructor};
//!
//! let store = MemoryBlobStore::new();
//! store.record(CommandKey::new("INCR", ["hits"]), &7i64).unwrap();
//!
//! let replay = Reconstructor::new(store);
//! assert_eq!(replay.int_result(&CommandKey::new("INCR", ["hits"])).unwrap(), 7);
//! // Value form: zero on a miss, no error
//! assert_eq!(replay.int_value(&CommandKey::new("INCR", ["misses"])), 0);
//! ```
//!
//! # Architecture
//!
//! - `cmdreplay-core`: keys, shapes, tags, values, errors, `BlobStore`
//! - `cmdreplay-codec`: the blob wire format (pure, no I/O)
//! - `cmdreplay-storage`: in-memory `BlobStore`
//! - `cmdreplay-engine`: `Reconstructor` and `ReplayConfig`

pub use cmdreplay_codec::{
    decode_element, decode_expected, decode_scalar, decode_string, decode_string_map,
    decode_string_sequence, decode_tagged_sequence, encode_element, encode_scalar,
    encode_string, encode_string_map, encode_string_sequence, encode_tagged_sequence,
    BlobReader, BlobWriter, Decoded, Encode, Expected, Frame, FromBlob, Scalar, TagPolicy,
};
pub use cmdreplay_core::{
    Blob, BlobStore, CommandKey, Complex128, Complex64, ReplayError, ReplayResult, Shape,
    TaggedSequence, TypeTag, Value,
};
pub use cmdreplay_engine::{Reconstructor, ReplayConfig, CONFIG_FILE_NAME};
pub use cmdreplay_storage::MemoryBlobStore;
