//! String, string-sequence and string-map decoders.
//!
//! # Format
//!
//! ```text
//! string:          raw bytes, no header
//! string sequence: [count: i32] count x ([len: i32][bytes])
//! string map:      [count: i32] count x ([keylen: i32][key][vallen: i32][val])
//! ```
//!
//! All integers are little-endian. A decode either consumes every byte of
//! the blob or fails; a failure never hands back a partly filled container.

use std::collections::HashMap;

use cmdreplay_core::ReplayResult;

use crate::reader::{BlobReader, Frame, LEN_PREFIX};

/// Decode a whole blob as text.
///
/// Never fails. Invalid UTF-8 sequences are replaced with U+FFFD; an empty
/// blob is an empty string.
pub fn decode_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decode a length-prefixed sequence of strings.
pub fn decode_string_sequence(bytes: &[u8]) -> ReplayResult<Vec<String>> {
    let mut reader = BlobReader::new(bytes, Frame::Sequence);
    let count = reader.read_i32()?;
    let count = reader.check_count(count, LEN_PREFIX)?;

    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(decode_string(reader.read_field()?));
    }

    reader.finish()?;
    Ok(items)
}

/// Decode a length-prefixed string-to-string map.
///
/// On duplicate keys the last entry wins.
pub fn decode_string_map(bytes: &[u8]) -> ReplayResult<HashMap<String, String>> {
    let mut reader = BlobReader::new(bytes, Frame::Map);
    let count = reader.read_i32()?;
    let count = reader.check_count(count, 2 * LEN_PREFIX)?;

    let mut map = HashMap::with_capacity(count);
    for _ in 0..count {
        let key = decode_string(reader.read_field()?);
        let value = decode_string(reader.read_field()?);
        map.insert(key, value);
    }

    reader.finish()?;
    Ok(map)
}
