//! Type-tagged heterogeneous sequences.
//!
//! # Format
//!
//! ```text
//! [count: i32][taglen: i32][tag: taglen bytes] count x ([len: i32][bytes])
//! ```
//!
//! The tag is read once and selects the element decoder for every element.
//! Dispatch is an exhaustive match over `TypeTag`, so adding a tag without a
//! decoder does not compile.

use std::fmt;

use cmdreplay_core::{
    Complex128, Complex64, ReplayError, ReplayResult, TaggedSequence, TypeTag, Value,
};

use crate::decode::decode_string;
use crate::reader::{BlobReader, Frame, LEN_PREFIX};
use crate::scalar::decode_scalar;

/// How a tagged-sequence decode treats elements it cannot decode.
///
/// Framing errors (bad lengths, trailing bytes) fail the decode under
/// either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TagPolicy {
    /// Unknown tag or bad element fails the whole sequence
    #[default]
    Strict,
    /// Unknown tag or bad element is skipped and counted in `skipped`
    Lenient,
}

impl TagPolicy {
    /// Parse the configuration spelling ("strict" or "lenient")
    pub fn parse(s: &str) -> Option<TagPolicy> {
        match s {
            "strict" => Some(TagPolicy::Strict),
            "lenient" => Some(TagPolicy::Lenient),
            _ => None,
        }
    }

    /// Configuration spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            TagPolicy::Strict => "strict",
            TagPolicy::Lenient => "lenient",
        }
    }
}

impl fmt::Display for TagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode one element's bytes according to `tag`.
pub fn decode_element(tag: TypeTag, bytes: &[u8]) -> ReplayResult<Value> {
    let value = match tag {
        TypeTag::String => Value::String(decode_string(bytes)),
        TypeTag::Int => Value::Int(decode_scalar::<i64>(bytes)?),
        TypeTag::Int8 => Value::Int8(decode_scalar::<i8>(bytes)?),
        TypeTag::Int16 => Value::Int16(decode_scalar::<i16>(bytes)?),
        TypeTag::Int32 => Value::Int32(decode_scalar::<i32>(bytes)?),
        TypeTag::Int64 => Value::Int64(decode_scalar::<i64>(bytes)?),
        TypeTag::Uint => Value::Uint(decode_scalar::<u64>(bytes)?),
        TypeTag::Uint8 => Value::Uint8(decode_scalar::<u8>(bytes)?),
        TypeTag::Uint16 => Value::Uint16(decode_scalar::<u16>(bytes)?),
        TypeTag::Uint32 => Value::Uint32(decode_scalar::<u32>(bytes)?),
        TypeTag::Uint64 => Value::Uint64(decode_scalar::<u64>(bytes)?),
        TypeTag::Float32 => Value::Float32(decode_scalar::<f32>(bytes)?),
        TypeTag::Float64 => Value::Float64(decode_scalar::<f64>(bytes)?),
        TypeTag::Complex64 => Value::Complex64(decode_scalar::<Complex64>(bytes)?),
        TypeTag::Complex128 => Value::Complex128(decode_scalar::<Complex128>(bytes)?),
        TypeTag::Uintptr => Value::Uintptr(decode_scalar::<u64>(bytes)?),
        TypeTag::Bool => Value::Bool(decode_scalar::<bool>(bytes)?),
    };
    Ok(value)
}

/// Decode a tagged sequence.
///
/// Under `Strict`, an unknown tag yields `UnsupportedType` and the first bad
/// element's error is returned. Under `Lenient`, such elements are left out
/// and counted; nothing is zero-filled in their place.
pub fn decode_tagged_sequence(bytes: &[u8], policy: TagPolicy) -> ReplayResult<TaggedSequence> {
    let mut reader = BlobReader::new(bytes, Frame::Sequence);
    let count = reader.read_i32()?;
    let tag_name = reader.read_field()?;
    let count = reader.check_count(count, LEN_PREFIX)?;

    let tag = match (TypeTag::from_bytes(tag_name), policy) {
        (Some(tag), _) => Some(tag),
        (None, TagPolicy::Strict) => {
            return Err(ReplayError::UnsupportedType(decode_string(tag_name)))
        }
        (None, TagPolicy::Lenient) => None,
    };

    let mut values = Vec::with_capacity(count);
    let mut skipped = 0;
    for _ in 0..count {
        let element = reader.read_field()?;
        match tag.map(|tag| decode_element(tag, element)) {
            Some(Ok(value)) => values.push(value),
            Some(Err(e)) if policy == TagPolicy::Strict => return Err(e),
            _ => skipped += 1,
        }
    }

    reader.finish()?;
    Ok(TaggedSequence { values, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(count: i32, tag: &[u8], elements: &[&[u8]]) -> Vec<u8> {
        let mut out = count.to_le_bytes().to_vec();
        out.extend_from_slice(&(tag.len() as i32).to_le_bytes());
        out.extend_from_slice(tag);
        for e in elements {
            out.extend_from_slice(&(e.len() as i32).to_le_bytes());
            out.extend_from_slice(e);
        }
        out
    }

    #[test]
    fn test_int32_sequence() {
        let a = 7i32.to_le_bytes();
        let b = (-1i32).to_le_bytes();
        let data = blob(2, b"int32", &[&a, &b]);

        let seq = decode_tagged_sequence(&data, TagPolicy::Strict).unwrap();
        assert_eq!(seq.values, vec![Value::Int32(7), Value::Int32(-1)]);
        assert_eq!(seq.skipped, 0);
    }

    #[test]
    fn test_string_sequence_elements() {
        let data = blob(2, b"string", &[b"a", b"bc"]);
        let seq = decode_tagged_sequence(&data, TagPolicy::Strict).unwrap();
        assert_eq!(
            seq.values,
            vec![Value::String("a".into()), Value::String("bc".into())]
        );
    }

    #[test]
    fn test_unknown_tag_strict_fails() {
        let data = blob(1, b"notatype", &[&[1]]);
        assert_eq!(
            decode_tagged_sequence(&data, TagPolicy::Strict).unwrap_err(),
            ReplayError::UnsupportedType("notatype".to_string())
        );
    }

    #[test]
    fn test_unknown_tag_lenient_skips_all() {
        let data = blob(2, b"notatype", &[&[1], &[2]]);
        let seq = decode_tagged_sequence(&data, TagPolicy::Lenient).unwrap();
        assert!(seq.values.is_empty());
        assert_eq!(seq.skipped, 2);
    }

    #[test]
    fn test_bad_element_strict_fails() {
        let good = 1i64.to_le_bytes();
        let data = blob(2, b"int64", &[&good, &[1, 2, 3]]);
        assert!(matches!(
            decode_tagged_sequence(&data, TagPolicy::Strict),
            Err(ReplayError::MalformedScalar { actual: 3, .. })
        ));
    }

    #[test]
    fn test_bad_element_lenient_skipped() {
        let good = 1i64.to_le_bytes();
        let data = blob(3, b"int64", &[&good, &[1, 2, 3], &good]);
        let seq = decode_tagged_sequence(&data, TagPolicy::Lenient).unwrap();
        assert_eq!(seq.values, vec![Value::Int64(1), Value::Int64(1)]);
        assert_eq!(seq.skipped, 1);
    }

    #[test]
    fn test_framing_error_fails_under_lenient() {
        let mut data = blob(1, b"bool", &[&[1]]);
        data.push(0);
        assert_eq!(
            decode_tagged_sequence(&data, TagPolicy::Lenient).unwrap_err(),
            ReplayError::TrailingBytes { remaining: 1 }
        );
    }

    #[test]
    fn test_huge_tag_length_fails_fast() {
        let mut data = 1i32.to_le_bytes().to_vec();
        data.extend_from_slice(&i32::MAX.to_le_bytes());
        data.extend_from_slice(b"int");
        assert!(matches!(
            decode_tagged_sequence(&data, TagPolicy::Strict),
            Err(ReplayError::TruncatedSequence { .. })
        ));
    }

    #[test]
    fn test_every_tag_dispatches() {
        for tag in TypeTag::ALL {
            let width = match tag {
                TypeTag::String => 3,
                TypeTag::Int8 | TypeTag::Uint8 | TypeTag::Bool => 1,
                TypeTag::Int16 | TypeTag::Uint16 => 2,
                TypeTag::Int32 | TypeTag::Uint32 | TypeTag::Float32 => 4,
                TypeTag::Complex128 => 16,
                _ => 8,
            };
            let value = decode_element(tag, &vec![0u8; width]).unwrap();
            assert_eq!(value.type_tag(), tag);
        }
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(TagPolicy::parse("strict"), Some(TagPolicy::Strict));
        assert_eq!(TagPolicy::parse("lenient"), Some(TagPolicy::Lenient));
        assert_eq!(TagPolicy::parse("Strict"), None);
        assert_eq!(TagPolicy::default(), TagPolicy::Strict);
    }
}
