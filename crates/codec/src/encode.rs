//! Conformant encoder.
//!
//! Produces blobs in exactly the layout the decoders accept. Used by the
//! recording side and by round-trip tests.

use std::collections::HashMap;

use cmdreplay_core::{
    Complex128, Complex64, ReplayError, ReplayResult, TaggedSequence, TypeTag, Value,
};

use crate::scalar::Scalar;

/// Append-only blob builder.
#[derive(Debug, Clone, Default)]
pub struct BlobWriter {
    buf: Vec<u8>,
}

impl BlobWriter {
    /// Empty writer
    pub fn new() -> Self {
        BlobWriter { buf: Vec::new() }
    }

    /// Write a count or length prefix
    pub fn write_len(&mut self, len: usize) -> ReplayResult<()> {
        let len = i32::try_from(len).map_err(|_| ReplayError::FieldTooLarge { len })?;
        len.write_le(&mut self.buf);
        Ok(())
    }

    /// Write a length-prefixed field
    pub fn write_field(&mut self, bytes: &[u8]) -> ReplayResult<()> {
        self.write_len(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Finished blob
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Encode one scalar (no header).
pub fn encode_scalar<T: Scalar>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(T::WIDTH);
    value.write_le(&mut out);
    out
}

/// Encode text (no header).
pub fn encode_string(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Encode a sequence of strings.
pub fn encode_string_sequence<S: AsRef<str>>(items: &[S]) -> ReplayResult<Vec<u8>> {
    let mut writer = BlobWriter::new();
    writer.write_len(items.len())?;
    for item in items {
        writer.write_field(item.as_ref().as_bytes())?;
    }
    Ok(writer.into_bytes())
}

/// Encode a string map. Entries are written in key order so equal maps
/// produce identical blobs.
pub fn encode_string_map(map: &HashMap<String, String>) -> ReplayResult<Vec<u8>> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort();

    let mut writer = BlobWriter::new();
    writer.write_len(entries.len())?;
    for (key, value) in entries {
        writer.write_field(key.as_bytes())?;
        writer.write_field(value.as_bytes())?;
    }
    Ok(writer.into_bytes())
}

/// Encode the bytes of one element (what `decode_element` reads back).
pub fn encode_element(value: &Value) -> Vec<u8> {
    match value {
        Value::String(s) => encode_string(s),
        Value::Int(v) | Value::Int64(v) => encode_scalar(*v),
        Value::Int8(v) => encode_scalar(*v),
        Value::Int16(v) => encode_scalar(*v),
        Value::Int32(v) => encode_scalar(*v),
        Value::Uint(v) | Value::Uint64(v) | Value::Uintptr(v) => encode_scalar(*v),
        Value::Uint8(v) => encode_scalar(*v),
        Value::Uint16(v) => encode_scalar(*v),
        Value::Uint32(v) => encode_scalar(*v),
        Value::Float32(v) => encode_scalar(*v),
        Value::Float64(v) => encode_scalar(*v),
        Value::Complex64(v) => encode_scalar::<Complex64>(*v),
        Value::Complex128(v) => encode_scalar::<Complex128>(*v),
        Value::Bool(v) => encode_scalar(*v),
    }
}

/// Encode a tagged sequence whose elements all carry `tag`.
///
/// # Errors
///
/// `TagMismatch` if any value's tag differs from `tag`.
pub fn encode_tagged_sequence(tag: TypeTag, values: &[Value]) -> ReplayResult<Vec<u8>> {
    let mut writer = BlobWriter::new();
    writer.write_len(values.len())?;
    writer.write_field(tag.name().as_bytes())?;
    for value in values {
        if value.type_tag() != tag {
            return Err(ReplayError::TagMismatch {
                expected: tag,
                actual: value.type_tag(),
            });
        }
        writer.write_field(&encode_element(value))?;
    }
    Ok(writer.into_bytes())
}

/// A type that can be written as a whole blob.
pub trait Encode {
    /// Encode into a fresh blob
    fn encode_blob(&self) -> ReplayResult<Vec<u8>>;
}

macro_rules! scalar_encode {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                fn encode_blob(&self) -> ReplayResult<Vec<u8>> {
                    Ok(encode_scalar(*self))
                }
            }
        )*
    };
}

scalar_encode!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool, Complex64, Complex128);

impl Encode for str {
    fn encode_blob(&self) -> ReplayResult<Vec<u8>> {
        Ok(encode_string(self))
    }
}

impl Encode for String {
    fn encode_blob(&self) -> ReplayResult<Vec<u8>> {
        Ok(encode_string(self))
    }
}

impl Encode for Vec<String> {
    fn encode_blob(&self) -> ReplayResult<Vec<u8>> {
        encode_string_sequence(self)
    }
}

impl Encode for HashMap<String, String> {
    fn encode_blob(&self) -> ReplayResult<Vec<u8>> {
        encode_string_map(self)
    }
}

// The tag is taken from the first element; an empty sequence is written
// with the "string" tag.
impl Encode for TaggedSequence {
    fn encode_blob(&self) -> ReplayResult<Vec<u8>> {
        let tag = self
            .values
            .first()
            .map(Value::type_tag)
            .unwrap_or(TypeTag::String);
        encode_tagged_sequence(tag, &self.values)
    }
}
