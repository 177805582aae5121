//! Shape-directed decoding.
//!
//! `FromBlob` ties a Rust type to the shape it is recorded in, so callers can
//! ask for `Vec<String>` or `i64` directly. `Expected`/`Decoded` cover the
//! dynamic case where the shape is only known at runtime.

use std::collections::HashMap;

use cmdreplay_core::{
    Complex128, Complex64, ReplayResult, Shape, TaggedSequence, TypeTag, Value,
};

use crate::decode::{decode_string, decode_string_map, decode_string_sequence};
use crate::scalar::decode_scalar;
use crate::tagged::{decode_element, decode_tagged_sequence, TagPolicy};

/// A type that can be decoded from a whole blob.
///
/// `Default` is the zero value handed out when a decode is not allowed to
/// fail.
pub trait FromBlob: Sized + Default {
    /// The shape this type is recorded in
    const SHAPE: Shape;

    /// Decode the whole blob
    fn from_blob(bytes: &[u8], policy: TagPolicy) -> ReplayResult<Self>;

    /// Elements dropped by a lenient decode; zero for every other shape
    fn skipped(&self) -> usize {
        0
    }
}

macro_rules! scalar_from_blob {
    ($($ty:ty),*) => {
        $(
            impl FromBlob for $ty {
                const SHAPE: Shape = Shape::Scalar;

                fn from_blob(bytes: &[u8], _policy: TagPolicy) -> ReplayResult<Self> {
                    decode_scalar::<$ty>(bytes)
                }
            }
        )*
    };
}

scalar_from_blob!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool, Complex64, Complex128);

impl FromBlob for String {
    const SHAPE: Shape = Shape::String;

    fn from_blob(bytes: &[u8], _policy: TagPolicy) -> ReplayResult<Self> {
        Ok(decode_string(bytes))
    }
}

impl FromBlob for Vec<String> {
    const SHAPE: Shape = Shape::StringSequence;

    fn from_blob(bytes: &[u8], _policy: TagPolicy) -> ReplayResult<Self> {
        decode_string_sequence(bytes)
    }
}

impl FromBlob for HashMap<String, String> {
    const SHAPE: Shape = Shape::StringMap;

    fn from_blob(bytes: &[u8], _policy: TagPolicy) -> ReplayResult<Self> {
        decode_string_map(bytes)
    }
}

impl FromBlob for TaggedSequence {
    const SHAPE: Shape = Shape::TaggedSequence;

    fn from_blob(bytes: &[u8], policy: TagPolicy) -> ReplayResult<Self> {
        decode_tagged_sequence(bytes, policy)
    }

    fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Runtime description of what a blob should decode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A scalar of the given element type
    Scalar(TypeTag),
    /// Raw text
    String,
    /// Sequence of strings
    StringSequence,
    /// String-to-string map
    StringMap,
    /// Tagged sequence
    TaggedSequence,
}

impl Expected {
    /// Shape category of this expectation
    pub fn shape(&self) -> Shape {
        match self {
            Expected::Scalar(_) => Shape::Scalar,
            Expected::String => Shape::String,
            Expected::StringSequence => Shape::StringSequence,
            Expected::StringMap => Shape::StringMap,
            Expected::TaggedSequence => Shape::TaggedSequence,
        }
    }
}

/// A decoded blob of any shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Scalar value
    Scalar(Value),
    /// Text
    String(String),
    /// Sequence of strings
    StringSequence(Vec<String>),
    /// String-to-string map
    StringMap(HashMap<String, String>),
    /// Tagged sequence
    TaggedSequence(TaggedSequence),
}

impl Decoded {
    /// Zero value of the expected shape: numeric zero, false, empty
    /// string, empty sequence or empty map.
    pub fn zero(expected: Expected) -> Decoded {
        match expected {
            Expected::Scalar(tag) => Decoded::Scalar(zero_value(tag)),
            Expected::String => Decoded::String(String::new()),
            Expected::StringSequence => Decoded::StringSequence(Vec::new()),
            Expected::StringMap => Decoded::StringMap(HashMap::new()),
            Expected::TaggedSequence => Decoded::TaggedSequence(TaggedSequence::default()),
        }
    }

    /// Shape category of this value
    pub fn shape(&self) -> Shape {
        match self {
            Decoded::Scalar(_) => Shape::Scalar,
            Decoded::String(_) => Shape::String,
            Decoded::StringSequence(_) => Shape::StringSequence,
            Decoded::StringMap(_) => Shape::StringMap,
            Decoded::TaggedSequence(_) => Shape::TaggedSequence,
        }
    }
}

fn zero_value(tag: TypeTag) -> Value {
    match tag {
        TypeTag::String => Value::String(String::new()),
        TypeTag::Int => Value::Int(0),
        TypeTag::Int8 => Value::Int8(0),
        TypeTag::Int16 => Value::Int16(0),
        TypeTag::Int32 => Value::Int32(0),
        TypeTag::Int64 => Value::Int64(0),
        TypeTag::Uint => Value::Uint(0),
        TypeTag::Uint8 => Value::Uint8(0),
        TypeTag::Uint16 => Value::Uint16(0),
        TypeTag::Uint32 => Value::Uint32(0),
        TypeTag::Uint64 => Value::Uint64(0),
        TypeTag::Float32 => Value::Float32(0.0),
        TypeTag::Float64 => Value::Float64(0.0),
        TypeTag::Complex64 => Value::Complex64(Complex64::default()),
        TypeTag::Complex128 => Value::Complex128(Complex128::default()),
        TypeTag::Uintptr => Value::Uintptr(0),
        TypeTag::Bool => Value::Bool(false),
    }
}

/// Decode a blob according to a runtime expectation.
pub fn decode_expected(
    bytes: &[u8],
    expected: Expected,
    policy: TagPolicy,
) -> ReplayResult<Decoded> {
    let decoded = match expected {
        Expected::Scalar(tag) => Decoded::Scalar(decode_element(tag, bytes)?),
        Expected::String => Decoded::String(decode_string(bytes)),
        Expected::StringSequence => Decoded::StringSequence(decode_string_sequence(bytes)?),
        Expected::StringMap => Decoded::StringMap(decode_string_map(bytes)?),
        Expected::TaggedSequence => {
            Decoded::TaggedSequence(decode_tagged_sequence(bytes, policy)?)
        }
    };
    Ok(decoded)
}
