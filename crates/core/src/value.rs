//! Decoded value types
//!
//! `Value` is the dynamically-typed element of a tagged sequence. Every
//! variant corresponds to exactly one `TypeTag`.

use serde::{Deserialize, Serialize};

use crate::types::TypeTag;

/// Complex number of two `f32` components (wire name "complex64").
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex64 {
    /// Real part
    pub re: f32,
    /// Imaginary part
    pub im: f32,
}

impl Complex64 {
    /// Create from real and imaginary parts
    pub fn new(re: f32, im: f32) -> Self {
        Complex64 { re, im }
    }
}

/// Complex number of two `f64` components (wire name "complex128").
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex128 {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex128 {
    /// Create from real and imaginary parts
    pub fn new(re: f64, im: f64) -> Self {
        Complex128 { re, im }
    }
}

/// One element of a tagged sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// "string"
    String(String),
    /// "int"
    Int(i64),
    /// "int8"
    Int8(i8),
    /// "int16"
    Int16(i16),
    /// "int32"
    Int32(i32),
    /// "int64"
    Int64(i64),
    /// "uint"
    Uint(u64),
    /// "uint8"
    Uint8(u8),
    /// "uint16"
    Uint16(u16),
    /// "uint32"
    Uint32(u32),
    /// "uint64"
    Uint64(u64),
    /// "float32"
    Float32(f32),
    /// "float64"
    Float64(f64),
    /// "complex64"
    Complex64(Complex64),
    /// "complex128"
    Complex128(Complex128),
    /// "uintptr"
    Uintptr(u64),
    /// "bool"
    Bool(bool),
}

impl Value {
    /// The tag this value is recorded under.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::String(_) => TypeTag::String,
            Value::Int(_) => TypeTag::Int,
            Value::Int8(_) => TypeTag::Int8,
            Value::Int16(_) => TypeTag::Int16,
            Value::Int32(_) => TypeTag::Int32,
            Value::Int64(_) => TypeTag::Int64,
            Value::Uint(_) => TypeTag::Uint,
            Value::Uint8(_) => TypeTag::Uint8,
            Value::Uint16(_) => TypeTag::Uint16,
            Value::Uint32(_) => TypeTag::Uint32,
            Value::Uint64(_) => TypeTag::Uint64,
            Value::Float32(_) => TypeTag::Float32,
            Value::Float64(_) => TypeTag::Float64,
            Value::Complex64(_) => TypeTag::Complex64,
            Value::Complex128(_) => TypeTag::Complex128,
            Value::Uintptr(_) => TypeTag::Uintptr,
            Value::Bool(_) => TypeTag::Bool,
        }
    }

    /// Borrow as a string, if this is a string element
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Widen any integer variant to `i128`
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Value::Int(v) | Value::Int64(v) => Some(v as i128),
            Value::Int8(v) => Some(v as i128),
            Value::Int16(v) => Some(v as i128),
            Value::Int32(v) => Some(v as i128),
            Value::Uint(v) | Value::Uint64(v) | Value::Uintptr(v) => Some(v as i128),
            Value::Uint8(v) => Some(v as i128),
            Value::Uint16(v) => Some(v as i128),
            Value::Uint32(v) => Some(v as i128),
            _ => None,
        }
    }

    /// Borrow as a bool, if this is a bool element
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Decoded tagged sequence.
///
/// `skipped` counts elements dropped under the lenient tag policy; it is
/// always zero for a strict decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaggedSequence {
    /// Decoded elements, in wire order
    pub values: Vec<Value>,
    /// Elements that could not be decoded and were left out
    pub skipped: usize,
}

impl TaggedSequence {
    /// Sequence with no skipped elements
    pub fn new(values: Vec<Value>) -> Self {
        TaggedSequence { values, skipped: 0 }
    }

    /// Number of decoded elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no element was decoded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
