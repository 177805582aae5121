//! Core identifier types for the replay layer
//!
//! - `CommandKey`: lookup key derived from a command name and its arguments
//! - `Shape`: the expected decoded type category for a stored blob
//! - `TypeTag`: the closed set of element type names carried by tagged sequences

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lookup key for a recorded command result.
///
/// Built deterministically from the command name and its argument list.
/// The byte form length-prefixes every part, so two different argument
/// lists never produce the same key:
///
/// ```text
/// [part count: u32 LE] then, for each part, [len: u32 LE][bytes]
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommandKey {
    bytes: Vec<u8>,
    /// Printable form, used for logs and error messages only
    display: String,
}

impl CommandKey {
    /// Build a key from a command name and its arguments.
    ///
    /// # Panics
    ///
    /// Panics if a part is longer than `u32::MAX` bytes or there are more
    /// than `u32::MAX` parts.
    pub fn new<I, A>(name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        let mut parts: Vec<Vec<u8>> = vec![name.as_bytes().to_vec()];
        parts.extend(args.into_iter().map(|a| a.as_ref().to_vec()));
        Self::from_parts(parts)
    }

    /// Build a key from a full argument list whose first element is the
    /// command name (the shape a client exposes for an issued command).
    ///
    /// # Panics
    ///
    /// Same conditions as [`CommandKey::new`].
    pub fn from_args<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        Self::from_parts(args.into_iter().map(|a| a.as_ref().to_vec()).collect())
    }

    fn from_parts(parts: Vec<Vec<u8>>) -> Self {
        let mut bytes = Vec::with_capacity(4 + parts.iter().map(|p| p.len() + 4).sum::<usize>());
        bytes.extend_from_slice(&len_prefix(parts.len()));
        for part in &parts {
            bytes.extend_from_slice(&len_prefix(part.len()));
            bytes.extend_from_slice(part);
        }

        let display = parts
            .iter()
            .map(|p| String::from_utf8_lossy(p).into_owned())
            .collect::<Vec<_>>()
            .join(" ");

        CommandKey { bytes, display }
    }

    /// Raw key bytes as handed to the store.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Little-endian `u32` length prefix for a key part.
///
/// A command line cannot carry 4 GiB in one argument or 2^32 arguments, so
/// a length past `u32::MAX` means the caller built the key by mistake.
fn len_prefix(len: usize) -> [u8; 4] {
    match u32::try_from(len) {
        Ok(n) => n.to_le_bytes(),
        Err(_) => panic!("command key part length {len} exceeds u32::MAX"),
    }
}

impl fmt::Debug for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandKey({:?})", self.display)
    }
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Expected decoded type category of a stored blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Fixed-width little-endian primitive, no header
    Scalar,
    /// Raw bytes as text, no header
    String,
    /// `[count][len][bytes]...`
    StringSequence,
    /// `[count][keylen][key][vallen][val]...`
    StringMap,
    /// `[count][taglen][tag][len][bytes]...`
    TaggedSequence,
}

impl Shape {
    /// Lowercase name, as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Scalar => "scalar",
            Shape::String => "string",
            Shape::StringSequence => "string_sequence",
            Shape::StringMap => "string_map",
            Shape::TaggedSequence => "tagged_sequence",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element type carried by a tagged sequence.
///
/// The set is closed and must match the producer that recorded the blob.
/// Names are matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeTag {
    /// "string"
    String,
    /// "int" (64-bit on the wire)
    Int,
    /// "int8"
    Int8,
    /// "int16"
    Int16,
    /// "int32"
    Int32,
    /// "int64"
    Int64,
    /// "uint" (64-bit on the wire)
    Uint,
    /// "uint8"
    Uint8,
    /// "uint16"
    Uint16,
    /// "uint32"
    Uint32,
    /// "uint64"
    Uint64,
    /// "float32"
    Float32,
    /// "float64"
    Float64,
    /// "complex64": two float32
    Complex64,
    /// "complex128": two float64
    Complex128,
    /// "uintptr" (64-bit on the wire)
    Uintptr,
    /// "bool": one byte
    Bool,
}

impl TypeTag {
    /// Every supported tag, in wire-name order.
    pub const ALL: [TypeTag; 17] = [
        TypeTag::String,
        TypeTag::Int,
        TypeTag::Int8,
        TypeTag::Int16,
        TypeTag::Int32,
        TypeTag::Int64,
        TypeTag::Uint,
        TypeTag::Uint8,
        TypeTag::Uint16,
        TypeTag::Uint32,
        TypeTag::Uint64,
        TypeTag::Float32,
        TypeTag::Float64,
        TypeTag::Complex64,
        TypeTag::Complex128,
        TypeTag::Uintptr,
        TypeTag::Bool,
    ];

    /// Wire name of this tag.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Int => "int",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::Uint => "uint",
            TypeTag::Uint8 => "uint8",
            TypeTag::Uint16 => "uint16",
            TypeTag::Uint32 => "uint32",
            TypeTag::Uint64 => "uint64",
            TypeTag::Float32 => "float32",
            TypeTag::Float64 => "float64",
            TypeTag::Complex64 => "complex64",
            TypeTag::Complex128 => "complex128",
            TypeTag::Uintptr => "uintptr",
            TypeTag::Bool => "bool",
        }
    }

    /// Look up a tag by its raw wire bytes.
    pub fn from_bytes(name: &[u8]) -> Option<TypeTag> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().as_bytes() == name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = crate::error::ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::from_bytes(s.as_bytes())
            .ok_or_else(|| crate::error::ReplayError::UnsupportedType(s.to_string()))
    }
}
