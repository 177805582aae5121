//! Fixed-width little-endian scalars.
//!
//! A scalar blob has no header: its length is the width of the type.

use byteorder::{ByteOrder, LittleEndian};
use cmdreplay_core::{Complex128, Complex64, ReplayError, ReplayResult};

/// Primitive with a fixed little-endian wire width.
pub trait Scalar: Sized + Copy + Default + 'static {
    /// Wire width in bytes
    const WIDTH: usize;

    /// Name used in error messages
    const TYPE_NAME: &'static str;

    /// Decode from exactly `WIDTH` bytes. Callers check the length.
    fn read_le(bytes: &[u8]) -> Self;

    /// Append the `WIDTH`-byte encoding to `out`
    fn write_le(&self, out: &mut Vec<u8>);
}

/// Decode a whole blob as one scalar.
///
/// Fails with `MalformedScalar` unless the blob is exactly `T::WIDTH` long.
pub fn decode_scalar<T: Scalar>(bytes: &[u8]) -> ReplayResult<T> {
    if bytes.len() != T::WIDTH {
        return Err(ReplayError::MalformedScalar {
            type_name: T::TYPE_NAME,
            expected: T::WIDTH,
            actual: bytes.len(),
        });
    }
    Ok(T::read_le(bytes))
}

macro_rules! impl_scalar {
    ($ty:ty, $width:expr, $read:ident, $write:ident) => {
        impl Scalar for $ty {
            const WIDTH: usize = $width;
            const TYPE_NAME: &'static str = stringify!($ty);

            fn read_le(bytes: &[u8]) -> Self {
                LittleEndian::$read(bytes)
            }

            fn write_le(&self, out: &mut Vec<u8>) {
                let mut buf = [0u8; $width];
                LittleEndian::$write(&mut buf, *self);
                out.extend_from_slice(&buf);
            }
        }
    };
}

impl_scalar!(i16, 2, read_i16, write_i16);
impl_scalar!(i32, 4, read_i32, write_i32);
impl_scalar!(i64, 8, read_i64, write_i64);
impl_scalar!(u16, 2, read_u16, write_u16);
impl_scalar!(u32, 4, read_u32, write_u32);
impl_scalar!(u64, 8, read_u64, write_u64);
impl_scalar!(f32, 4, read_f32, write_f32);
impl_scalar!(f64, 8, read_f64, write_f64);

impl Scalar for i8 {
    const WIDTH: usize = 1;
    const TYPE_NAME: &'static str = "i8";

    fn read_le(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    fn write_le(&self, out: &mut Vec<u8>) {
        out.push(*self as u8);
    }
}

impl Scalar for u8 {
    const WIDTH: usize = 1;
    const TYPE_NAME: &'static str = "u8";

    fn read_le(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn write_le(&self, out: &mut Vec<u8>) {
        out.push(*self);
    }
}

// Any non-zero byte reads as true
impl Scalar for bool {
    const WIDTH: usize = 1;
    const TYPE_NAME: &'static str = "bool";

    fn read_le(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }

    fn write_le(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }
}

impl Scalar for Complex64 {
    const WIDTH: usize = 8;
    const TYPE_NAME: &'static str = "complex64";

    fn read_le(bytes: &[u8]) -> Self {
        Complex64::new(LittleEndian::read_f32(&bytes[..4]), LittleEndian::read_f32(&bytes[4..]))
    }

    fn write_le(&self, out: &mut Vec<u8>) {
        self.re.write_le(out);
        self.im.write_le(out);
    }
}

impl Scalar for Complex128 {
    const WIDTH: usize = 16;
    const TYPE_NAME: &'static str = "complex128";

    fn read_le(bytes: &[u8]) -> Self {
        Complex128::new(LittleEndian::read_f64(&bytes[..8]), LittleEndian::read_f64(&bytes[8..]))
    }

    fn write_le(&self, out: &mut Vec<u8>) {
        self.re.write_le(out);
        self.im.write_le(out);
    }
}
