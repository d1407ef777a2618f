// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decoder: tagged big-endian bytes -> typed values.

use crate::error::{Error, Result};
use crate::registry::Kind;
use crate::value::Value;

/// Generate unsigned accumulators for multi-byte payloads.
///
/// Each generated method rebuilds the value by left-shifting the accumulator
/// one byte at a time and OR-ing in the newly read byte, most significant
/// byte first. Accumulation stays in an unsigned widening path; callers
/// reinterpret the bits (`as` cast, `from_bits`) so sign extension can never
/// corrupt negative numbers or float bit patterns.
macro_rules! impl_read_acc {
    ($name:ident, $uint:ty, $size:expr) => {
        fn $name(&mut self) -> Result<$uint> {
            let mut acc: $uint = 0;
            for _ in 0..$size {
                acc = (acc << 8) | <$uint>::from(self.read_raw()?);
            }
            Ok(acc)
        }
    };
}

/// Stateful cursor consuming a fixed byte sequence it never mutates.
///
/// The read position only moves forward, by exactly the number of bytes each
/// read consumes; once the end of the buffer is reached every further read
/// fails with [`Error::StreamExhausted`]. There is no rewinding and no
/// peeking without consuming.
///
/// # Example
///
/// ```rust
/// use tagwire::{Decoder, Value};
///
/// let mut dec = Decoder::new(&[0x04, 0x12, 0x34, 0x56, 0x78])?;
/// assert_eq!(dec.read()?, Value::Int(0x1234_5678));
/// assert!(dec.is_eof());
/// # Ok::<(), tagwire::Error>(())
/// ```
pub struct Decoder<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over a caller-supplied byte sequence.
    ///
    /// Fails with [`Error::EmptyInput`] on a zero-length buffer.
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        if buf.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self { buf, offset: 0 })
    }

    /// Consume and return the next byte. All other readers are built on this.
    pub fn read_raw(&mut self) -> Result<u8> {
        if self.offset >= self.buf.len() {
            return Err(Error::StreamExhausted {
                offset: self.offset,
            });
        }
        let byte = self.buf[self.offset];
        self.offset += 1;
        Ok(byte)
    }

    /// Read one tagged value.
    ///
    /// Reads the tag byte, resolves it through the registry, and dispatches
    /// to the payload reader for that kind, recursing for present optionals.
    pub fn read(&mut self) -> Result<Value> {
        let tag = self.read_raw()?;
        let kind = match Kind::from_tag(tag) {
            Ok(kind) => kind,
            Err(err) => {
                log::debug!(
                    "[Decoder] unknown tag {:#04x} at offset {}",
                    tag,
                    self.offset - 1
                );
                return Err(err);
            }
        };
        match kind {
            Kind::Byte => Ok(Value::Byte(self.read_i8()?)),
            Kind::Boolean => Ok(Value::Bool(self.read_bool()?)),
            Kind::Short => Ok(Value::Short(self.read_i16()?)),
            Kind::Integer => Ok(Value::Int(self.read_i32()?)),
            Kind::Long => Ok(Value::Long(self.read_i64()?)),
            Kind::Float => Ok(Value::Float(self.read_f32()?)),
            Kind::Double => Ok(Value::Double(self.read_f64()?)),
            Kind::Character => Ok(Value::Char(self.read_char()?)),
            Kind::String => Ok(Value::String(self.read_string()?)),
            Kind::Optional => Ok(Value::Optional(self.read_optional()?)),
            Kind::List | Kind::Set | Kind::Map | Kind::Array => {
                log::debug!("[Decoder] kind {} is reserved, no codec", kind);
                Err(Error::UnsupportedKind { kind })
            }
        }
    }

    /// Read one boolean payload byte.
    ///
    /// Only the two sentinels are legal: 0x00 (false) and 0xFF (true).
    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_raw()? {
            0x00 => Ok(false),
            0xFF => Ok(true),
            byte => Err(Error::InvalidBoolean { byte }),
        }
    }

    /// Read one byte payload, reinterpreted as signed.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_raw()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_acc_u16()? as i16)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_acc_u32()? as i32)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_acc_u64()? as i64)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_acc_u32()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_acc_u64()?))
    }

    /// Read one two-byte code unit as a character.
    ///
    /// Surrogate halves are not scalar values and fail with
    /// [`Error::InvalidChar`]; the encoder never produces them.
    pub fn read_char(&mut self) -> Result<char> {
        let unit = self.read_acc_u16()?;
        char::from_u32(u32::from(unit)).ok_or(Error::InvalidChar { unit })
    }

    /// Current read position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buf.len()
    }

    impl_read_acc!(read_acc_u16, u16, 2);
    impl_read_acc!(read_acc_u32, u32, 4);
    impl_read_acc!(read_acc_u64, u64, 8);

    /// String payload: four-byte code unit count, then that many units.
    fn read_string(&mut self) -> Result<String> {
        let length = self.read_i32()?;
        if length < 0 {
            return Err(Error::InvalidLength { length });
        }
        // Pre-allocation is capped by what the buffer can still hold; a
        // corrupt count fails with StreamExhausted instead of a huge alloc.
        let mut units = Vec::with_capacity((length as usize).min(self.remaining() / 2));
        for _ in 0..length {
            units.push(self.read_acc_u16()?);
        }
        String::from_utf16(&units).map_err(|_| Error::InvalidString)
    }

    /// Optional payload: presence byte, then a full tagged value if present.
    fn read_optional(&mut self) -> Result<Option<Box<Value>>> {
        match self.read_raw()? {
            0x00 => Ok(None),
            0xFF => Ok(Some(Box::new(self.read()?))),
            byte => Err(Error::InvalidOptional { byte }),
        }
    }
}
