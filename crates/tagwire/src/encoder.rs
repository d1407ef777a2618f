// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoder: typed values -> tagged big-endian bytes.

use crate::error::{Error, Result};
use crate::value::Value;

/// Generate payload emitters for multi-byte primitives.
///
/// Each generated method appends the big-endian byte representation to the
/// output buffer, most significant byte first, no padding.
macro_rules! impl_put_be {
    ($name:ident, $type:ty) => {
        fn $name(&mut self, value: $type) {
            self.buf.extend_from_slice(&value.to_be_bytes());
        }
    };
}

/// Stateful writer producing one growing byte buffer.
///
/// [`Encoder::write`] is the sole typed entry point: it appends the value's
/// one-byte kind tag followed by its fixed-layout payload. The buffer grows
/// monotonically and is never reset; [`Encoder::bytes`] exposes a snapshot of
/// everything accumulated so far.
///
/// # Example
///
/// ```rust
/// use tagwire::{Encoder, Value};
///
/// let mut enc = Encoder::new();
/// enc.write(&Value::Int(0x1234_5678))?;
/// assert_eq!(enc.bytes(), &[0x04, 0x12, 0x34, 0x56, 0x78]);
/// # Ok::<(), tagwire::Error>(())
/// ```
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    /// Create an encoder with an empty output buffer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append one tagged value.
    ///
    /// The value is validated in full before the first byte is appended, so a
    /// failed write leaves the buffer untouched -- there are no partial
    /// writes, including for values nested inside optionals.
    pub fn write(&mut self, value: &Value) -> Result<()> {
        if let Err(err) = validate(value) {
            log::debug!("[Encoder] rejecting {} value: {}", value.kind(), err);
            return Err(err);
        }
        self.emit(value);
        Ok(())
    }

    /// Snapshot of the bytes accumulated so far.
    ///
    /// Safe to call repeatedly and interleaved with further writes; each call
    /// reflects the current length and does not reset the buffer.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the encoder and take the output buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append one byte verbatim, no tag. All emitters are built on this.
    fn write_raw(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    impl_put_be!(put_i16, i16);
    impl_put_be!(put_i32, i32);
    impl_put_be!(put_i64, i64);
    impl_put_be!(put_u16, u16);
    impl_put_be!(put_u32, u32);
    impl_put_be!(put_u64, u64);

    /// Append tag + payload. Infallible: `value` has already been validated.
    fn emit(&mut self, value: &Value) {
        self.write_raw(value.kind().tag());
        match value {
            Value::Bool(b) => self.write_raw(if *b { 0xFF } else { 0x00 }),
            Value::Byte(b) => self.write_raw(*b as u8),
            Value::Short(v) => self.put_i16(*v),
            Value::Int(v) => self.put_i32(*v),
            Value::Long(v) => self.put_i64(*v),
            Value::Float(v) => self.put_u32(v.to_bits()),
            Value::Double(v) => self.put_u64(v.to_bits()),
            Value::Char(c) => self.put_u16(*c as u16),
            Value::String(s) => {
                self.put_i32(s.encode_utf16().count() as i32);
                for unit in s.encode_utf16() {
                    self.put_u16(unit);
                }
            }
            Value::Optional(None) => self.write_raw(0x00),
            Value::Optional(Some(inner)) => {
                self.write_raw(0xFF);
                self.emit(inner);
            }
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that every char fits the two-byte code unit layout and every string
/// length fits the four-byte length field, recursing through optionals.
fn validate(value: &Value) -> Result<()> {
    match value {
        Value::Char(ch) => {
            if *ch as u32 > 0xFFFF {
                return Err(Error::CharNotEncodable { ch: *ch });
            }
            Ok(())
        }
        Value::String(s) => {
            let units = s.encode_utf16().count();
            if units > i32::MAX as usize {
                return Err(Error::StringTooLong { units });
            }
            Ok(())
        }
        Value::Optional(Some(inner)) => validate(inner),
        _ => Ok(()),
    }
}
