use serde::{Deserialize, Serialize};

use super::error::DecodeError;
use super::{bits, layout};

/// Byte order used to interpret every multi-byte value in a payload.
///
/// Selected once at construction and immutable for the decoder's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            ByteOrder::Big => "big",
            ByteOrder::Little => "little",
        }
    }
}

/// Sequential decoder over a raw field-bus payload.
///
/// Owns the byte buffer and a cursor; every decode call interprets the next
/// `width` bytes under the instance byte order and advances the cursor by
/// exactly that width. The cursor never moves backwards except through
/// [`reset`](PayloadDecoder::reset). A failed decode leaves the cursor
/// unchanged.
///
/// Not synchronized: callers serialize access to a given instance.
///
/// # Examples
/// ```
/// use regdecode_core::{ByteOrder, PayloadDecoder};
///
/// let mut decoder = PayloadDecoder::new(vec![0x01, 0x02, 0x03], ByteOrder::Big);
/// assert_eq!(decoder.decode_16bit_uint().unwrap(), 0x0102);
/// assert_eq!(decoder.decode_8bit_uint().unwrap(), 0x03);
/// ```
#[derive(Debug, Clone)]
pub struct PayloadDecoder {
    payload: Vec<u8>,
    cursor: usize,
    byte_order: ByteOrder,
}

impl PayloadDecoder {
    pub fn new(payload: Vec<u8>, byte_order: ByteOrder) -> Self {
        Self {
            payload,
            cursor: 0,
            byte_order,
        }
    }

    /// Build a decoder from 16-bit register words as returned by a register
    /// read. Each word is serialized to exactly two bytes under `byte_order`
    /// and the chunks are concatenated in sequence order.
    pub fn from_registers(registers: &[u16], byte_order: ByteOrder) -> Self {
        let mut payload = Vec::with_capacity(registers.len() * layout::WIDTH_16BIT);
        for &word in registers {
            let bytes = match byte_order {
                ByteOrder::Big => word.to_be_bytes(),
                ByteOrder::Little => word.to_le_bytes(),
            };
            payload.extend_from_slice(&bytes);
        }
        Self::new(payload, byte_order)
    }

    /// Build a decoder from coil states as returned by a coil read, packed
    /// eight per byte through [`bits::pack_bits`].
    pub fn from_coils(coils: &[bool], byte_order: ByteOrder) -> Self {
        Self::new(bits::pack_bits(coils), byte_order)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Total payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Bytes left between the cursor and the end of the payload.
    pub fn remaining(&self) -> usize {
        self.payload.len() - self.cursor
    }

    /// Move the cursor back to the start of the payload. Idempotent.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let remaining = self.remaining();
        let window = self
            .payload
            .get(self.cursor..self.cursor + N)
            .ok_or(DecodeError::BufferUnderrun {
                needed: N,
                remaining,
            })?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(window);
        self.cursor += N;
        Ok(bytes)
    }

    /// Decode an unsigned 8-bit integer.
    pub fn decode_8bit_uint(&mut self) -> Result<u8, DecodeError> {
        let [byte] = self.take::<{ layout::WIDTH_8BIT }>()?;
        Ok(byte)
    }

    /// Decode an unsigned 16-bit integer.
    pub fn decode_16bit_uint(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_16BIT }>()?;
        Ok(match self.byte_order {
            ByteOrder::Big => u16::from_be_bytes(bytes),
            ByteOrder::Little => u16::from_le_bytes(bytes),
        })
    }

    /// Decode an unsigned 32-bit integer.
    pub fn decode_32bit_uint(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_32BIT }>()?;
        Ok(match self.byte_order {
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        })
    }

    /// Alias of [`decode_32bit_uint`](PayloadDecoder::decode_32bit_uint) kept
    /// for device-catalogue vocabulary; the bit layout is identical.
    pub fn decode_32bit_ulong(&mut self) -> Result<u32, DecodeError> {
        self.decode_32bit_uint()
    }

    /// Decode an unsigned 64-bit integer.
    pub fn decode_64bit_uint(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_64BIT }>()?;
        Ok(match self.byte_order {
            ByteOrder::Big => u64::from_be_bytes(bytes),
            ByteOrder::Little => u64::from_le_bytes(bytes),
        })
    }

    /// Decode a signed 8-bit integer (two's complement).
    pub fn decode_8bit_int(&mut self) -> Result<i8, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_8BIT }>()?;
        Ok(i8::from_be_bytes(bytes))
    }

    /// Decode a signed 16-bit integer (two's complement).
    pub fn decode_16bit_int(&mut self) -> Result<i16, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_16BIT }>()?;
        Ok(match self.byte_order {
            ByteOrder::Big => i16::from_be_bytes(bytes),
            ByteOrder::Little => i16::from_le_bytes(bytes),
        })
    }

    /// Decode a signed 32-bit integer (two's complement).
    pub fn decode_32bit_int(&mut self) -> Result<i32, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_32BIT }>()?;
        Ok(match self.byte_order {
            ByteOrder::Big => i32::from_be_bytes(bytes),
            ByteOrder::Little => i32::from_le_bytes(bytes),
        })
    }

    /// Alias of [`decode_32bit_int`](PayloadDecoder::decode_32bit_int) kept
    /// for device-catalogue vocabulary; the bit layout is identical.
    pub fn decode_32bit_long(&mut self) -> Result<i32, DecodeError> {
        self.decode_32bit_int()
    }

    /// Decode a signed 64-bit integer (two's complement).
    pub fn decode_64bit_int(&mut self) -> Result<i64, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_64BIT }>()?;
        Ok(match self.byte_order {
            ByteOrder::Big => i64::from_be_bytes(bytes),
            ByteOrder::Little => i64::from_le_bytes(bytes),
        })
    }

    /// Decode an IEEE-754 single-precision float.
    pub fn decode_32bit_float(&mut self) -> Result<f32, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_32BIT }>()?;
        Ok(match self.byte_order {
            ByteOrder::Big => f32::from_be_bytes(bytes),
            ByteOrder::Little => f32::from_le_bytes(bytes),
        })
    }

    /// Decode an IEEE-754 double-precision float.
    pub fn decode_64bit_float(&mut self) -> Result<f64, DecodeError> {
        let bytes = self.take::<{ layout::WIDTH_64BIT }>()?;
        Ok(match self.byte_order {
            ByteOrder::Big => f64::from_be_bytes(bytes),
            ByteOrder::Little => f64::from_le_bytes(bytes),
        })
    }

    /// Decode one byte into eight flags via [`bits::unpack_byte`],
    /// least significant bit first.
    pub fn decode_bits(&mut self) -> Result<[bool; 8], DecodeError> {
        let [byte] = self.take::<{ layout::WIDTH_BITS }>()?;
        Ok(bits::unpack_byte(byte))
    }

    /// Read `size` raw bytes with no character-encoding interpretation and
    /// advance the cursor by `size`.
    pub fn decode_string(&mut self, size: usize) -> Result<&[u8], DecodeError> {
        let remaining = self.remaining();
        let end = self
            .cursor
            .checked_add(size)
            .ok_or(DecodeError::BufferUnderrun {
                needed: size,
                remaining,
            })?;
        let window = self
            .payload
            .get(self.cursor..end)
            .ok_or(DecodeError::BufferUnderrun {
                needed: size,
                remaining,
            })?;
        self.cursor = end;
        Ok(window)
    }
}
