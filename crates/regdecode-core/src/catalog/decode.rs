use super::error::CatalogError;
use super::kind::ValueKind;
use super::value::Value;
use crate::payload::PayloadDecoder;

/// Decode one catalogue-typed field at the decoder's cursor.
///
/// Reserved catalogue entries fail with [`CatalogError::Reserved`]; they are
/// carried for width lookup only.
pub fn decode_value(decoder: &mut PayloadDecoder, kind: ValueKind) -> Result<Value, CatalogError> {
    match kind {
        ValueKind::Uint8 => Ok(Value::Uint8(decoder.decode_8bit_uint()?)),
        ValueKind::Uint16 => Ok(Value::Uint16(decoder.decode_16bit_uint()?)),
        ValueKind::Uint32 => Ok(Value::Uint32(decoder.decode_32bit_uint()?)),
        ValueKind::Ulong32 => Ok(Value::Uint32(decoder.decode_32bit_ulong()?)),
        ValueKind::Uint64 => Ok(Value::Uint64(decoder.decode_64bit_uint()?)),
        ValueKind::Int8 => Ok(Value::Int8(decoder.decode_8bit_int()?)),
        ValueKind::Int16 => Ok(Value::Int16(decoder.decode_16bit_int()?)),
        ValueKind::Int32 => Ok(Value::Int32(decoder.decode_32bit_int()?)),
        ValueKind::Long32 => Ok(Value::Int32(decoder.decode_32bit_long()?)),
        ValueKind::Int64 => Ok(Value::Int64(decoder.decode_64bit_int()?)),
        ValueKind::Float32 => Ok(Value::Float32(decoder.decode_32bit_float()?)),
        ValueKind::Float64 => Ok(Value::Float64(decoder.decode_64bit_float()?)),
        ValueKind::Bits => Ok(Value::Bits(decoder.decode_bits()?)),
        ValueKind::Str { len } => Ok(Value::Bytes(decoder.decode_string(len)?.to_vec())),
        ValueKind::DwordModiconCounter | ValueKind::BlockExtract => {
            Err(CatalogError::Reserved { kind })
        }
    }
}

/// Run a field layout left to right over the decoder.
pub fn decode_layout(
    decoder: &mut PayloadDecoder,
    kinds: &[ValueKind],
) -> Result<Vec<Value>, CatalogError> {
    kinds.iter().map(|&kind| decode_value(decoder, kind)).collect()
}
