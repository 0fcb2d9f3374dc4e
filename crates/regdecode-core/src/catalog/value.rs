use serde::{Serialize, Serializer};

/// Typed result of a single decode operation.
///
/// Serializes untagged: integers and floats as JSON numbers, flags as an
/// array of booleans, raw bytes as a lowercase hex string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Bits([bool; 8]),
    Bytes(#[serde(serialize_with = "bytes_as_hex")] Vec<u8>),
}

fn bytes_as_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
