use std::fmt;
use std::str::FromStr;

use super::error::CatalogError;
use crate::payload::layout;

/// Named entry of the device value catalogue.
///
/// Canonical names follow the upstream device catalogue (`"16bit_uint"`,
/// `"32bit_ulong"`, ...). `Str` carries its byte length and is written
/// `"string:<len>"`. The two reserved entries declare a width but no decode
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Uint8,
    Uint16,
    Uint32,
    Ulong32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Long32,
    Int64,
    Float32,
    Float64,
    Bits,
    Str { len: usize },
    DwordModiconCounter,
    BlockExtract,
}

impl ValueKind {
    /// Byte width consumed by this kind.
    pub fn width(self) -> usize {
        match self {
            ValueKind::Uint8 | ValueKind::Int8 => layout::WIDTH_8BIT,
            ValueKind::Uint16 | ValueKind::Int16 => layout::WIDTH_16BIT,
            ValueKind::Uint32
            | ValueKind::Ulong32
            | ValueKind::Int32
            | ValueKind::Long32
            | ValueKind::Float32 => layout::WIDTH_32BIT,
            ValueKind::Uint64 | ValueKind::Int64 | ValueKind::Float64 => layout::WIDTH_64BIT,
            ValueKind::Bits => layout::WIDTH_BITS,
            ValueKind::Str { len } => len,
            ValueKind::DwordModiconCounter => layout::WIDTH_DWORD_MODICON_COUNTER,
            ValueKind::BlockExtract => layout::WIDTH_BLOCK_EXTRACT,
        }
    }

    /// Reserved entries carry a width but dispatch to no decode operation.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            ValueKind::DwordModiconCounter | ValueKind::BlockExtract
        )
    }

    /// Parse a canonical catalogue name.
    pub fn from_name(name: &str) -> Result<Self, CatalogError> {
        if let Some(len) = name.strip_prefix("string:") {
            let len = len.parse::<usize>().map_err(|_| CatalogError::UnknownKind {
                name: name.to_string(),
            })?;
            return Ok(ValueKind::Str { len });
        }
        match name {
            "8bit_uint" => Ok(ValueKind::Uint8),
            "16bit_uint" => Ok(ValueKind::Uint16),
            "32bit_uint" => Ok(ValueKind::Uint32),
            "32bit_ulong" => Ok(ValueKind::Ulong32),
            "64bit_uint" => Ok(ValueKind::Uint64),
            "8bit_int" => Ok(ValueKind::Int8),
            "16bit_int" => Ok(ValueKind::Int16),
            "32bit_int" => Ok(ValueKind::Int32),
            "32bit_long" => Ok(ValueKind::Long32),
            "64bit_int" => Ok(ValueKind::Int64),
            "32bit_float" => Ok(ValueKind::Float32),
            "64bit_float" => Ok(ValueKind::Float64),
            "bits" => Ok(ValueKind::Bits),
            "dword_modicon_counter" => Ok(ValueKind::DwordModiconCounter),
            "block_extract" => Ok(ValueKind::BlockExtract),
            _ => Err(CatalogError::UnknownKind {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Uint8 => f.write_str("8bit_uint"),
            ValueKind::Uint16 => f.write_str("16bit_uint"),
            ValueKind::Uint32 => f.write_str("32bit_uint"),
            ValueKind::Ulong32 => f.write_str("32bit_ulong"),
            ValueKind::Uint64 => f.write_str("64bit_uint"),
            ValueKind::Int8 => f.write_str("8bit_int"),
            ValueKind::Int16 => f.write_str("16bit_int"),
            ValueKind::Int32 => f.write_str("32bit_int"),
            ValueKind::Long32 => f.write_str("32bit_long"),
            ValueKind::Int64 => f.write_str("64bit_int"),
            ValueKind::Float32 => f.write_str("32bit_float"),
            ValueKind::Float64 => f.write_str("64bit_float"),
            ValueKind::Bits => f.write_str("bits"),
            ValueKind::Str { len } => write!(f, "string:{len}"),
            ValueKind::DwordModiconCounter => f.write_str("dword_modicon_counter"),
            ValueKind::BlockExtract => f.write_str("block_extract"),
        }
    }
}

impl FromStr for ValueKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
