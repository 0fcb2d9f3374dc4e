//! Input specs for payload decoding.
//!
//! This module turns a JSON *input spec* into the raw material for a
//! decoder: a payload (hex bytes, register words, or coil states), a byte
//! order, and a field layout. File I/O and input validation stay here so the
//! decode core never touches a file or an untyped value.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::payload::{ByteOrder, PayloadDecoder};

/// Raw payload material of an input spec.
///
/// Externally tagged in JSON: `{"hex": "0102"}`, `{"registers": [258]}` or
/// `{"coils": [true, false]}`. A scalar where an array is required is
/// rejected at parse time, before any decoder is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadInput {
    /// Hex-encoded byte buffer; ASCII whitespace is ignored.
    Hex(String),
    /// 16-bit register words from a register read.
    Registers(Vec<u16>),
    /// Coil states from a coil read.
    Coils(Vec<bool>),
}

impl PayloadInput {
    /// Stable source label used in report metadata.
    pub fn source_name(&self) -> &'static str {
        match self {
            PayloadInput::Hex(_) => "hex",
            PayloadInput::Registers(_) => "registers",
            PayloadInput::Coils(_) => "coils",
        }
    }
}

/// A decode request: payload material, byte order and field layout.
///
/// ```json
/// {
///   "byte_order": "big",
///   "payload": { "registers": [258, 772] },
///   "layout": ["16bit_uint", "16bit_uint"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct InputSpec {
    pub byte_order: ByteOrder,
    pub payload: PayloadInput,
    pub layout: Vec<String>,
}

/// Errors returned while loading or materializing an input spec.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input spec parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl InputSpec {
    /// Parse a spec from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a spec from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the decoder described by this spec.
    pub fn decoder(&self) -> Result<PayloadDecoder, SourceError> {
        match &self.payload {
            PayloadInput::Hex(text) => {
                let compact: String =
                    text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
                Ok(PayloadDecoder::new(hex::decode(compact)?, self.byte_order))
            }
            PayloadInput::Registers(words) => {
                Ok(PayloadDecoder::from_registers(words, self.byte_order))
            }
            PayloadInput::Coils(coils) => Ok(PayloadDecoder::from_coils(coils, self.byte_order)),
        }
    }
}
