//! regdecode core library for field-bus payload decoding.
//!
//! This crate implements the decode pipeline used by the CLI: input specs
//! feed a sequential payload decoder, which drives the value catalogue
//! (kind/decode/value) and aggregates results into a deterministic report.
//! Decoding is byte-oriented and side-effect free; all I/O is isolated in
//! `source` modules. Buffer conventions are captured in the decoder so the
//! catalogue dispatch stays minimal.
//!
//! Invariants:
//! - The cursor only moves forward, by exactly the width of each decoded
//!   value; a failed read leaves it unchanged.
//! - Report outputs are deterministic and stable across runs; timestamps are
//!   a CLI concern.
//! - Reserved catalogue entries resolve to a width but never decode.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de décodage : specs d'entrée -> décodeur
//! séquentiel -> catalogue de types -> rapport déterministe. Les E/S restent
//! dans `source`, les conventions de tampon dans le décodeur. Garanties :
//! curseur strictement croissant, rapport stable, entrées réservées sans
//! logique de décodage.
//!
//! # Examples
//! ```
//! use regdecode_core::{ByteOrder, PayloadDecoder};
//!
//! let mut decoder = PayloadDecoder::from_registers(&[0x0102, 0x0304], ByteOrder::Big);
//! assert_eq!(decoder.decode_16bit_uint()?, 0x0102);
//! assert_eq!(decoder.decode_16bit_uint()?, 0x0304);
//! # Ok::<(), regdecode_core::DecodeError>(())
//! ```

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

mod catalog;
mod payload;
mod source;

pub use catalog::{CatalogError, Value, ValueKind, decode_layout, decode_value};
pub use payload::bits::{pack_bits, unpack_bits, unpack_byte};
pub use payload::{ByteOrder, DecodeError, PayloadDecoder};
pub use source::{InputSpec, PayloadInput, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used until a caller stamps the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoded-payload report with deterministic field ordering.
///
/// # Examples
/// ```
/// use regdecode_core::{ByteOrder, make_stub_report};
///
/// let report = make_stub_report("registers", 4, ByteOrder::Big);
/// assert_eq!(report.report_version, regdecode_core::REPORT_VERSION);
/// assert!(report.fields.is_empty());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,

    /// Input payload metadata.
    pub input: InputInfo,

    /// Byte order applied to every multi-byte field.
    pub byte_order: String,
    /// Decoded fields in layout order.
    pub fields: Vec<FieldSummary>,
    /// Bytes left undecoded between the last field and the payload end.
    pub trailing_bytes: u64,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "regdecode").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input payload metadata embedded in reports.
///
/// # Examples
/// ```
/// use regdecode_core::InputInfo;
///
/// let input = InputInfo {
///     source: "registers".to_string(),
///     bytes: 4,
/// };
/// assert_eq!(input.bytes, 4);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    /// Payload source label ("hex", "registers" or "coils").
    pub source: String,
    /// Payload size in bytes.
    pub bytes: u64,
}

/// Single decoded field record.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSummary {
    /// Zero-based position in the layout.
    pub index: usize,
    /// Canonical catalogue name of the field kind.
    pub kind: String,
    /// Byte width consumed by the field.
    pub width: usize,
    /// Decoded value.
    pub value: Value,
}

/// Errors returned by the report pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Build a stub report with base fields filled and no decoded fields.
///
/// # Examples
/// ```
/// use regdecode_core::{ByteOrder, make_stub_report};
///
/// let report = make_stub_report("hex", 16, ByteOrder::Little);
/// assert_eq!(report.byte_order, "little");
/// assert_eq!(report.trailing_bytes, 0);
/// ```
pub fn make_stub_report(source: &str, input_bytes: u64, byte_order: ByteOrder) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "regdecode".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            source: source.to_string(),
            bytes: input_bytes,
        },
        byte_order: byte_order.as_str().to_string(),
        fields: vec![],
        trailing_bytes: 0,
    }
}

/// Decode an input spec into a report.
///
/// The layout is run left to right over the payload; bytes left after the
/// last field are counted in `trailing_bytes`, never decoded silently.
///
/// # Examples
/// ```
/// use regdecode_core::{InputSpec, decode_report};
///
/// let spec = InputSpec::from_json(
///     r#"{"byte_order": "big", "payload": {"registers": [258]}, "layout": ["16bit_uint"]}"#,
/// )?;
/// let report = decode_report(&spec)?;
/// assert_eq!(report.fields.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode_report(spec: &InputSpec) -> Result<Report, ReportError> {
    let mut decoder = spec.decoder()?;
    let kinds = spec
        .layout
        .iter()
        .map(|name| ValueKind::from_name(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = make_stub_report(
        spec.payload.source_name(),
        decoder.len() as u64,
        decoder.byte_order(),
    );
    let mut fields = Vec::with_capacity(kinds.len());
    for (index, &kind) in kinds.iter().enumerate() {
        let value = decode_value(&mut decoder, kind)?;
        fields.push(FieldSummary {
            index,
            kind: kind.to_string(),
            width: kind.width(),
            value,
        });
    }
    report.fields = fields;
    report.trailing_bytes = decoder.remaining() as u64;
    Ok(report)
}

/// Load an input spec file and decode it into a report.
pub fn decode_report_file(path: &Path) -> Result<Report, ReportError> {
    let spec = InputSpec::load(path)?;
    decode_report(&spec)
}
