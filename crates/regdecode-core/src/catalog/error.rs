use thiserror::Error;

use super::kind::ValueKind;
use crate::payload::DecodeError;

/// Errors returned by catalogue lookup and layout-driven decoding.
///
/// # Examples
/// ```
/// use regdecode_core::CatalogError;
///
/// let err = CatalogError::UnknownKind { name: "48bit_uint".to_string() };
/// assert!(err.to_string().contains("unknown value kind"));
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown value kind: {name}")]
    UnknownKind { name: String },
    #[error("reserved value kind has no decoder: {kind}")]
    Reserved { kind: ValueKind },
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
