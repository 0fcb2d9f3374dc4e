use thiserror::Error;

/// Errors returned by payload decoding.
///
/// # Examples
/// ```
/// use regdecode_core::DecodeError;
///
/// let err = DecodeError::BufferUnderrun { needed: 4, remaining: 2 };
/// assert!(err.to_string().contains("payload too short"));
/// ```
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload too short: need {needed} more bytes, {remaining} remaining")]
    BufferUnderrun { needed: usize, remaining: usize },
}
