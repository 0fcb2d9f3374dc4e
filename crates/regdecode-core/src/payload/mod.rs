//! Sequential payload decoding.
//!
//! The decoder owns an immutable byte buffer and a single forward-moving
//! cursor. Each operation interprets a fixed-width window under the instance
//! byte order and advances the cursor by exactly that width; bounds are
//! checked before any interpretation, and a failed read leaves the cursor
//! where it was. Byte widths live in `layout`, bit-packing conventions in
//! `bits`, and errors in `error`.
//!
//! Version française (résumé):
//! Le décodeur possède un tampon d'octets et un curseur strictement
//! croissant. Chaque lecture est bornée avant interprétation; les largeurs
//! sont dans `layout`, le bit-packing dans `bits`.

pub mod bits;
pub mod decoder;
pub mod error;
pub mod layout;

pub use decoder::{ByteOrder, PayloadDecoder};
pub use error::DecodeError;
