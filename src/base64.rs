//! RFC 4648 Base64 codec (standard alphabet, `=` padding).
//!
//! Each 3-byte group maps to 4 characters; a 1-byte tail pads with `==`, a
//! 2-byte tail with `=`. Decoding is table-driven, so a character outside
//! the alphabet is an error rather than silently reading as 'A'.

use crate::error::{CodecError, Result};
use crate::vector::{Base64Text, BigEndianVector};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub fn encode(v: &BigEndianVector) -> Base64Text {
    Base64Text::new(STANDARD.encode(v.as_bytes()))
}

pub fn decode(text: &str) -> Result<BigEndianVector> {
    STANDARD
        .decode(text)
        .map(BigEndianVector::new)
        .map_err(|e| CodecError::Decode(format!("invalid base64 text: {}", e)))
}
