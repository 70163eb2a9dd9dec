//! Hexadecimal codec: two uppercase characters per byte, most significant
//! byte first. Decoding accepts either case; an odd-length string is an
//! error, never a silent truncation.

use crate::error::{CodecError, Result};
use crate::vector::{BigEndianVector, HexText};

pub fn encode(v: &BigEndianVector) -> HexText {
    HexText::new(hex::encode_upper(v.as_bytes()))
}

pub fn decode(text: &str) -> Result<BigEndianVector> {
    hex::decode(text)
        .map(BigEndianVector::new)
        .map_err(|e| CodecError::Decode(format!("invalid hex text: {}", e)))
}
