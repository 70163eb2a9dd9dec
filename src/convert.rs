//! Conversion engine dispatching between vector, integer and text
//! representations.
//!
//! Every ordered pair of representations has a conversion path. Pairs
//! without a direct rule route through [`LittleEndianVector`] as the
//! canonical intermediate, which is the single default arm of each match
//! below; text never converts to text without transiting a vector form.
//! Identity conversions simply hand the value back.

use crate::error::Result;
use crate::vector::{
    Base58Text, Base64Text, BigEndianVector, HexText, Integer, LittleEndianVector, ToVector,
};
use crate::{base58, base64, hex};
use std::cmp::Ordering;

/// A value in any of the supported representations.
///
/// Raw byte sequences enter through the `From` impls (interpreted
/// big-endian, the form external cryptographic types canonically use);
/// keys, signatures and curve points enter through [`Value::from_projectable`].
#[derive(Debug, Clone)]
pub enum Value {
    LittleEndian(LittleEndianVector),
    BigEndian(BigEndianVector),
    Integer(Integer),
    Base58(Base58Text),
    Base64(Base64Text),
    Hex(HexText),
}

impl Value {
    /// Wrap any [`ToVector`] value (public key, signature, curve point,
    /// digest) as its canonical big-endian projection.
    pub fn from_projectable<T: ToVector + ?Sized>(source: &T) -> Value {
        Value::BigEndian(source.to_vector())
    }

    pub fn to_little_endian(&self) -> Result<LittleEndianVector> {
        match self {
            Value::LittleEndian(v) => Ok(v.clone()),
            Value::BigEndian(v) => Ok(v.to_little_endian()),
            Value::Integer(n) => Ok(LittleEndianVector::from_integer(n)),
            Value::Base58(t) => base58::decode(t.as_str()),
            Value::Base64(t) => Ok(base64::decode(t.as_str())?.to_little_endian()),
            Value::Hex(t) => Ok(hex::decode(t.as_str())?.to_little_endian()),
        }
    }

    pub fn to_big_endian(&self) -> Result<BigEndianVector> {
        match self {
            Value::BigEndian(v) => Ok(v.clone()),
            Value::Base64(t) => base64::decode(t.as_str()),
            Value::Hex(t) => hex::decode(t.as_str()),
            other => Ok(other.to_little_endian()?.to_big_endian()),
        }
    }

    pub fn to_integer(&self) -> Result<Integer> {
        match self {
            Value::Integer(n) => Ok(n.clone()),
            Value::BigEndian(v) => Ok(v.to_integer()),
            other => Ok(other.to_little_endian()?.to_integer()),
        }
    }

    pub fn to_base58(&self) -> Result<Base58Text> {
        match self {
            Value::Base58(t) => Ok(t.clone()),
            other => Ok(base58::encode(&other.to_little_endian()?)),
        }
    }

    pub fn to_base64(&self) -> Result<Base64Text> {
        match self {
            Value::Base64(t) => Ok(t.clone()),
            other => Ok(base64::encode(&other.to_big_endian()?)),
        }
    }

    pub fn to_hex(&self) -> Result<HexText> {
        match self {
            Value::Hex(t) => Ok(t.clone()),
            other => Ok(hex::encode(&other.to_big_endian()?)),
        }
    }

    /// Little-endian projection normalized to exactly `width` bytes.
    pub fn to_fixed_little_endian(&self, width: usize) -> Result<LittleEndianVector> {
        Ok(self.to_little_endian()?.to_fixed(width))
    }

    /// Big-endian projection normalized to exactly `width` bytes.
    pub fn to_fixed_big_endian(&self, width: usize) -> Result<BigEndianVector> {
        Ok(self.to_big_endian()?.to_fixed(width))
    }
}

// Two values are equal iff both resolve to the same integer; a value whose
// text fails to decode is equal (and ordered relative) to nothing, which is
// why only the partial comparison traits exist here.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_integer(), other.to_integer()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.to_integer(), other.to_integer()) {
            (Ok(a), Ok(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

impl From<LittleEndianVector> for Value {
    fn from(v: LittleEndianVector) -> Self {
        Value::LittleEndian(v)
    }
}

impl From<BigEndianVector> for Value {
    fn from(v: BigEndianVector) -> Self {
        Value::BigEndian(v)
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Value::Integer(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(Integer::from(n))
    }
}

impl From<Base58Text> for Value {
    fn from(t: Base58Text) -> Self {
        Value::Base58(t)
    }
}

impl From<Base64Text> for Value {
    fn from(t: Base64Text) -> Self {
        Value::Base64(t)
    }
}

impl From<HexText> for Value {
    fn from(t: HexText) -> Self {
        Value::Hex(t)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::BigEndian(BigEndianVector::from_slice(bytes))
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::BigEndian(BigEndianVector::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversions() {
        let le = Value::from(LittleEndianVector::new(vec![1, 2, 3]));
        assert_eq!(le.to_little_endian().unwrap().as_bytes(), &[1, 2, 3]);

        let text = Value::from(HexText::from("0102"));
        assert_eq!(text.to_hex().unwrap().as_str(), "0102");
    }

    #[test]
    fn test_integer_round_trip() {
        for n in [0u64, 1, 58, 255, 256, 0xDEAD_BEEF, u64::MAX] {
            let value = Value::from(n);
            let le = value.to_little_endian().unwrap();
            assert_eq!(le.to_integer(), Integer::from(n));
        }
    }

    #[test]
    fn test_text_to_text_transits_vector() {
        let hex_value = Value::from(HexText::from("01FF"));
        let b64 = hex_value.to_base64().unwrap();
        let back = Value::from(b64).to_hex().unwrap();
        assert_eq!(back.as_str(), "01FF");
    }

    #[test]
    fn test_vector_to_all_text_forms() {
        let value = Value::from(vec![0x01u8, 0x00, 0xFF]);
        assert_eq!(value.to_hex().unwrap().as_str(), "0100FF");
        assert_eq!(
            Value::from(value.to_base58().unwrap())
                .to_big_endian()
                .unwrap()
                .as_bytes(),
            &[0x01, 0x00, 0xFF]
        );
        assert_eq!(
            Value::from(value.to_base64().unwrap())
                .to_hex()
                .unwrap()
                .as_str(),
            "0100FF"
        );
    }

    #[test]
    fn test_endianness_of_raw_bytes_is_big_endian() {
        let value = Value::from(vec![0x01u8, 0x02]);
        assert_eq!(value.to_integer().unwrap(), Integer::from(0x0102u32));
        assert_eq!(value.to_little_endian().unwrap().as_bytes(), &[0x02, 0x01]);
    }

    #[test]
    fn test_invalid_text_propagates_decode_error() {
        let bad = Value::from(Base58Text::from("11111O"));
        assert!(bad.to_integer().is_err());
        assert!(bad.to_hex().is_err());
        // and it is unordered relative to everything
        assert_eq!(bad.partial_cmp(&Value::from(0u64)), None);
        assert_ne!(bad.clone(), bad);
    }

    #[test]
    fn test_mixed_representation_equality() {
        let le = Value::from(LittleEndianVector::new(vec![0x02, 0x01]));
        let be = Value::from(BigEndianVector::new(vec![0x01, 0x02]));
        let n = Value::from(0x0102u64);
        let hex_text = Value::from(HexText::from("0102"));
        assert_eq!(le, be);
        assert_eq!(be, n);
        assert_eq!(n, hex_text);
    }

    #[test]
    fn test_projectable_entry_point() {
        let key = [0x11u8; 8];
        let value = Value::from_projectable(&key);
        assert_eq!(value.to_hex().unwrap().as_str(), "1111111111111111");
    }

    #[test]
    fn test_fixed_width_through_engine() {
        let value = Value::from(0x0102u64);
        assert_eq!(
            value.to_fixed_big_endian(4).unwrap().as_bytes(),
            &[0, 0, 1, 2]
        );
        assert_eq!(
            value.to_fixed_little_endian(4).unwrap().as_bytes(),
            &[2, 1, 0, 0]
        );
    }
}
