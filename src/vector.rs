//! Byte-vector representations and the integer projection they share.
//!
//! A value can live as a little-endian vector, a big-endian vector, an
//! arbitrary-precision integer, or one of the text encodings. The vector
//! types here are immutable after construction; every conversion produces a
//! new value. Equality and ordering are defined through the integer
//! projection alone, so two vectors compare equal even when one carries
//! extra non-significant zero bytes. That is what lets mixed-representation
//! values share a sorted container.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Canonical numeric interpretation of a vector: a non-negative
/// arbitrary-precision integer.
pub type Integer = BigUint;

// ----------------------------------------------------------------------------
// Capability: externally projectable types
// ----------------------------------------------------------------------------

/// Capability for external value types (public keys, signatures, curve
/// points, digests) to expose their canonical big-endian byte form.
///
/// Implementors only provide `to_vector`; everything else the codec layer
/// offers is then available through [`crate::convert::Value`].
pub trait ToVector {
    fn to_vector(&self) -> BigEndianVector;
}

impl ToVector for BigEndianVector {
    fn to_vector(&self) -> BigEndianVector {
        self.clone()
    }
}

impl ToVector for LittleEndianVector {
    fn to_vector(&self) -> BigEndianVector {
        self.to_big_endian()
    }
}

impl ToVector for [u8] {
    fn to_vector(&self) -> BigEndianVector {
        BigEndianVector::from_slice(self)
    }
}

impl<const N: usize> ToVector for [u8; N] {
    fn to_vector(&self) -> BigEndianVector {
        BigEndianVector::from_slice(self)
    }
}

impl ToVector for Vec<u8> {
    fn to_vector(&self) -> BigEndianVector {
        BigEndianVector::from_slice(self)
    }
}

impl ToVector for BigUint {
    fn to_vector(&self) -> BigEndianVector {
        BigEndianVector::from_integer(self)
    }
}

// ----------------------------------------------------------------------------
// Little-endian vector
// ----------------------------------------------------------------------------

/// Immutable byte sequence where index 0 is the least significant byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LittleEndianVector(#[serde(with = "serde_bytes")] Vec<u8>);

impl LittleEndianVector {
    pub fn new(bytes: Vec<u8>) -> Self {
        LittleEndianVector(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        LittleEndianVector(bytes.to_vec())
    }

    /// Little-endian bytes of an integer. Zero becomes a single zero byte.
    pub fn from_integer(n: &Integer) -> Self {
        LittleEndianVector(n.to_bytes_le())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the vector. Trailing zero bytes carry no magnitude.
    pub fn to_integer(&self) -> Integer {
        BigUint::from_bytes_le(&self.0)
    }

    /// Same bytes in most-significant-first order.
    pub fn to_big_endian(&self) -> BigEndianVector {
        let mut bytes = self.0.clone();
        bytes.reverse();
        BigEndianVector(bytes)
    }

    /// Exactly `width` bytes: zero-extended on the most-significant (high
    /// index) side when short, truncated from the least-significant end when
    /// long. Used to normalize digests and field elements to fixed widths.
    pub fn to_fixed(&self, width: usize) -> LittleEndianVector {
        let mut bytes = if self.0.len() > width {
            self.0[self.0.len() - width..].to_vec()
        } else {
            self.0.clone()
        };
        bytes.resize(width, 0);
        LittleEndianVector(bytes)
    }
}

impl PartialEq for LittleEndianVector {
    fn eq(&self, other: &Self) -> bool {
        self.to_integer() == other.to_integer()
    }
}

impl Eq for LittleEndianVector {}

impl PartialOrd for LittleEndianVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LittleEndianVector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_integer().cmp(&other.to_integer())
    }
}

impl PartialEq<BigEndianVector> for LittleEndianVector {
    fn eq(&self, other: &BigEndianVector) -> bool {
        self.to_integer() == other.to_integer()
    }
}

impl PartialOrd<BigEndianVector> for LittleEndianVector {
    fn partial_cmp(&self, other: &BigEndianVector) -> Option<Ordering> {
        Some(self.to_integer().cmp(&other.to_integer()))
    }
}

impl From<Vec<u8>> for LittleEndianVector {
    fn from(bytes: Vec<u8>) -> Self {
        LittleEndianVector(bytes)
    }
}

impl From<&[u8]> for LittleEndianVector {
    fn from(bytes: &[u8]) -> Self {
        LittleEndianVector::from_slice(bytes)
    }
}

// ----------------------------------------------------------------------------
// Big-endian vector
// ----------------------------------------------------------------------------

/// Immutable byte sequence where index 0 is the most significant byte. The
/// canonical form external cryptographic types project into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigEndianVector(#[serde(with = "serde_bytes")] Vec<u8>);

impl BigEndianVector {
    pub fn new(bytes: Vec<u8>) -> Self {
        BigEndianVector(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        BigEndianVector(bytes.to_vec())
    }

    /// Big-endian bytes of an integer. Zero becomes a single zero byte.
    pub fn from_integer(n: &Integer) -> Self {
        BigEndianVector(n.to_bytes_be())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the vector. Leading zero bytes carry no magnitude.
    pub fn to_integer(&self) -> Integer {
        BigUint::from_bytes_be(&self.0)
    }

    /// Same bytes in least-significant-first order.
    pub fn to_little_endian(&self) -> LittleEndianVector {
        let mut bytes = self.0.clone();
        bytes.reverse();
        LittleEndianVector(bytes)
    }

    /// Exactly `width` bytes: zero-extended on the most-significant (low
    /// index) side when short, truncated from the least-significant end when
    /// long.
    pub fn to_fixed(&self, width: usize) -> BigEndianVector {
        if self.0.len() >= width {
            BigEndianVector(self.0[..width].to_vec())
        } else {
            let mut bytes = vec![0u8; width - self.0.len()];
            bytes.extend_from_slice(&self.0);
            BigEndianVector(bytes)
        }
    }
}

impl PartialEq for BigEndianVector {
    fn eq(&self, other: &Self) -> bool {
        self.to_integer() == other.to_integer()
    }
}

impl Eq for BigEndianVector {}

impl PartialOrd for BigEndianVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigEndianVector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_integer().cmp(&other.to_integer())
    }
}

impl PartialEq<LittleEndianVector> for BigEndianVector {
    fn eq(&self, other: &LittleEndianVector) -> bool {
        self.to_integer() == other.to_integer()
    }
}

impl PartialOrd<LittleEndianVector> for BigEndianVector {
    fn partial_cmp(&self, other: &LittleEndianVector) -> Option<Ordering> {
        Some(self.to_integer().cmp(&other.to_integer()))
    }
}

impl From<Vec<u8>> for BigEndianVector {
    fn from(bytes: Vec<u8>) -> Self {
        BigEndianVector(bytes)
    }
}

impl From<&[u8]> for BigEndianVector {
    fn from(bytes: &[u8]) -> Self {
        BigEndianVector::from_slice(bytes)
    }
}

// ----------------------------------------------------------------------------
// Text representations
// ----------------------------------------------------------------------------

/// Chunked, length-prefixed Base58 text produced by [`crate::base58`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Base58Text(String);

impl Base58Text {
    pub fn new(text: impl Into<String>) -> Self {
        Base58Text(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Base58Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Base58Text {
    fn from(text: String) -> Self {
        Base58Text(text)
    }
}

impl From<&str> for Base58Text {
    fn from(text: &str) -> Self {
        Base58Text(text.to_string())
    }
}

/// RFC 4648 padded Base64 text produced by [`crate::base64`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Base64Text(String);

impl Base64Text {
    pub fn new(text: impl Into<String>) -> Self {
        Base64Text(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Base64Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Base64Text {
    fn from(text: String) -> Self {
        Base64Text(text)
    }
}

impl From<&str> for Base64Text {
    fn from(text: &str) -> Self {
        Base64Text(text.to_string())
    }
}

/// Uppercase hexadecimal text produced by [`crate::hex`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexText(String);

impl HexText {
    pub fn new(text: impl Into<String>) -> Self {
        HexText(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HexText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HexText {
    fn from(text: String) -> Self {
        HexText(text)
    }
}

impl From<&str> for HexText {
    fn from(text: &str) -> Self {
        HexText(text.to_string())
    }
}

// ----------------------------------------------------------------------------
// Testing
// ----------------------------------------------------------------------------
