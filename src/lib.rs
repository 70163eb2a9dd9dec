//! ChainVec - multi-representation byte-vector codec
//!
//! Lossless, bidirectional conversions between binary byte sequences
//! (little-endian, big-endian), an arbitrary-precision integer and three
//! text encodings, plus the pipeline that turns a public key into a
//! checksummed address string.
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Representations
//! - [`vector`] - Little/big-endian vectors, integer projection, text
//!   newtypes, the `ToVector` capability and fixed-width adapters
//! - [`convert`] - Conversion engine dispatching any representation pair
//!
//! ## Text Codecs
//! - [`base58`] - Chunked, length-prefixed Base58 for unbounded vectors
//! - [`base64`] - RFC 4648 padded Base64
//! - [`hex`] - Uppercase hexadecimal
//!
//! ## Addresses
//! - [`address`] - SHA-256/RIPEMD-160 Base58Check address derivation
//!
//! ## Utilities
//! - [`error`] - Error types
//!
//! Every operation is a pure function over immutable values; the only
//! process-wide state is a read-only alphabet table, so everything here is
//! safe under unrestricted concurrent use.

#![forbid(unsafe_code)]

// ============================================================================
// Representations & Conversion
// ============================================================================
pub mod convert;
pub mod vector;

// ============================================================================
// Text Codecs
// ============================================================================
pub mod base58;
pub mod base64;
pub mod hex;

// ============================================================================
// Addresses
// ============================================================================
pub mod address;

// ============================================================================
// Utilities
// ============================================================================
pub mod error;
