//! Error types for chainvec

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Text contains a character outside its codec's alphabet, or violates a
    /// structural rule (truncated length prefix, odd hex length, bad padding).
    Decode(String),
    /// The reconstructed byte count disagrees with a declared length prefix.
    LengthMismatch { declared: usize, actual: usize },
    /// Invalid network or version selection.
    Config(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodecError::Decode(msg) => write!(f, "Decode error: {}", msg),
            CodecError::LengthMismatch { declared, actual } => write!(
                f,
                "Length mismatch: declared {} bytes, reconstructed {}",
                declared, actual
            ),
            CodecError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CodecError {}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, CodecError>;
