//! Chunked, length-prefixed Base58 codec for arbitrary-size vectors.
//!
//! Plain Base58 treats its input as one big integer, which makes encoding
//! cost grow super-linearly and silently drops zero bytes that carry no
//! magnitude. This codec fixes both: the vector is split into 512-byte
//! chunks that are encoded independently (each full chunk padded to exactly
//! 700 characters), and the total byte length is written up front as a
//! 6-character Base58 prefix. The prefix is what lets the decoder restore
//! trailing zero bytes the integer interpretation cannot see.
//!
//! Chunk boundaries depend only on position, never on content, so chunks
//! could be processed independently once the prefix is read.
//!
//! On decode the declared length is the source of truth, and the decoder is
//! deliberately lenient about chunk width: a final chunk may carry fewer
//! characters than the encoder emits (the missing high bytes are zero), and
//! extra '1' padding in front of a final chunk adds no magnitude. Both
//! decode to the same vector. What the decoder does insist on is that the
//! characters present can reconstruct exactly the declared byte count —
//! nothing more, nothing less.

use crate::error::{CodecError, Result};
use crate::vector::{Base58Text, LittleEndianVector};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Bitcoin Base58 alphabet (no 0, O, I or l).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Characters in the total-length prefix.
const LENGTH_PREFIX_CHARS: usize = 6;

/// Bytes encoded per chunk.
pub const CHUNK_BYTES: usize = 512;

/// Characters a full 512-byte chunk is padded to. 58^700 > 2^4096, so every
/// 512-byte value fits.
pub const CHUNK_CHARS: usize = 700;

/// Inverse alphabet indexed by ASCII byte. `None` marks bytes outside the
/// alphabet, keeping '1' (digit value 0) distinguishable from invalid input.
static INVERSE: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut table = [None; 128];
    for (value, &ch) in ALPHABET.iter().enumerate() {
        table[ch as usize] = Some(value as u8);
    }
    table
});

fn digit_value(byte: u8) -> Result<u8> {
    let value = if byte < 128 { INVERSE[byte as usize] } else { None };
    value.ok_or_else(|| {
        CodecError::Decode(format!(
            "invalid base58 character '{}'",
            (byte as char).escape_default()
        ))
    })
}

/// Base58 digits of `n`, most significant first, left-padded with zero
/// digits to at least `min_digits`. Zero encodes to at least one digit.
fn integer_digits(n: &BigUint, min_digits: usize) -> Vec<u8> {
    let mut digits = n.to_radix_be(58);
    if digits.is_empty() {
        digits.push(0);
    }
    if digits.len() < min_digits {
        let mut padded = vec![0u8; min_digits - digits.len()];
        padded.extend_from_slice(&digits);
        digits = padded;
    }
    digits
}

fn push_digits(out: &mut String, digits: &[u8]) {
    for &digit in digits {
        out.push(ALPHABET[digit as usize] as char);
    }
}

/// Encode `v` as a 6-character length prefix followed by per-chunk Base58.
///
/// Every chunk of exactly [`CHUNK_BYTES`] bytes is interpreted as a
/// little-endian integer and padded to [`CHUNK_CHARS`] characters; a final
/// partial chunk keeps its natural digit count.
pub fn encode(v: &LittleEndianVector) -> Base58Text {
    let bytes = v.as_bytes();
    let mut out = String::with_capacity(
        LENGTH_PREFIX_CHARS + (bytes.len() / CHUNK_BYTES + 1) * CHUNK_CHARS,
    );
    push_digits(
        &mut out,
        &integer_digits(&BigUint::from(bytes.len()), LENGTH_PREFIX_CHARS),
    );
    for chunk in bytes.chunks(CHUNK_BYTES) {
        let value = BigUint::from_bytes_le(chunk);
        let width = if chunk.len() == CHUNK_BYTES { CHUNK_CHARS } else { 1 };
        push_digits(&mut out, &integer_digits(&value, width));
    }
    Base58Text::new(out)
}

/// Decode text produced by [`encode`].
///
/// Fails with [`CodecError::Decode`] on characters outside the alphabet or a
/// truncated length prefix, and with [`CodecError::LengthMismatch`] when the
/// chunk characters reconstruct a byte count other than the declared one.
/// No partial vector is ever returned.
pub fn decode(text: &str) -> Result<LittleEndianVector> {
    let chars = text.as_bytes();
    if chars.len() < LENGTH_PREFIX_CHARS {
        return Err(CodecError::Decode(format!(
            "base58 text too short for length prefix: {} characters",
            chars.len()
        )));
    }

    let mut declared: u64 = 0;
    for &ch in &chars[..LENGTH_PREFIX_CHARS] {
        declared = declared * 58 + u64::from(digit_value(ch)?);
    }
    let declared = usize::try_from(declared)
        .map_err(|_| CodecError::Decode("declared length exceeds address space".to_string()))?;

    // The prefix is untrusted until checked against the characters actually
    // present: c chunk characters can reconstruct at most ceil(c/700) * 512
    // bytes, so anything declared beyond that is rejected before the output
    // buffer for it is ever allocated.
    let payload = &chars[LENGTH_PREFIX_CHARS..];
    let capacity = payload.len().div_ceil(CHUNK_CHARS).saturating_mul(CHUNK_BYTES);
    if capacity < declared {
        return Err(CodecError::LengthMismatch {
            declared,
            actual: capacity,
        });
    }

    let mut output = vec![0u8; declared];
    let mut filled = 0usize;
    for chunk in payload.chunks(CHUNK_CHARS) {
        if filled == declared {
            return Err(CodecError::Decode(
                "unexpected characters after declared length".to_string(),
            ));
        }
        let mut digits = Vec::with_capacity(chunk.len());
        for &ch in chunk {
            digits.push(digit_value(ch)?);
        }
        // Validated above, so from_radix_be cannot fail.
        let value = BigUint::from_radix_be(&digits, 58)
            .ok_or_else(|| CodecError::Decode("invalid base58 digits".to_string()))?;
        let bytes = value.to_bytes_le();
        let slot = CHUNK_BYTES.min(declared - filled);
        // A zero-valued chunk expands to a single zero byte; anything beyond
        // the slot means the text encodes more bytes than were declared.
        let significant = if value == BigUint::from(0u32) { 0 } else { bytes.len() };
        if significant > slot {
            return Err(CodecError::LengthMismatch {
                declared,
                actual: filled + significant,
            });
        }
        output[filled..filled + significant].copy_from_slice(&bytes[..significant]);
        filled += slot;
    }

    // The capacity check above guarantees the chunks filled exactly
    // `declared` bytes once the loop completes.
    debug_assert_eq!(filled, declared);
    Ok(LittleEndianVector::new(output))
}
