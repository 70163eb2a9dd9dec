//! Base58Check address derivation from public keys.
//!
//! The pipeline is fixed: SHA-256 of the key bytes, RIPEMD-160 of that
//! digest, a network version byte in front, a 4-byte double-SHA-256
//! checksum behind, and a plain (non-chunked) Base58Check encoding of the
//! resulting 25 bytes. Leading zero bytes of the payload survive as leading
//! '1' characters, which the bare integer conversion would otherwise drop.

use crate::error::{CodecError, Result};
use crate::vector::ToVector;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Version prefix byte for mainnet addresses.
pub const MAINNET_VERSION: u8 = 0xEA;
/// Version prefix byte for testnet addresses.
pub const TESTNET_VERSION: u8 = 0xEB;
/// Bytes of double SHA-256 appended as the transcription checksum.
pub const CHECKSUM_LEN: usize = 4;
/// Width of the RIPEMD-160 key digest.
pub const KEY_HASH_LEN: usize = 20;

/// Which chain an address belongs to; selects the version prefix byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Test,
}

impl Network {
    pub fn version_byte(&self) -> u8 {
        match self {
            Network::Main => MAINNET_VERSION,
            Network::Test => TESTNET_VERSION,
        }
    }
}

impl FromStr for Network {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            other => Err(CodecError::Config(format!(
                "unknown network '{}', expected 'main' or 'test'",
                other
            ))),
        }
    }
}

/// A derived, checksummed, human-typeable address string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 digest of arbitrary bytes.
pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// RIPEMD-160 of SHA-256: the 20-byte key digest addresses are built from.
pub fn hash160(bytes: &[u8]) -> [u8; KEY_HASH_LEN] {
    Ripemd160::digest(Sha256::digest(bytes)).into()
}

/// First 4 bytes of a double SHA-256 over the payload.
fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256(&sha256(payload));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Derive the address of `key` on the given network.
pub fn derive_address<K: ToVector + ?Sized>(key: &K, network: Network) -> Address {
    derive_address_with_version(key, network.version_byte())
}

/// Derive an address with an explicit version prefix byte instead of a
/// network selector.
pub fn derive_address_with_version<K: ToVector + ?Sized>(key: &K, version: u8) -> Address {
    let key_bytes = key.to_vector();
    let key_hash = hash160(key_bytes.as_bytes());

    let mut payload = Vec::with_capacity(1 + KEY_HASH_LEN + CHECKSUM_LEN);
    payload.push(version);
    payload.extend_from_slice(&key_hash);
    let check = checksum(&payload);
    payload.extend_from_slice(&check);

    // bs58 counts leading zero bytes and renders them as leading '1's
    let address = Address(bs58::encode(&payload).into_string());
    trace!(version, %address, "derived address");
    address
}

/// Decode an address back into its version byte and 20-byte key digest,
/// verifying structure and checksum.
pub fn decode_address(address: &str) -> Result<(u8, [u8; KEY_HASH_LEN])> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|e| CodecError::Decode(format!("invalid base58 address: {}", e)))?;

    if decoded.len() != 1 + KEY_HASH_LEN + CHECKSUM_LEN {
        return Err(CodecError::Decode(format!(
            "address payload must be {} bytes, got {}",
            1 + KEY_HASH_LEN + CHECKSUM_LEN,
            decoded.len()
        )));
    }

    let (payload, check) = decoded.split_at(1 + KEY_HASH_LEN);
    if check != checksum(payload) {
        return Err(CodecError::Decode("address checksum mismatch".to_string()));
    }

    let mut key_hash = [0u8; KEY_HASH_LEN];
    key_hash.copy_from_slice(&payload[1..]);
    Ok((payload[0], key_hash))
}

/// Check whether `address` is well formed, optionally pinning the network.
pub fn validate_address(address: &str, network: Option<Network>) -> bool {
    match decode_address(address) {
        Ok((version, _)) => network.map_or(true, |n| version == n.version_byte()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> Vec<u8> {
        hex::decode(
            "0433F8C523B3FF52F0A515DD19EB88B1356BED642F5B9A55AE34D7481FE2EED2D3\
             6BDACAFD1A400910CDD1F3BB79A8C4D090C37180156BE25D2801D53DFA646066",
        )
        .unwrap()
    }

    #[test]
    fn test_reference_address_with_version_override() {
        let address = derive_address_with_version(&test_key(), 0);
        assert_eq!(address.as_str(), "1ABD7Te3tqtMmdmYh432fSyB2fX3juS475");
    }

    #[test]
    fn test_network_versions_differ() {
        let key = test_key();
        let main = derive_address(&key, Network::Main);
        let test = derive_address(&key, Network::Test);
        assert_ne!(main, test);
        assert_eq!(decode_address(main.as_str()).unwrap().0, MAINNET_VERSION);
        assert_eq!(decode_address(test.as_str()).unwrap().0, TESTNET_VERSION);
    }

    #[test]
    fn test_decode_recovers_key_hash() {
        let key = test_key();
        let address = derive_address(&key, Network::Main);
        let (version, key_hash) = decode_address(address.as_str()).unwrap();
        assert_eq!(version, MAINNET_VERSION);
        assert_eq!(key_hash, hash160(&key));
    }

    #[test]
    fn test_checksum_tamper_detected() {
        let address = derive_address(&test_key(), Network::Main).into_string();
        // Flip the final character to another alphabet member
        let mut tampered = address.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == '2' { '3' } else { '2' });
        assert!(decode_address(&tampered).is_err());
        assert!(!validate_address(&tampered, None));
    }

    #[test]
    fn test_validate_pins_network() {
        let address = derive_address(&test_key(), Network::Test).into_string();
        assert!(validate_address(&address, None));
        assert!(validate_address(&address, Some(Network::Test)));
        assert!(!validate_address(&address, Some(Network::Main)));
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("main".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Test);
        assert!(matches!(
            "regtest".parse::<Network>().unwrap_err(),
            CodecError::Config(_)
        ));
    }

    #[test]
    fn test_two_leading_zero_payload_bytes_give_two_ones() {
        // The hash160 of this key starts with a zero byte; under version 0
        // the payload then carries exactly two leading zeros, and the
        // address exactly two leading '1's.
        let key = b"chainvec-test-key-449".to_vec();
        assert_eq!(hash160(&key)[0], 0x00);
        assert_ne!(hash160(&key)[1], 0x00);

        let address = derive_address_with_version(&key, 0);
        assert_eq!(address.as_str(), "1129QuBEGp7UmH3EwQdCERKWvdaLfTzFmu");
        let ones = address.as_str().chars().take_while(|&c| c == '1').count();
        assert_eq!(ones, 2);
    }

    #[test]
    fn test_version_zero_address_starts_with_one() {
        // Version byte 0 is a leading zero byte of the payload
        let address = derive_address_with_version(&test_key(), 0);
        assert!(address.as_str().starts_with('1'));
    }
}
