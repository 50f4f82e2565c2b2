use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use digest::Digest;
use serde::{Deserialize, Serialize};
use sha3::Keccak256Full;

use crate::error::Error;

/// Raw 32 byte digest output
pub type Hash256Data = generic_array::GenericArray<u8, generic_array::typenum::U32>;

/// A 256-bit hash value as produced by [`CNFastHash`]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Hash256(Hash256Data);

impl Hash256 {
    /// The all-zero hash
    pub fn null_hash() -> Self {
        Hash256(Hash256Data::from([0; 32]))
    }

    pub fn data(&self) -> &Hash256Data {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl Display for Hash256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<Hash256Data> for Hash256 {
    fn from(data: Hash256Data) -> Self {
        Hash256(data)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl TryFrom<&str> for Hash256 {
    type Error = Error;
    fn try_from(data: &str) -> Result<Self, Error> {
        let bytes = hex::decode(data)?;
        if bytes.len() != 32 {
            return Err(Error::InvalidLength {
                expected: 32,
                got: bytes.len(),
            });
        }
        Ok(Hash256(Hash256Data::clone_from_slice(&bytes)))
    }
}

/// The CryptoNote "fast hash" (`cn_fast_hash`)
///
/// Keccak-256 with the original Keccak padding, not the NIST SHA-3 domain
/// separator. `Keccak256Full` squeezes a full 1600-bit state of which the
/// first 32 bytes form the digest.
pub struct CNFastHash {
    hasher: Keccak256Full,
}

impl Digest for CNFastHash {
    type OutputSize = digest::generic_array::typenum::U32;

    fn new() -> Self {
        CNFastHash {
            hasher: Keccak256Full::new(),
        }
    }
    fn input<B: AsRef<[u8]>>(&mut self, data: B) {
        self.hasher.input(data);
    }
    fn chain<B: AsRef<[u8]>>(self, data: B) -> Self {
        CNFastHash {
            hasher: self.hasher.chain(data),
        }
    }
    fn result(self) -> Hash256Data {
        *Hash256Data::from_slice(&self.hasher.result()[..32])
    }
    fn result_reset(&mut self) -> Hash256Data {
        *Hash256Data::from_slice(&self.hasher.result_reset()[..32])
    }
    fn reset(&mut self) {
        self.hasher.reset()
    }
    fn digest(data: &[u8]) -> Hash256Data {
        *Hash256Data::from_slice(&Keccak256Full::digest(data)[..32])
    }
    fn output_size() -> usize {
        32
    }
}

/// Hashes arbitrary data to a [`Hash256`]
pub fn cn_fast_hash(data: &[u8]) -> Hash256 {
    Hash256(CNFastHash::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_hash() {
        assert_eq!(
            Hash256::null_hash().to_string(),
            "0000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn hashes_reference_values() {
        // Keccak-256, original padding
        assert_eq!(
            cn_fast_hash(b"Hello World").to_string(),
            "592fa743889fc7f92ac2a37bb1f5ba1daf2a5c84741ca0e0061d243a2e6707ba"
        );
        assert_eq!(
            cn_fast_hash(b"").to_string(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn incremental_matches_oneshot() {
        let mut hasher = CNFastHash::new();
        hasher.input(b"Hello ");
        hasher.input(b"World");
        assert_eq!(hasher.result(), CNFastHash::digest(b"Hello World"));
    }

    #[test]
    fn decodes_correctly() {
        let data: [u8; 32] = [
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
            25, 26, 27, 28, 29, 30, 31, 32,
        ];
        let hash =
            Hash256::try_from("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20")
                .unwrap();
        assert_eq!(hash.data().as_slice(), data);
    }

    #[test]
    fn errors_on_invalid_input() {
        assert!(matches!(
            Hash256::try_from("01"),
            Err(Error::InvalidLength { expected: 32, got: 1 })
        ));
        assert!(Hash256::try_from(
            "zz02030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"
        )
        .is_err());

        // An odd-length string is a hex error, not a truncated length report
        let odd = &"0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"[..63];
        assert!(matches!(Hash256::try_from(odd), Err(Error::InvalidHex(_))));
        let short = &"0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20"[..62];
        assert!(matches!(
            Hash256::try_from(short),
            Err(Error::InvalidLength { expected: 32, got: 31 })
        ));
    }
}
