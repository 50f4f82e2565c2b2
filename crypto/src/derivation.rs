//! One-time key derivation
//!
//! A sender derives `D = 8 * (r * A)` from their transaction secret and the
//! recipient's view key, then stretches `D` per output index into the scalar
//! `H_s(D || varint(index))` that blinds the recipient's spend key.

use digest::Digest;

use crate::ecc::{self, Point, Scalar, BASEPOINT_TABLE};
use crate::error::Result;
use crate::hash::CNFastHash;
use crate::keys::PublicKey;

/// Wrapper around the cofactor-cleared Diffie-Hellman value `8 * (x * P)`
pub struct Derivation(Point);

impl Derivation {
    /// Creates a new derivation from the given public and secret keys
    ///
    /// Multiplying by the cofactor drops any torsion component before the
    /// value is used for hashing, so both sides of the exchange agree on it.
    pub fn generate(public_key: &PublicKey, secret_key: &Scalar) -> Result<Self> {
        let point = ecc::scalarmult(public_key, secret_key)?;
        Ok(Derivation(point.mul_by_cofactor()))
    }

    /// Reconstructs a derivation from its compressed 32 byte form
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Derivation(ecc::decompress_point(data)?))
    }

    /// The compressed 32 byte form of this derivation
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.compress().to_bytes()
    }

    /// Stretches this derivation into a scalar: `H_s(D || varint(index))`
    pub fn to_scalar(&self, output_index: u64) -> Scalar {
        let mut hasher = CNFastHash::new();
        hasher.input(self.0.compress().as_bytes());
        hasher.input(varint::encode(output_index));

        ecc::hash_to_scalar(hasher.result())
    }

    /// Derives the one-time public key `base + H_s(D || varint(index)) * G`
    pub fn derive_public_key(&self, output_index: u64, base: &PublicKey) -> Result<PublicKey> {
        let base = ecc::decompress_point(base.as_bytes())?;
        let blinded = base + &self.to_scalar(output_index) * &BASEPOINT_TABLE;

        Ok(blinded.compress())
    }

    /// Derives the one-time secret key `base + H_s(D || varint(index))`,
    /// the scalar-side counterpart of [`derive_public_key`]
    ///
    /// [`derive_public_key`]: Derivation::derive_public_key
    pub fn derive_secret_key(&self, output_index: u64, base: &Scalar) -> Scalar {
        base + self.to_scalar(output_index)
    }
}
