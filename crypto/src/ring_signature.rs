//! Traceable ring signatures following the original CryptoNote construction
//!
//! A signature over a ring of `n` public keys proves knowledge of exactly one
//! of the matching secret keys. Every member contributes a commitment pair
//! `(L_i, R_i)` to a single running hash seeded with the message prefix; the
//! ring closes because the challenges of all members sum to that hash.

use digest::Digest;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::ecc::{self, Scalar};
use crate::error::{Error, Result};
use crate::hash::{CNFastHash, Hash256};
use crate::keys::{KeyImage, PublicKey, SecretKey};

/// One ring member's portion of a signature: a challenge and a response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub c: Scalar,
    pub r: Scalar,
}

impl Signature {
    /// The 64 byte wire form: `c || r`, both little-endian
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(self.c.as_bytes());
        bytes[32..].copy_from_slice(self.r.as_bytes());
        bytes
    }

    /// Parses the 64 byte wire form, rejecting non-canonical scalars
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != 64 {
            return Err(Error::InvalidLength {
                expected: 64,
                got: data.len(),
            });
        }
        let c = Scalar::from_canonical_bytes(*array_ref![data, 0, 32]).ok_or(Error::OutOfRange)?;
        let r = Scalar::from_canonical_bytes(*array_ref![data, 32, 32]).ok_or(Error::OutOfRange)?;

        Ok(Signature { c, r })
    }
}

/// Computes the key image `I = x * H_p(P)` of a one-time key
pub fn generate_key_image(public_key: &PublicKey, secret_key: &SecretKey) -> Result<KeyImage> {
    let hp = ecc::hash_to_point(public_key.as_bytes())?;
    Ok((secret_key * hp).compress())
}

/// Generates a traceable ring signature over `prefix_hash`
///
/// The caller owns the secret key at `secret_index` within the ring and has
/// already computed its key image. Nonce material is drawn from `rng` and
/// must be fresh per call: reusing it across two messages lets anyone solve
/// for the secret key.
pub fn generate_ring_signature<R: RngCore + CryptoRng>(
    prefix_hash: &Hash256,
    key_image: &KeyImage,
    ring: &[PublicKey],
    secret_key: &SecretKey,
    secret_index: usize,
    rng: &mut R,
) -> Result<Vec<Signature>> {
    if ring.is_empty() {
        return Err(Error::EmptyRing);
    }
    if secret_index >= ring.len() {
        return Err(Error::IndexOutOfRange {
            index: secret_index,
            ring_size: ring.len(),
        });
    }

    // Refuse to sign with a key that cannot verify: the claimed member must
    // decode to a curve point and the secret must match both it and the
    // claimed key image
    let member = ecc::decompress_point(ring[secret_index].as_bytes())?;
    if ecc::scalarmult_base(secret_key) != member {
        return Err(Error::InvalidSecretKey);
    }
    if generate_key_image(&ring[secret_index], secret_key)? != *key_image {
        return Err(Error::InvalidSecretKey);
    }

    let mut hasher = CNFastHash::new();
    hasher.input(prefix_hash);

    let mut signatures = vec![
        Signature {
            c: Scalar::zero(),
            r: Scalar::zero(),
        };
        ring.len()
    ];
    let mut challenge_sum = Scalar::zero();
    let mut nonce = Scalar::zero();

    for (i, member) in ring.iter().enumerate() {
        let (commitment_l, commitment_r) = if i == secret_index {
            nonce = Scalar::random(rng);
            let hp = ecc::hash_to_point(member.as_bytes())?;
            (ecc::scalarmult_base(&nonce), &nonce * hp)
        } else {
            let c = Scalar::random(rng);
            let r = Scalar::random(rng);
            let l = ecc::double_scalarmult_base_vartime(&c, member, &r)?;
            let r_commit = ecc::double_scalarmult_precomp_vartime(&r, member, &c, key_image)?;

            challenge_sum += c;
            signatures[i] = Signature { c, r };
            (l, r_commit)
        };

        hasher.input(commitment_l.compress().as_bytes());
        hasher.input(commitment_r.compress().as_bytes());
    }

    // Close the ring: the real member absorbs whatever challenge is left
    // over, and its response cancels the secret out of the commitment
    let challenge = ecc::hash_to_scalar(hasher.result());
    let c = challenge - challenge_sum;
    signatures[secret_index] = Signature {
        c,
        r: nonce - c * secret_key,
    };

    Ok(signatures)
}

/// Verifies a traceable ring signature from public data alone
///
/// Replays the commitment hash chain using each `(c, r)` pair and accepts
/// only if the challenges sum back to the replayed hash. Malformed points
/// and key images outside the prime-order subgroup verify as false.
pub fn check_ring_signature(
    prefix_hash: &Hash256,
    key_image: &KeyImage,
    ring: &[PublicKey],
    signatures: &[Signature],
) -> bool {
    if ring.is_empty() || signatures.len() != ring.len() {
        return false;
    }

    // A torsion component in the key image would let the same secret key
    // produce several distinct images, defeating double-spend detection
    let image = match key_image.decompress() {
        Some(point) if point.is_torsion_free() => point,
        _ => return false,
    };

    let mut hasher = CNFastHash::new();
    hasher.input(prefix_hash);

    let mut challenge_sum = Scalar::zero();

    for (member, signature) in ring.iter().zip(signatures) {
        let point = match member.decompress() {
            Some(point) => point,
            None => return false,
        };
        let hp = match ecc::hash_to_point(member.as_bytes()) {
            Ok(point) => point,
            Err(_) => return false,
        };

        let commitment_l = ecc::Point::vartime_double_scalar_mul_basepoint(
            &signature.c,
            &point,
            &signature.r,
        );
        let commitment_r = signature.r * hp + signature.c * image;

        hasher.input(commitment_l.compress().as_bytes());
        hasher.input(commitment_r.compress().as_bytes());

        challenge_sum += signature.c;
    }

    ecc::hash_to_scalar(hasher.result()) == challenge_sum
}
