use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::ecc::{CompressedPoint, Scalar, BASEPOINT_TABLE};

/// An unsigned 256-bit value used as a private key, reduced mod `l`
pub type SecretKey = Scalar;

/// A compressed point on the curve, usually obtained by multiplying a secret
/// scalar with the curve basepoint
pub type PublicKey = CompressedPoint;

/// The linking tag of a one-time key: `I = x * H_p(P)`
///
/// Two ring signatures produced with the same secret key carry the same key
/// image, which is what makes double spends detectable without revealing the
/// signer.
pub type KeyImage = CompressedPoint;

/// A pair of a given secret key and its corresponding public key
#[derive(Clone, Serialize, Deserialize)]
pub struct KeyPair {
    /// The secret key
    pub secret_key: SecretKey,
    /// The public key
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generates a keypair from the given CSPRNG
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::from(Scalar::random(rng))
    }
}

impl From<Scalar> for KeyPair {
    fn from(secret_key: SecretKey) -> Self {
        let public_key = (&secret_key * &BASEPOINT_TABLE).compress();
        Self {
            secret_key,
            public_key,
        }
    }
}
