//! Arithmetic on the Ed25519 twisted Edwards curve and its scalar field
//!
//! Scalars are 32 byte little-endian values reduced modulo the group order
//! `l = 2^252 + 27742317777372353535851937790883648493`. Points cross the
//! API boundary in the compressed 32 byte little-endian form (sign bit plus
//! y coordinate) and every decompression validates curve membership.

use digest::Digest;

use crate::error::{Error, Result};
use crate::hash::{CNFastHash, Hash256Data};

pub use curve25519_dalek::constants::ED25519_BASEPOINT_COMPRESSED as BASEPOINT_COMPRESSED;
pub use curve25519_dalek::constants::ED25519_BASEPOINT_POINT as BASEPOINT;
pub use curve25519_dalek::constants::ED25519_BASEPOINT_TABLE as BASEPOINT_TABLE;
pub use curve25519_dalek::edwards::CompressedEdwardsY as CompressedPoint;
pub use curve25519_dalek::edwards::EdwardsPoint as Point;
pub use curve25519_dalek::scalar::Scalar;
pub use curve25519_dalek::traits::Identity;

use curve25519_dalek::traits::VartimeMultiscalarMul;

/// Bound on hash-to-point decompression retries. Each attempt succeeds for
/// roughly half of all candidates, so exhausting this is a broken invariant.
const HASH_TO_POINT_ATTEMPTS: usize = 128;

/// Helper extension trait for Scalar
pub trait ScalarExt {
    /// Builds a scalar from a 32 byte little-endian slice, reducing mod `l`
    fn from_slice(data: &[u8]) -> Result<Scalar>;
}

impl ScalarExt for Scalar {
    fn from_slice(data: &[u8]) -> Result<Scalar> {
        if data.len() != 32 {
            return Err(Error::InvalidLength {
                expected: 32,
                got: data.len(),
            });
        }
        Ok(Scalar::from_bytes_mod_order(*array_ref![data, 0, 32]))
    }
}

/// Decodes a compressed encoding, validating that it lies on the curve
pub fn decompress_point(data: &[u8]) -> Result<Point> {
    if data.len() != 32 {
        return Err(Error::InvalidLength {
            expected: 32,
            got: data.len(),
        });
    }
    CompressedPoint::from_slice(data)
        .decompress()
        .ok_or(Error::InvalidPoint)
}

/// Converts a given hash to a `Scalar` (H_s)
pub fn hash_to_scalar(hash: Hash256Data) -> Scalar {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&hash);
    Scalar::from_bytes_mod_order(buf)
}

/// Maps arbitrary data to a curve point (H_p)
///
/// The data is hashed with `cn_fast_hash` and the digest, with its sign bit
/// cleared, is taken as a candidate compressed point. Candidates that do not
/// decompress are re-hashed until one does. The decoded point is multiplied
/// by the cofactor to land in the prime-order subgroup, which keeps torsion
/// components out of key images.
pub fn hash_to_point(data: &[u8]) -> Result<Point> {
    let mut candidate = CNFastHash::digest(data);

    for _ in 0..HASH_TO_POINT_ATTEMPTS {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&candidate);
        bytes[31] &= 0x7f;

        if let Some(point) = CompressedPoint::from_slice(&bytes).decompress() {
            if !point.is_small_order() {
                return Ok(point.mul_by_cofactor());
            }
        }

        candidate = CNFastHash::digest(&candidate);
    }

    Err(Error::HashToCurveFailure)
}

/// Returns `k * G`
pub fn scalarmult_base(k: &Scalar) -> Point {
    k * &BASEPOINT_TABLE
}

/// Returns `k * P`
pub fn scalarmult(p: &CompressedPoint, k: &Scalar) -> Result<Point> {
    let point = p.decompress().ok_or(Error::InvalidPoint)?;
    Ok(k * point)
}

/// Returns `P + Q`
pub fn add(p: &CompressedPoint, q: &CompressedPoint) -> Result<Point> {
    let p = p.decompress().ok_or(Error::InvalidPoint)?;
    let q = q.decompress().ok_or(Error::InvalidPoint)?;
    Ok(p + q)
}

/// Returns `c * P + r * G`
///
/// Variable time. Every operand is public in the signing and verification
/// protocols that call this.
pub fn double_scalarmult_base_vartime(
    c: &Scalar,
    p: &CompressedPoint,
    r: &Scalar,
) -> Result<Point> {
    let point = p.decompress().ok_or(Error::InvalidPoint)?;
    Ok(Point::vartime_double_scalar_mul_basepoint(c, &point, r))
}

/// Returns `r * H_p(P) + c * I`
///
/// Variable time, used on the commitment side of ring signatures where every
/// operand is public.
pub fn double_scalarmult_precomp_vartime(
    r: &Scalar,
    p: &CompressedPoint,
    c: &Scalar,
    image: &CompressedPoint,
) -> Result<Point> {
    let hp = hash_to_point(p.as_bytes())?;
    let image = image.decompress().ok_or(Error::InvalidPoint)?;
    Ok(Point::vartime_multiscalar_mul(&[*r, *c], &[hp, image]))
}
