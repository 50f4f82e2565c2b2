/// Type alias for crypto operations that may result in an error
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all primitive operations
///
/// Validation failures are always surfaced to the caller. In particular an
/// invalid point is never coerced to the identity.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a hex string fails to decode
    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),

    /// Returned when a byte buffer has the wrong length for its type
    #[error("Expected a {expected} byte value, got {got} bytes")]
    InvalidLength { expected: usize, got: usize },

    /// Returned when a compressed encoding does not decode to a curve point
    #[error("Value does not decode to a point on the curve")]
    InvalidPoint,

    /// Returned when a secret key does not match the claimed public key or
    /// key image
    #[error("Secret key does not correspond to the given public key")]
    InvalidSecretKey,

    /// Returned when the secret index points outside the ring
    #[error("Secret index {index} is out of range for a ring of {ring_size}")]
    IndexOutOfRange { index: usize, ring_size: usize },

    /// Returned when a ring signature is requested over no public keys
    #[error("Ring contains no public keys")]
    EmptyRing,

    /// Returned when a numeric argument is outside its accepted domain
    #[error("Value is outside the accepted range")]
    OutOfRange,

    /// Returned when a stream cipher key is not exactly 32 bytes
    #[error("Stream cipher key must be exactly 32 bytes")]
    InvalidKeyLength,

    /// Returned when a stream cipher IV is not exactly 8 bytes
    #[error("Stream cipher IV must be exactly 8 bytes")]
    InvalidIvLength,

    /// Returned when the hash-to-point map fails to terminate
    ///
    /// This cannot happen for any valid input and indicates a broken
    /// invariant rather than a recoverable condition.
    #[error("Hash-to-point failed to produce a valid curve point")]
    HashToCurveFailure,
}
