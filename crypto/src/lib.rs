//! Cryptographic primitives for a CryptoNote wallet core
//!
//! The heart of the crate is the Ed25519-group toolkit ([`ecc`]) together
//! with the Keccak-based `cn_fast_hash` ([`hash`]), one-time key derivation
//! ([`derivation`]) and traceable ring signatures ([`ring_signature`]). The
//! symmetric side carries the wallet-facing primitives: reduced-round ChaCha
//! ([`chacha`]), HMAC-SHA1 ([`hmac`]), a NaCl-style authenticated box
//! ([`secretbox`]) and CSPRNG helpers ([`random`]).
//!
//! All operations are pure and synchronous; the only ambient resource is
//! the OS entropy source, and every randomness-consuming operation also
//! accepts an injected CSPRNG. Inputs are copied, never aliased, so the
//! whole crate is freely callable across threads.

#[macro_use]
extern crate arrayref;

pub mod chacha;
pub mod codec;
pub mod derivation;
pub mod ecc;
pub mod error;
pub mod hash;
pub mod hmac;
pub mod keys;
pub mod random;
pub mod ring_signature;
pub mod secretbox;

pub use digest::Digest;

pub use crate::codec::{bin_to_hex, hex_to_bin};
pub use crate::error::{Error, Result};
pub use crate::hash::{cn_fast_hash, CNFastHash, Hash256, Hash256Data};
pub use crate::keys::{KeyImage, KeyPair, PublicKey, SecretKey};

pub use crate::ecc::ScalarExt;
