//! Reduced-round ChaCha keystream generation
//!
//! CryptoNote wallets encrypt with ChaCha8 or ChaCha12 keyed by a 256-bit
//! key and a 64-bit IV, the original djb layout with a 64-bit block counter
//! starting at zero. Output is the keystream XORed over the input, so
//! applying the same call twice recovers the original data.

use c2_chacha::stream_cipher::{NewStreamCipher, SyncStreamCipher};
use c2_chacha::{ChaCha12, ChaCha8};

use crate::error::{Error, Result};

/// Stream cipher keys are 256 bits
pub const CHACHA_KEY_SIZE: usize = 32;
/// Stream cipher IVs are 64 bits
pub const CHACHA_IV_SIZE: usize = 8;

fn keystream_xor<C: NewStreamCipher + SyncStreamCipher>(
    input: &[u8],
    key: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>> {
    if key.len() != CHACHA_KEY_SIZE {
        return Err(Error::InvalidKeyLength);
    }
    if iv.len() != CHACHA_IV_SIZE {
        return Err(Error::InvalidIvLength);
    }

    let mut cipher = C::new_var(key, iv).map_err(|_| Error::InvalidKeyLength)?;
    let mut output = input.to_vec();
    cipher.apply_keystream(&mut output);

    Ok(output)
}

/// Applies the ChaCha8 keystream for the given key and IV over `input`
pub fn chacha8(input: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    keystream_xor::<ChaCha8>(input, key, iv)
}

/// Applies the ChaCha12 keystream for the given key and IV over `input`
pub fn chacha12(input: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    keystream_xor::<ChaCha12>(input, key, iv)
}
