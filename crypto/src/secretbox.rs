//! NaCl-compatible authenticated symmetric encryption (`crypto_secretbox`)
//!
//! Layout fixed here: XSalsa20 stream under a 24 byte nonce, with the 16
//! byte Poly1305 tag prepended to the ciphertext. The Poly1305 one-time key
//! is the first 32 keystream bytes and the message stream starts at
//! keystream offset 32, exactly as in NaCl and libsodium, so boxes are
//! interoperable with both.

use clear_on_drop::clear::Clear;
use poly1305::universal_hash::KeyInit;
use poly1305::Poly1305;
use salsa20::cipher::{KeyIvInit, StreamCipher};
use salsa20::XSalsa20;
use subtle::ConstantTimeEq;

/// Nonces are 192 bits, wide enough to draw at random per box
pub const SECRETBOX_NONCE_SIZE: usize = 24;
/// The Poly1305 authenticator tag prepended to every box
pub const SECRETBOX_MAC_SIZE: usize = 16;

// The stream is applied over 32 zero bytes followed by the message; the
// zero prefix becomes the one-time authenticator key
fn keystream_buffer(message: &[u8], nonce: &[u8; 24], key: &[u8; 32]) -> Vec<u8> {
    let mut buffer = vec![0u8; 32 + message.len()];
    buffer[32..].copy_from_slice(message);

    let mut cipher = XSalsa20::new(key.into(), nonce.into());
    cipher.apply_keystream(&mut buffer);

    buffer
}

/// Encrypts and authenticates `message`, returning `tag || ciphertext`
///
/// The output is exactly `SECRETBOX_MAC_SIZE` bytes longer than the input.
/// The nonce must never be reused with the same key.
pub fn secretbox(message: &[u8], nonce: &[u8; 24], key: &[u8; 32]) -> Vec<u8> {
    let mut buffer = keystream_buffer(message, nonce, key);

    let tag = Poly1305::new(poly1305::Key::from_slice(&buffer[..32]))
        .compute_unpadded(&buffer[32..]);

    let mut boxed = Vec::with_capacity(SECRETBOX_MAC_SIZE + message.len());
    boxed.extend_from_slice(tag.as_slice());
    boxed.extend_from_slice(&buffer[32..]);

    Clear::clear(buffer.as_mut_slice());
    boxed
}

/// Opens a box produced by [`secretbox`]
///
/// Returns `None` when the authenticator does not match; this is an expected
/// outcome for callers to check, not an error. Inputs shorter than a tag can
/// never authenticate and also yield `None`.
pub fn secretbox_open(boxed: &[u8], nonce: &[u8; 24], key: &[u8; 32]) -> Option<Vec<u8>> {
    if boxed.len() < SECRETBOX_MAC_SIZE {
        return None;
    }
    let (tag, ciphertext) = boxed.split_at(SECRETBOX_MAC_SIZE);

    let mut auth_key = [0u8; 32];
    let mut cipher = XSalsa20::new(key.into(), nonce.into());
    cipher.apply_keystream(&mut auth_key);

    let expected = Poly1305::new(poly1305::Key::from_slice(&auth_key)).compute_unpadded(ciphertext);
    auth_key.clear();

    if expected.as_slice().ct_eq(tag).unwrap_u8() != 1 {
        return None;
    }

    // Authenticated: strip the keystream, skipping the authenticator block
    let mut buffer = vec![0u8; 32 + ciphertext.len()];
    buffer[32..].copy_from_slice(ciphertext);
    let mut cipher = XSalsa20::new(key.into(), nonce.into());
    cipher.apply_keystream(&mut buffer);

    let message = buffer[32..].to_vec();
    Clear::clear(buffer.as_mut_slice());

    Some(message)
}
