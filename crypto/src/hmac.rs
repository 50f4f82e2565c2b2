//! HMAC-SHA1 (RFC 2104), used for TOTP computation on the wallet side

use ::hmac::{Hmac, Mac};
use ::sha1::Sha1;

/// Computes `HMAC-SHA1(key, data)`
///
/// Any key length is accepted: keys longer than the SHA-1 block size are
/// hashed down first per the HMAC construction.
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> [u8; 20] {
    let mut mac = Hmac::<Sha1>::new_varkey(key).expect("HMAC accepts keys of any length");
    mac.input(data);

    let mut output = [0u8; 20];
    output.copy_from_slice(&mac.result().code());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 2202 test case 1
    #[test]
    fn matches_rfc_2202() {
        assert_eq!(
            hex::encode(hmac_sha1(&[0x0b; 20], b"Hi There")),
            "b617318655057264e28bc0b6fb378c8ef146be00"
        );
    }

    // RFC 2202 test case 2: a key shorter than the block size
    #[test]
    fn accepts_short_keys() {
        assert_eq!(
            hex::encode(hmac_sha1(b"Jefe", b"what do ya want for nothing?")),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn matches_the_classic_fox_vector() {
        assert_eq!(
            hex::encode(hmac_sha1(
                b"key",
                b"The quick brown fox jumps over the lazy dog"
            )),
            "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
        );
    }

    #[test]
    fn distinct_keys_produce_distinct_tags() {
        assert_ne!(hmac_sha1(b"key1", b"data"), hmac_sha1(b"key2", b"data"));
    }
}
