//! LEB128-style varint codec used throughout the CryptoNote wire formats
//!
//! Values are split into 7-bit groups, least significant group first. The
//! high bit of every byte is set while more bytes follow, so values below
//! 128 occupy a single byte and a `u64` never needs more than ten.

/// Encodes an unsigned integer as a varint
///
/// Every value a `u64` can hold has a valid encoding, so this cannot fail.
pub fn encode(mut value: u64) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(10);

    while value > 0x7f {
        encoded.push(0x80 | (value as u8 & 0x7f));
        value >>= 7;
    }
    encoded.push(value as u8);

    encoded
}

/// Decodes a varint from the start of the given slice
///
/// Returns the decoded value and the number of bytes consumed, or `None` if
/// the slice ends mid-varint or the encoding overflows 64 bits.
pub fn decode(bytes: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;

    for (i, byte) in bytes.iter().enumerate() {
        let shift = 7 * i as u32;
        let group = u64::from(byte & 0x7f);

        // The tenth byte may only carry the single remaining bit
        if shift >= 64 || group.checked_shl(shift)? >> shift != group {
            return None;
        }
        value |= group << shift;

        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reference_values() {
        assert_eq!(hex::encode(encode(0)), "00");
        assert_eq!(hex::encode(encode(127)), "7f");
        assert_eq!(hex::encode(encode(128)), "8001");
        assert_eq!(hex::encode(encode(1000)), "e807");
        assert_eq!(hex::encode(encode(100_000)), "a08d06");
        assert_eq!(
            hex::encode(encode(u64::max_value())),
            "ffffffffffffffffff01"
        );
    }

    #[test]
    fn round_trips() {
        for &value in &[0, 1, 127, 128, 300, 1000, 100_000, u64::max_value()] {
            let encoded = encode(value);
            assert_eq!(decode(&encoded), Some((value, encoded.len())));
        }
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        assert_eq!(decode(&[0xe8, 0x07, 0xff, 0xff]), Some((1000, 2)));
    }

    #[test]
    fn decode_rejects_truncated_input() {
        assert_eq!(decode(&[]), None);
        assert_eq!(decode(&[0x80]), None);
        assert_eq!(decode(&[0xff, 0xff]), None);
    }

    #[test]
    fn decode_rejects_overflow() {
        // Eleven continuation groups cannot fit in 64 bits
        assert_eq!(
            decode(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]),
            None
        );
    }
}
