//! Hex conversion at the API edge
//!
//! Everything internal works on byte buffers; these helpers are the only
//! place hex strings are produced or consumed.

use crate::error::Result;

/// Decodes a hex string into bytes
///
/// Upper and lower case are both accepted. Odd lengths and non-hex
/// characters surface as `Error::InvalidHex`.
pub fn hex_to_bin(data: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(data)?)
}

/// Encodes bytes as a lowercase hex string
pub fn bin_to_hex(data: &[u8]) -> String {
    hex::encode(data)
}
