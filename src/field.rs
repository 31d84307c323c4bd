//! Finite fields.
//!
//! This module exposes the binary field GF(2^191) implemented in
//! `backend`, and the parsing of hexadecimal exponents for
//! `GFb191::power()`.

pub use crate::backend::GFb191;

/// Field element of GF(2^191); alias of `GFb191`.
pub type FieldElement = GFb191;

#[cfg(feature = "alloc")]
use crate::{Error, Vec, strip_hex_prefix};

/// Parse a hexadecimal unsigned integer of arbitrary size (optional `0x`
/// prefix) into its unsigned little-endian byte encoding, suitable as
/// exponent for `GFb191::power()`.
#[cfg(feature = "alloc")]
pub fn parse_hex_le(s: &str) -> Result<Vec<u8>, Error> {
    let s = strip_hex_prefix(s);
    if s.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut r = Vec::with_capacity((s.len() + 1) >> 1);
    let mut acc = 0u8;
    let mut half = false;
    for c in s.chars().rev() {
        let d = c.to_digit(16).ok_or(Error::InvalidHexDigit(c))? as u8;
        if half {
            r.push(acc | (d << 4));
        } else {
            acc = d;
        }
        half = !half;
    }
    if half {
        r.push(acc);
    }
    Ok(r)
}
