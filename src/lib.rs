//! Gf191 is a Rust library for arithmetic in the binary field GF(2^191).
//!
//! The field is defined by the fixed irreducible trinomial
//! z^191 + z^9 + 1, and elements use the polynomial basis: an element is
//! a binary polynomial of degree at most 190, stored as a 191-bit value
//! (bit `i` is the coefficient of `z^i`). The field type is `GFb191`
//! (also named `FieldElement`), in the `field` module; it is a small
//! `Copy` value type, and all operations return new values.
//!
//! Field elements may be used in straightforward expressions with normal
//! arithmetic operators (`+`, `-`, `*`, `/`). Squaring, inversion,
//! exponentiation, square roots, traces, byte encoding and the canonical
//! hexadecimal text form are provided as methods; see the `backend`
//! module documentation for the complete list.
//!
//! # Usage
//!
//! The library is `no_std`. By default, it compiles against the standard
//! library (feature `std`), which adds an implementation of
//! `std::error::Error` for the error type, and the `gf191` demonstration
//! program. Feature `alloc` (implied by `std`) enables the parsing of
//! hexadecimal exponents into a `Vec<u8>`.
//!
//! # Conventions
//!
//! Functions are meant to be constant-time, unless explicitly documented
//! otherwise: the Euclidean inversion `inverse()`, the hexadecimal
//! parsing and formatting functions, and the byte length of exponents
//! and of inputs to `decode_reduce()` may leak through timing. Functions
//! that return a potentially secret Boolean value use the `u32` type;
//! the convention is that 0xFFFFFFFF means "true", and 0x00000000 means
//! "false". Functions that modify the object on which they are called
//! have a name in `set_*()` (e.g. `x.set_square()` squares `x` in place,
//! while `x.square()` leaves `x` unmodified and returns the square as a
//! new instance).
//!
//! The only error is `Error::DivisionByZero`, returned by `inverse()` on
//! the zero element, together with the parsing errors of the
//! hexadecimal functions.

#![no_std]

#[cfg(all(feature = "alloc", not(feature = "std")))]
#[cfg_attr(test, macro_use)]
extern crate alloc;

#[cfg(feature = "std")]
#[cfg_attr(test, macro_use)]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
pub(crate) use alloc::vec::Vec;

#[cfg(feature = "std")]
pub(crate) use std::vec::Vec;

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

mod error;
pub use error::Error;

pub mod backend;
pub mod field;

// Remove an optional "0x" or "0X" prefix from a hexadecimal string.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}
