//! Implementation of the binary field GF(2^191).
//!
//! This module provides a type alias for the structure that implements
//! the field. The field is defined with the fixed irreducible trinomial
//! z^191 + z^9 + 1, and elements use a polynomial basis representation
//! over three 64-bit limbs.
//!
//! The following properties apply to the field implementation:
//!
//!  - An instance encapsulates a field element, always fully reduced
//!    (degree at most 190). `Eq` and `PartialEq` compare the values.
//!
//!  - The constant values `Self::ZERO` and `Self::ONE` contain the
//!    elements of value 0 and 1, respectively; `zero()` and `one()`
//!    return the same values.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, `/`, and the compound assignments `+=`, `-=`, `*=` and `/=`).
//!    Addition and subtraction are the same operation (XOR), and negation
//!    is the identity. Division by zero is tolerated through the `/`
//!    operator, and yields zero (regardless of the dividend); the checked
//!    inversion is `inverse()`, which reports `Error::DivisionByZero`.
//!    Operators can use both the raw types, and references thereof.
//!
//!  - Function `set_square(&mut self)` squares a field element (in place).
//!    Corresponding function `square(self) -> Self` returns the result
//!    as a new instance. Sequences of multiple squarings can be performed
//!    with `set_xsquare(&mut self, n: u32)` (and a corresponding `xsquare()`
//!    to get the result as a new instance).
//!
//!  - Function `inverse(self) -> Result<Self, Error>` inverts with the
//!    extended Euclidean algorithm (variable-time); `invert(self) -> Self`
//!    computes the same value in constant time (zero maps to zero).
//!
//!  - Function `power(self, e: &[u8]) -> Self` raises an element to an
//!    unsigned integer exponent of arbitrary length, encoded in unsigned
//!    little-endian convention. The empty slice is the exponent 0, and
//!    anything raised to the power 0 is one (including zero).
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets
//!    the instance to the value of the other instance `a` if `ctl` is
//!    equal to 0xFFFFFFFF, or leaves the instance value unmodified if
//!    `ctl` is equal to 0x00000000. `select()` and `cswap()` are the
//!    corresponding selection and conditional swap.
//!
//!  - Constant values can be defined with the const-qualified `w64le()`
//!    and `w64be()` functions, which take the value as three 64-bit limbs
//!    in little-endian and big-endian order, respectively. Conversions
//!    from `u64` and `u128` use `from_u64()` and `from_u128()`. All these
//!    silently truncate the value to its low 191 bits.
//!
//!  - Function `random()` samples an element uniformly, using a
//!    caller-provided random source (`CryptoRng + RngCore`).
//!
//!  - Function `equals(self, rhs: Self) -> u32` returns 0xFFFFFFFF
//!    if `self` and `rhs` represent the same value, or 0x00000000
//!    otherwise. Function `iszero(self) -> u32` is a specialized
//!    subcase that compares `self` with zero.
//!
//!  - Functions `sqrt()`, `trace()` and `halftrace()` compute the (unique)
//!    square root, the absolute trace (0 or 1), and the halftrace.
//!
//!  - Function `encode(self) -> [u8; 24]` encodes an element as exactly
//!    24 bytes (unsigned little-endian). `decode()` and `decode_ct()`
//!    reverse it, and reject inputs of the wrong length or with bit 191
//!    set. `decode_reduce()` accepts any length and reduces modulo the
//!    field polynomial.
//!
//!  - Function `to_canonical_hex(self) -> [u8; 48]` returns the text
//!    form: 48 uppercase hexadecimal digits, zero-padded, no prefix. The
//!    `Display` and `UpperHex` implementations write the same text.
//!    `from_hex()` (and `FromStr`) parse hexadecimal strings strictly:
//!    values of 2^191 or more are rejected.

pub mod w64;

/// Finite field: GF(2^191), with modulus z^191 + z^9 + 1.
pub type GFb191 = w64::gfb191::GFb191;
