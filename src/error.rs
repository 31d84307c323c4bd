use core::fmt;

/// Errors reported by the field operations.
///
/// Only `inverse()` (on a zero element) and the hexadecimal parsers can
/// fail; all other field operations are total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Inversion of the zero element.
    DivisionByZero,

    /// A character which is not a hexadecimal digit.
    InvalidHexDigit(char),

    /// No digits at all (possibly after the `0x` prefix).
    EmptyInput,

    /// The parsed value does not fit on 191 bits.
    ValueTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero =>
                f.write_str("the zero element has no inverse"),
            Error::InvalidHexDigit(c) =>
                write!(f, "invalid hexadecimal digit: {:?}", c),
            Error::EmptyInput =>
                f.write_str("empty hexadecimal value"),
            Error::ValueTooLarge =>
                f.write_str("value exceeds 191 bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error { }
