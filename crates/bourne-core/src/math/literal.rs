// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Decimal Literal Parsing
//!
//! Turns the text of a decimal literal into an exact [`Ratio`] during
//! constant evaluation. The accepted grammar is the one `stringify!`
//! produces for Rust numeric literals:
//!
//! ```text
//! literal  := ws* sign? ws* digits ( '.' digits? )? exponent? ws*
//!           | ws* sign? ws* '.' digits exponent? ws*
//! sign     := '+' | '-'
//! digits   := [0-9] ( [0-9] | '_' )*
//! exponent := ( 'e' | 'E' ) sign? digits
//! ```
//!
//! The fractional digits scale the denominator by ten each, so `0.55`
//! parses to `55/100` before reduction to `11/20`.

use crate::math::ratio::Ratio;

/// Reasons a decimal literal cannot be turned into a [`Ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseRatioError {
    /// The input contains no characters other than whitespace.
    Empty,
    /// An unexpected character at the given byte offset.
    InvalidDigit { position: usize },
    /// Neither the integer nor the fractional part contains a digit.
    MissingDigits,
    /// An exponent marker without any exponent digits.
    InvalidExponent,
    /// The exact value does not fit an `i128` fraction.
    Overflow,
}

impl std::fmt::Display for ParseRatioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseRatioError::Empty => write!(f, "cannot parse a ratio from an empty literal"),
            ParseRatioError::InvalidDigit { position } => {
                write!(f, "invalid character in decimal literal at byte {}", position)
            }
            ParseRatioError::MissingDigits => write!(f, "decimal literal has no digits"),
            ParseRatioError::InvalidExponent => write!(f, "decimal exponent has no digits"),
            ParseRatioError::Overflow => {
                write!(f, "decimal literal does not fit an i128 fraction")
            }
        }
    }
}

impl std::error::Error for ParseRatioError {}

macro_rules! ok_or_overflow {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return Err(ParseRatioError::Overflow),
        }
    };
}

#[inline(always)]
const fn is_space(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}

#[inline(always)]
const fn skip_spaces(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    i
}

/// Parses a decimal literal into an exact, reduced [`Ratio`].
///
/// # Examples
///
/// ```rust
/// # use bourne_core::math::literal::{try_parse_decimal, ParseRatioError};
/// # use bourne_core::math::ratio::Ratio;
///
/// assert_eq!(try_parse_decimal("-20000."), Ok(Ratio::from_integer(-20000)));
/// assert_eq!(try_parse_decimal("1.5e-3"), Ok(Ratio::new(3, 2000)));
/// assert_eq!(try_parse_decimal("1.2.3"), Err(ParseRatioError::InvalidDigit { position: 3 }));
/// ```
pub const fn try_parse_decimal(s: &str) -> Result<Ratio, ParseRatioError> {
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut i = skip_spaces(bytes, 0);
    if i == len {
        return Err(ParseRatioError::Empty);
    }

    let mut negative = false;
    if bytes[i] == b'-' || bytes[i] == b'+' {
        negative = bytes[i] == b'-';
        i = skip_spaces(bytes, i + 1);
    }

    let mut numer: i128 = 0;
    let mut denom: i128 = 1;
    let mut digits = 0usize;
    let mut seen_point = false;
    while i < len {
        let b = bytes[i];
        if b.is_ascii_digit() {
            numer = ok_or_overflow!(numer.checked_mul(10));
            numer = ok_or_overflow!(numer.checked_add((b - b'0') as i128));
            if seen_point {
                denom = ok_or_overflow!(denom.checked_mul(10));
            }
            digits += 1;
        } else if b == b'_' && digits > 0 {
            // digit separator
        } else if b == b'.' && !seen_point {
            seen_point = true;
        } else {
            break;
        }
        i += 1;
    }
    if digits == 0 {
        return Err(ParseRatioError::MissingDigits);
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        let mut exp_negative = false;
        if i < len && (bytes[i] == b'-' || bytes[i] == b'+') {
            exp_negative = bytes[i] == b'-';
            i += 1;
        }
        let mut exp: u32 = 0;
        let mut exp_digits = 0usize;
        while i < len {
            let b = bytes[i];
            if b.is_ascii_digit() {
                exp = ok_or_overflow!(exp.checked_mul(10));
                exp = ok_or_overflow!(exp.checked_add((b - b'0') as u32));
                exp_digits += 1;
            } else if !(b == b'_' && exp_digits > 0) {
                break;
            }
            i += 1;
        }
        if exp_digits == 0 {
            return Err(ParseRatioError::InvalidExponent);
        }
        let scale = ok_or_overflow!(10i128.checked_pow(exp));
        if exp_negative {
            denom = ok_or_overflow!(denom.checked_mul(scale));
        } else {
            numer = ok_or_overflow!(numer.checked_mul(scale));
        }
    }

    i = skip_spaces(bytes, i);
    if i != len {
        return Err(ParseRatioError::InvalidDigit { position: i });
    }

    if negative {
        numer = -numer;
    }
    match Ratio::try_new(numer, denom) {
        Some(r) => Ok(r),
        None => Err(ParseRatioError::Overflow),
    }
}

/// Parses a decimal literal, panicking on malformed input.
///
/// Intended for constant evaluation, where the panic becomes a build error.
///
/// # Panics
///
/// Panics if [`try_parse_decimal`] returns an error.
///
/// # Examples
///
/// ```rust
/// # use bourne_core::math::literal::parse_decimal;
/// # use bourne_core::math::ratio::Ratio;
///
/// const POSITIVE_MIN: Ratio = parse_decimal("0.55");
/// assert_eq!(POSITIVE_MIN, Ratio::new(11, 20));
/// ```
pub const fn parse_decimal(s: &str) -> Ratio {
    match try_parse_decimal(s) {
        Ok(r) => r,
        Err(ParseRatioError::Empty) => panic!("cannot parse a ratio from an empty literal"),
        Err(ParseRatioError::InvalidDigit { .. }) => {
            panic!("invalid character in decimal literal")
        }
        Err(ParseRatioError::MissingDigits) => panic!("decimal literal has no digits"),
        Err(ParseRatioError::InvalidExponent) => panic!("decimal exponent has no digits"),
        Err(ParseRatioError::Overflow) => {
            panic!("decimal literal does not fit an i128 fraction")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(parse_decimal("0"), Ratio::ZERO);
        assert_eq!(parse_decimal("42"), Ratio::from_integer(42));
        assert_eq!(parse_decimal("-20000"), Ratio::from_integer(-20000));
        assert_eq!(parse_decimal("+7"), Ratio::from_integer(7));
        assert_eq!(parse_decimal("20_000"), Ratio::from_integer(20000));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(parse_decimal("0.55"), Ratio::new(11, 20));
        assert_eq!(parse_decimal("5.5"), Ratio::new(11, 2));
        assert_eq!(parse_decimal("20000."), Ratio::from_integer(20000));
        assert_eq!(parse_decimal(".5"), Ratio::new(1, 2));
        assert_eq!(parse_decimal("0.500"), Ratio::new(1, 2));
    }

    #[test]
    fn test_stringify_spacing() {
        // `stringify!(-5.5)` may put a space between the sign and the digits.
        assert_eq!(parse_decimal("- 5.5"), Ratio::new(-11, 2));
        assert_eq!(parse_decimal("  3.5 "), Ratio::new(7, 2));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_decimal("1e3"), Ratio::from_integer(1000));
        assert_eq!(parse_decimal("2.5E+2"), Ratio::from_integer(250));
        assert_eq!(parse_decimal("25e-3"), Ratio::new(1, 40));
        assert_eq!(
            try_parse_decimal("1e"),
            Err(ParseRatioError::InvalidExponent)
        );
        assert_eq!(try_parse_decimal("1e99"), Err(ParseRatioError::Overflow));
        assert_eq!(parse_decimal("1e1_0"), Ratio::from_integer(10_000_000_000));
        assert_eq!(
            try_parse_decimal("1e_5"),
            Err(ParseRatioError::InvalidExponent)
        );
        assert_eq!(
            try_parse_decimal("1e-_5"),
            Err(ParseRatioError::InvalidExponent)
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(try_parse_decimal(""), Err(ParseRatioError::Empty));
        assert_eq!(try_parse_decimal("   "), Err(ParseRatioError::Empty));
        assert_eq!(try_parse_decimal("-"), Err(ParseRatioError::MissingDigits));
        assert_eq!(try_parse_decimal("."), Err(ParseRatioError::MissingDigits));
        assert_eq!(try_parse_decimal("_1"), Err(ParseRatioError::MissingDigits));
        assert_eq!(
            try_parse_decimal("5.5f64"),
            Err(ParseRatioError::InvalidDigit { position: 3 })
        );
        assert_eq!(
            try_parse_decimal("123456789012345678901234567890123456789012"),
            Err(ParseRatioError::Overflow)
        );
    }

    #[test]
    fn test_repeated_parse_is_identical() {
        for literal in ["0.55", "-19999.45", "3.14159", "1e-9", "40000"] {
            let first = parse_decimal(literal);
            let second = parse_decimal(literal);
            assert_eq!(first, second);
            assert_eq!(first.numer(), second.numer());
            assert_eq!(first.denom(), second.denom());
        }
    }

    #[test]
    fn test_round_trip_through_f64() {
        for literal in [
            "0.55",
            "-19999.45",
            "3.14159",
            "1e-9",
            "40000",
            "0.1",
            "-0.7",
            "0.83873806956042304114426",
            "-1234567890.12345678901234567",
        ] {
            let expected: f64 = literal.parse().unwrap();
            assert_eq!(parse_decimal(literal).to_f64(), expected, "literal {literal}");
        }
    }

    #[test]
    #[should_panic(expected = "decimal literal has no digits")]
    fn test_parse_decimal_panics() {
        parse_decimal("-.");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseRatioError::InvalidDigit { position: 2 }.to_string(),
            "invalid character in decimal literal at byte 2"
        );
    }
}
