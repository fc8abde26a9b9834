use std::fmt;
use std::ops::{Add, Sub};

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::errors::UnsupportedTypeError;
use crate::validation::{is_decimal_integer, is_hex_integer};

/// Largest integer a native (`f64`) number represents without loss: `2^53 - 1`.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Arbitrary-precision signed integer with exact equality and total ordering.
///
/// Serializes as its decimal string (`"-42"`), never as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalInt(BigInt);

impl CanonicalInt {
    /// Parses an optionally signed decimal integer string.
    pub fn from_decimal_str(value: &str) -> Result<Self, UnsupportedTypeError> {
        if !is_decimal_integer(value) {
            return Err(UnsupportedTypeError::Malformed {
                value: value.to_string(),
            });
        }
        let (negative, digits) = split_sign(value);
        parse_digits(value, negative, digits, 10)
    }

    /// Parses a `0x`-prefixed hex integer string, optionally negative.
    pub fn from_hex_str(value: &str) -> Result<Self, UnsupportedTypeError> {
        if !is_hex_integer(value) {
            return Err(UnsupportedTypeError::Malformed {
                value: value.to_string(),
            });
        }
        let (negative, rest) = split_sign(value);
        parse_digits(value, negative, &rest[2..], 16)
    }

    /// Converts a native number holding an integral value.
    ///
    /// The conversion is exact for every finite integral `f64`, including
    /// those outside the safe range; range policy is the caller's concern.
    pub fn from_f64_exact(value: f64) -> Result<Self, UnsupportedTypeError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(UnsupportedTypeError::NotInteger { value });
        }
        BigInt::from_f64(value)
            .map(Self)
            .ok_or(UnsupportedTypeError::NotInteger { value })
    }

    /// Returns the value as a native number if it lies within `±MAX_SAFE_INTEGER`.
    pub fn to_safe_f64(&self) -> Option<f64> {
        if !self.is_safe() {
            return None;
        }
        self.0.to_i64().map(|v| v as f64)
    }

    /// Returns true when the value is exactly representable as a native number.
    pub fn is_safe(&self) -> bool {
        self.0.abs() <= BigInt::from(MAX_SAFE_INTEGER)
    }

    /// Absolute distance `|self - other|`.
    pub fn abs_diff(&self, other: &CanonicalInt) -> CanonicalInt {
        CanonicalInt((&self.0 - &other.0).abs())
    }

    /// Returns true for values below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Borrows the underlying big integer.
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Consumes the value, returning the underlying big integer.
    pub fn into_bigint(self) -> BigInt {
        self.0
    }
}

fn split_sign(value: &str) -> (bool, &str) {
    if let Some(rest) = value.strip_prefix('-') {
        (true, rest)
    } else {
        (false, value.strip_prefix('+').unwrap_or(value))
    }
}

fn parse_digits(
    original: &str,
    negative: bool,
    digits: &str,
    radix: u32,
) -> Result<CanonicalInt, UnsupportedTypeError> {
    let magnitude =
        BigInt::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
            UnsupportedTypeError::Malformed {
                value: original.to_string(),
            }
        })?;
    Ok(CanonicalInt(if negative { -magnitude } else { magnitude }))
}

impl fmt::Display for CanonicalInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BigInt> for CanonicalInt {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i64> for CanonicalInt {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<CanonicalInt> for String {
    fn from(value: CanonicalInt) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CanonicalInt {
    type Error = UnsupportedTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_decimal_str(&value)
    }
}

impl Add for &CanonicalInt {
    type Output = CanonicalInt;

    fn add(self, rhs: &CanonicalInt) -> CanonicalInt {
        CanonicalInt(&self.0 + &rhs.0)
    }
}

impl Sub for &CanonicalInt {
    type Output = CanonicalInt;

    fn sub(self, rhs: &CanonicalInt) -> CanonicalInt {
        CanonicalInt(&self.0 - &rhs.0)
    }
}
