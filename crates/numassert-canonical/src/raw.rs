use std::fmt;

use alloy_primitives::{I256, U256};
use num_bigint::BigInt;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// The closed set of recognized big-integer representations.
///
/// Adding a representation means adding a variant here; normalization matches
/// exhaustively so nothing falls through unnoticed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigIntLike {
    /// Arbitrary-precision signed integer.
    BigInt(BigInt),
    /// 256-bit unsigned machine word.
    Word(U256),
    /// 256-bit two's complement signed word.
    SignedWord(I256),
}

impl BigIntLike {
    /// Stable tag used in diagnostics and serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            BigIntLike::BigInt(_) => "bigint",
            BigIntLike::Word(_) => "u256",
            BigIntLike::SignedWord(_) => "i256",
        }
    }
}

impl fmt::Display for BigIntLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntLike::BigInt(v) => write!(f, "{v}"),
            BigIntLike::Word(v) => write!(f, "{v}"),
            BigIntLike::SignedWord(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for BigIntLike {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BigIntLike", 2)?;
        state.serialize_field("t", self.kind())?;
        state.serialize_field("v", &self.to_string())?;
        state.end()
    }
}

impl From<BigInt> for BigIntLike {
    fn from(value: BigInt) -> Self {
        BigIntLike::BigInt(value)
    }
}

impl From<U256> for BigIntLike {
    fn from(value: U256) -> Self {
        BigIntLike::Word(value)
    }
}

impl From<I256> for BigIntLike {
    fn from(value: I256) -> Self {
        BigIntLike::SignedWord(value)
    }
}

/// A numeric operand as it arrives from the host, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawNumeric<'a> {
    /// The host's native number.
    Native(f64),
    /// One of the recognized big-integer representations.
    Big(&'a BigIntLike),
    /// An integer string.
    Text(&'a str),
}

impl RawNumeric<'_> {
    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawNumeric::Native(_) => "number",
            RawNumeric::Big(big) => big.kind(),
            RawNumeric::Text(_) => "string",
        }
    }
}

impl<'a> From<&'a BigIntLike> for RawNumeric<'a> {
    fn from(value: &'a BigIntLike) -> Self {
        RawNumeric::Big(value)
    }
}

impl<'a> From<&'a str> for RawNumeric<'a> {
    fn from(value: &'a str) -> Self {
        RawNumeric::Text(value)
    }
}

impl From<f64> for RawNumeric<'_> {
    fn from(value: f64) -> Self {
        RawNumeric::Native(value)
    }
}

/// True only for big-integer representations.
///
/// Native numbers and strings are valid comparison partners but never force
/// big-integer comparison on their own.
pub fn is_big_integer_like(value: &RawNumeric<'_>) -> bool {
    matches!(value, RawNumeric::Big(_))
}
