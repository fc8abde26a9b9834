use std::collections::BTreeMap;
use std::fmt;

use numassert_canonical::{
    BigInt, BigIntLike, CanonicalInt, RawNumeric, UnsupportedTypeError, I256, U256,
};
use serde::Serialize;

/// A dynamically typed value: assertion subjects, arguments, and diagnostic payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Native number.
    Number(f64),
    /// Text.
    Str(String),
    /// Ordered collection.
    List(Vec<Value>),
    /// String-keyed mapping.
    Map(BTreeMap<String, Value>),
    /// Big-integer value in one of the recognized representations.
    Big(BigIntLike),
}

impl Value {
    /// Type name used in messages and errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Big(big) => big.kind(),
        }
    }

    /// Item count for values that have one.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// True for the big-integer representations only.
    pub fn is_big_integer_like(&self) -> bool {
        matches!(self, Value::Big(_))
    }

    /// Views the value as a raw numeric operand.
    pub fn as_raw_numeric(&self) -> Result<RawNumeric<'_>, UnsupportedTypeError> {
        match self {
            Value::Number(n) => Ok(RawNumeric::Native(*n)),
            Value::Str(s) => Ok(RawNumeric::Text(s)),
            Value::Big(big) => Ok(RawNumeric::Big(big)),
            other => Err(UnsupportedTypeError::Type {
                type_name: other.type_name(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "'{s}'"),
            Value::List(items) if items.is_empty() => write!(f, "[]"),
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[ {} ]", rendered.join(", "))
            }
            Value::Map(entries) if entries.is_empty() => write!(f, "{{}}"),
            Value::Map(entries) => {
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                write!(f, "{{ {} }}", rendered.join(", "))
            }
            Value::Big(big) => write!(f, "{}({})", big.kind(), big),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

impl From<BigIntLike> for Value {
    fn from(value: BigIntLike) -> Self {
        Value::Big(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Big(BigIntLike::BigInt(value))
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Value::Big(BigIntLike::Word(value))
    }
}

impl From<I256> for Value {
    fn from(value: I256) -> Self {
        Value::Big(BigIntLike::SignedWord(value))
    }
}

impl From<CanonicalInt> for Value {
    fn from(value: CanonicalInt) -> Self {
        Value::Big(BigIntLike::BigInt(value.into_bigint()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_host_rendering() {
        assert_eq!(Value::from(100).to_string(), "100");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from("abc").to_string(), "'abc'");
        assert_eq!(Value::List(vec![1.into(), "a".into()]).to_string(), "[ 1, 'a' ]");
        assert_eq!(Value::from(BigInt::from(-3)).to_string(), "bigint(-3)");
    }

    #[test]
    fn only_numbers_strings_and_big_integers_are_numeric() {
        assert!(Value::from(1).as_raw_numeric().is_ok());
        assert!(Value::from("1").as_raw_numeric().is_ok());
        assert!(Value::from(U256::from(1u64)).as_raw_numeric().is_ok());
        assert_eq!(
            Value::Map(BTreeMap::new()).as_raw_numeric().unwrap_err(),
            UnsupportedTypeError::Type { type_name: "map" }
        );
        assert!(Value::Null.as_raw_numeric().is_err());
    }
}
