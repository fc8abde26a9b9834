use thiserror::Error;

/// Raised when a value has no well-defined integer interpretation.
///
/// This is a hard error: callers must propagate it rather than report a
/// failed comparison.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnsupportedTypeError {
    /// The value is not a number, string, or big-integer representation.
    #[error("cannot convert {type_name} to a canonical integer")]
    Type {
        /// Type name of the offending value.
        type_name: &'static str,
    },
    /// A string that is not an integer in an accepted notation.
    #[error("'{value}' is not an integer string")]
    Malformed {
        /// Offending string.
        value: String,
    },
    /// A native number with a fractional part, or a non-finite one.
    #[error("{value} is not an integer")]
    NotInteger {
        /// Offending number.
        value: f64,
    },
    /// An integer outside the native safe range `±(2^53 - 1)`.
    #[error("{value} is outside the safe integer range")]
    UnsafeInteger {
        /// Decimal rendering of the offending value.
        value: String,
    },
}

/// Errors raised while loading a [`crate::NormalizerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the config schema.
    #[error("invalid normalizer config: {0}")]
    Json(#[from] serde_json::Error),
}
