use tracing::warn;

use crate::config::{NormalizerConfig, UnsafeNativePolicy};
use crate::errors::UnsupportedTypeError;
use crate::integer::CanonicalInt;
use crate::raw::{BigIntLike, RawNumeric};
use crate::validation::is_hex_integer;

/// Converts raw numeric inputs into [`CanonicalInt`] values.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Creates a normalizer with the provided configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalizes one operand. Pure apart from the optional unsafe-number warning.
    pub fn normalize(&self, value: &RawNumeric<'_>) -> Result<CanonicalInt, UnsupportedTypeError> {
        match value {
            RawNumeric::Native(number) => self.normalize_native(*number),
            RawNumeric::Big(big) => normalize_big(big),
            RawNumeric::Text(text) => self.normalize_text(text),
        }
    }

    fn normalize_native(&self, number: f64) -> Result<CanonicalInt, UnsupportedTypeError> {
        let value = CanonicalInt::from_f64_exact(number)?;
        if value.is_safe() {
            return Ok(value);
        }
        match self.config.unsafe_native {
            UnsafeNativePolicy::Reject => Err(UnsupportedTypeError::UnsafeInteger {
                value: value.to_string(),
            }),
            UnsafeNativePolicy::Warn => {
                warn!(value = %value, "native number outside the safe integer range");
                Ok(value)
            }
        }
    }

    fn normalize_text(&self, text: &str) -> Result<CanonicalInt, UnsupportedTypeError> {
        if self.config.accept_hex && is_hex_integer(text) {
            return CanonicalInt::from_hex_str(text);
        }
        CanonicalInt::from_decimal_str(text)
    }
}

fn normalize_big(big: &BigIntLike) -> Result<CanonicalInt, UnsupportedTypeError> {
    match big {
        BigIntLike::BigInt(value) => Ok(CanonicalInt::from(value.clone())),
        BigIntLike::Word(value) => CanonicalInt::from_decimal_str(&value.to_string()),
        BigIntLike::SignedWord(value) => CanonicalInt::from_decimal_str(&value.to_string()),
    }
}

/// Normalizes with the default configuration (decimal strings only, unsafe numbers rejected).
pub fn normalize(value: &RawNumeric<'_>) -> Result<CanonicalInt, UnsupportedTypeError> {
    Normalizer::default().normalize(value)
}
