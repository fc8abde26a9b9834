use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// What to do with a native number outside `±(2^53 - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsafeNativePolicy {
    /// Fail with [`crate::UnsupportedTypeError::UnsafeInteger`].
    #[default]
    Reject,
    /// Convert the exact `f64` value and log a warning.
    Warn,
}

/// Knobs for [`crate::Normalizer`]. Every field has a default, so `{}` is a valid document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Accept `0x`-prefixed hex strings in addition to decimal ones.
    pub accept_hex: bool,
    /// Handling of native numbers beyond the safe integer range.
    pub unsafe_native: UnsafeNativePolicy,
}

impl NormalizerConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}
