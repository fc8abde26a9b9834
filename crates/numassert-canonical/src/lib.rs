//! Canonical integer primitives for big-integer aware assertions.
//!
//! Every numeric operand an assertion compares is first turned into a
//! [`CanonicalInt`]: an arbitrary-precision signed integer whose equality and
//! ordering are exact. The [`Normalizer`] accepts the host's native numbers,
//! integer strings, and the supported big-integer representations
//! ([`BigIntLike`]) and rejects everything else with [`UnsupportedTypeError`].
//!
//! Core invariants:
//! - Two canonical values are equal iff their decimal renderings are identical
//! - Native numbers are never silently truncated
//! - Decimal strings are the interchange format between representations
//!
#![deny(missing_docs)]

/// Normalizer configuration.
pub mod config;
/// Error types for normalization and configuration.
pub mod errors;
/// The canonical arbitrary-precision integer.
pub mod integer;
/// Conversion of raw numeric inputs into canonical integers.
pub mod normalizer;
/// Raw numeric inputs and the closed set of big-integer representations.
pub mod raw;
/// Pattern checks for integer strings.
pub mod validation;

pub use config::{NormalizerConfig, UnsafeNativePolicy};
pub use errors::{ConfigError, UnsupportedTypeError};
pub use integer::{CanonicalInt, MAX_SAFE_INTEGER};
pub use normalizer::{normalize, Normalizer};
pub use raw::{is_big_integer_like, BigIntLike, RawNumeric};

pub use alloy_primitives::{I256, U256};
pub use num_bigint::BigInt;
