//! Big-integer aware comparison assertions.
//!
//! This crate wraps the host's equality, ordering, range, and tolerance
//! methods (and all of their aliases). When an operand is a big-integer
//! representation, the operands are normalized to canonical integers and
//! compared exactly; otherwise the original method runs untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use numassert_bignum::expect;
//! use numassert_canonical::{BigInt, U256};
//!
//! expect(U256::from(100u64)).equal(100)?;
//! expect(BigInt::from(100)).gt(50)?;
//! expect(BigInt::from(15)).within(10, 20)?;
//! expect(BigInt::from(100)).close_to(103, 5)?;
//! assert!(expect(BigInt::from(100)).gt(150).is_err());
//! # Ok::<(), numassert_host::AssertError>(())
//! ```
//!
//! Installation into an explicit registry:
//!
//! ```rust
//! use numassert_bignum::install;
//! use numassert_canonical::NormalizerConfig;
//! use numassert_host::{Assertion, MethodRegistry};
//!
//! let mut registry = MethodRegistry::standard();
//! install(&mut registry, NormalizerConfig { accept_hex: true, ..Default::default() })?;
//! Assertion::new(&registry, numassert_canonical::U256::from(255u64)).eq("0xff")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
#![deny(missing_docs)]

/// Dispatch between big-integer comparison and the wrapped method.
pub mod dispatch;
/// Installation into a method registry.
pub mod install;
/// Ordering relations and their readable names.
pub mod relation;

pub use dispatch::{dispatch, Check, Override, OVERRIDES};
pub use install::{extended_registry, install, InstallError, EXTENSION_TAG};
pub use relation::Relation;

use std::sync::OnceLock;

use numassert_canonical::NormalizerConfig;
use numassert_host::{Assertion, MethodRegistry, Value};

/// Process-wide registry: the standard methods with big-integer support installed.
pub fn registry() -> &'static MethodRegistry {
    static REGISTRY: OnceLock<MethodRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        extended_registry(NormalizerConfig::default())
            .expect("standard registry provides every extended method")
    })
}

/// Starts an assertion chain against [`registry()`].
pub fn expect(subject: impl Into<Value>) -> Assertion<'static> {
    Assertion::new(registry(), subject)
}
