//! A small chainable assertion framework.
//!
//! This crate provides:
//! - A dynamic [`Value`] that assertions operate on
//! - [`Assertion`] chains with negation and length modes
//! - A [`MethodRegistry`] mapping method names to implementations, with
//!   overwrite-by-name so extensions can wrap a method and still call through
//!   to the previous implementation
//! - Default implementations of the equality, ordering, range, and tolerance
//!   methods for native numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use numassert_host::{Assertion, MethodRegistry, Value};
//!
//! let registry = MethodRegistry::standard();
//! Assertion::new(&registry, 5).above(3)?;
//! Assertion::new(&registry, Value::List(vec![1.into(), 2.into()])).length().most(2)?;
//! assert!(Assertion::new(&registry, 5).not().within(1, 10).is_err());
//! # Ok::<(), numassert_host::AssertError>(())
//! ```
//!
#![deny(missing_docs)]

/// Assertion chains.
pub mod assertion;
/// Per-invocation context handed to method implementations.
pub mod context;
/// Error types for assertion evaluation.
pub mod errors;
/// Verdicts and failures.
pub mod outcome;
/// Method registry and the overwrite extension point.
pub mod registry;
/// Default method implementations.
pub mod standard;
/// Dynamic values.
pub mod value;

pub use assertion::Assertion;
pub use context::{AssertionContext, Flags};
pub use errors::AssertError;
pub use outcome::{AssertionFailure, AssertionOutcome};
pub use registry::{Method, MethodRegistry};
pub use value::Value;
