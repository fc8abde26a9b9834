use numassert_canonical::UnsupportedTypeError;
use thiserror::Error;

use crate::outcome::AssertionFailure;

/// Errors produced by evaluating an assertion.
///
/// [`AssertError::Failed`] means the assertion evaluated false. Every other
/// variant means it could not be evaluated at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssertError {
    /// The assertion evaluated false.
    #[error(transparent)]
    Failed(#[from] AssertionFailure),
    /// An operand has no canonical integer interpretation.
    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),
    /// The default implementation cannot handle the operand types.
    #[error("{method}: {reason}")]
    InvalidOperand {
        /// Method name.
        method: String,
        /// Why the operand was rejected.
        reason: String,
    },
    /// The invocation supplied fewer arguments than the method needs.
    #[error("{method}: missing argument {index}")]
    MissingArgument {
        /// Method name.
        method: String,
        /// Zero-based index of the missing argument.
        index: usize,
    },
    /// No method is registered under the name.
    #[error("unknown assertion method '{0}'")]
    UnknownMethod(String),
}
