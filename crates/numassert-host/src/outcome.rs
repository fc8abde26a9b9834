use serde::Serialize;
use thiserror::Error;

use crate::value::Value;

/// Verdict of one method invocation, before negation is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssertionOutcome {
    /// Whether the relation holds.
    pub passed: bool,
    /// Message used when the positive form fails.
    pub message: String,
    /// Message used when the negated form fails.
    pub negated_message: String,
    /// Expected value for diagnostics.
    pub expected: Value,
    /// Actual value for diagnostics.
    pub actual: Value,
}

impl AssertionOutcome {
    /// Creates an outcome.
    pub fn new(
        passed: bool,
        message: impl Into<String>,
        negated_message: impl Into<String>,
        expected: Value,
        actual: Value,
    ) -> Self {
        Self {
            passed,
            message: message.into(),
            negated_message: negated_message.into(),
            expected,
            actual,
        }
    }

    /// Applies negation and turns a failing verdict into an [`AssertionFailure`].
    pub fn into_result(self, negate: bool) -> Result<(), AssertionFailure> {
        if self.passed != negate {
            return Ok(());
        }
        Err(AssertionFailure {
            message: if negate {
                self.negated_message
            } else {
                self.message
            },
            expected: self.expected,
            actual: self.actual,
            negated: negate,
        })
    }
}

/// A failed assertion with the message and payloads for reporting.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
pub struct AssertionFailure {
    /// Human-readable failure message.
    pub message: String,
    /// Expected value.
    pub expected: Value,
    /// Actual value.
    pub actual: Value,
    /// Whether the failing chain was negated.
    pub negated: bool,
}
