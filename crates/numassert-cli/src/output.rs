//! Output formatting utilities.

use numassert_host::AssertionOutcome;
use serde_json::Value;

/// Formats a JSON document.
pub fn format_json(document: &Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a verdict as a single human-readable line.
pub fn format_verdict(method: &str, outcome: &AssertionOutcome, negate: bool) -> String {
    let passed = outcome.passed != negate;
    if passed {
        return format!("ok       {}", method);
    }
    let message = if negate {
        &outcome.negated_message
    } else {
        &outcome.message
    };
    format!("FAILED   {}: {}", method, message)
}
