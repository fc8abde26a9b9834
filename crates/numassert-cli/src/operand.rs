//! Command-line operand syntax.

use numassert_canonical::{CanonicalInt, I256, U256};
use numassert_host::Value;

/// Parses an operand.
///
/// `big:<int>`, `u256:<int>` and `i256:<int>` select a big-integer
/// representation; `true`, `false` and `null` are literals; finite numbers are
/// native numbers; anything else is a string.
pub fn parse(text: &str) -> Result<Value, String> {
    if let Some(digits) = text.strip_prefix("big:") {
        let value = CanonicalInt::from_decimal_str(digits)
            .map_err(|e| format!("Invalid big operand: {}", e))?;
        return Ok(Value::from(value));
    }
    if let Some(digits) = text.strip_prefix("u256:") {
        let value = digits
            .parse::<U256>()
            .map_err(|e| format!("Invalid u256 operand '{}': {}", digits, e))?;
        return Ok(Value::from(value));
    }
    if let Some(digits) = text.strip_prefix("i256:") {
        let value = digits
            .parse::<I256>()
            .map_err(|e| format!("Invalid i256 operand '{}': {}", digits, e))?;
        return Ok(Value::from(value));
    }
    Ok(match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => match text.parse::<f64>() {
            Ok(number) if number.is_finite() => Value::Number(number),
            _ => Value::Str(text.to_string()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_select_representations() {
        assert_eq!(parse("big:-12").unwrap().type_name(), "bigint");
        assert_eq!(parse("u256:12").unwrap().type_name(), "u256");
        assert_eq!(parse("i256:-12").unwrap().type_name(), "i256");
        assert!(parse("u256:-1").is_err());
        assert!(parse("big:1.5").is_err());
    }

    #[test]
    fn plain_operands() {
        assert_eq!(parse("12").unwrap(), Value::Number(12.0));
        assert_eq!(parse("-0.5").unwrap(), Value::Number(-0.5));
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(parse("0x10").unwrap(), Value::Str("0x10".into()));
        assert_eq!(parse("NaN").unwrap(), Value::Str("NaN".into()));
    }
}
