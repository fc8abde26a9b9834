use regex::Regex;
use std::sync::OnceLock;

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[+-]?[0-9]+$").expect("invalid regex"))
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-?0[xX][0-9a-fA-F]+$").expect("invalid regex"))
}

/// Returns true for an optionally signed decimal integer (`"-42"`, `"+7"`, `"007"`).
pub fn is_decimal_integer(value: &str) -> bool {
    decimal_pattern().is_match(value)
}

/// Returns true for an optionally negative `0x`-prefixed hex integer.
pub fn is_hex_integer(value: &str) -> bool {
    hex_pattern().is_match(value)
}
