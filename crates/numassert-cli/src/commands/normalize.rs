//! Normalize command implementation.

use numassert_canonical::{Normalizer, NormalizerConfig};
use serde_json::json;

use crate::operand;
use crate::output::format_json;

pub fn run(text: String, hex: bool, json: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let normalizer = Normalizer::new(NormalizerConfig {
        accept_hex: hex,
        ..NormalizerConfig::default()
    });

    let value = operand::parse(&text)?;
    let canonical = normalizer.normalize(&value.as_raw_numeric()?)?;

    if json {
        let document = json!({
            "input": text,
            "type": value.type_name(),
            "value": canonical,
        });
        println!("{}", format_json(&document));
    } else {
        println!("{}", canonical);
    }
    Ok(true)
}
