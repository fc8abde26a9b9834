//! Check command implementation.

use numassert_bignum::extended_registry;
use numassert_canonical::NormalizerConfig;
use numassert_host::{Assertion, Value};
use serde_json::json;

use crate::operand;
use crate::output::{format_json, format_verdict};

pub struct CheckArgs {
    pub method: String,
    pub subject: String,
    pub args: Vec<String>,
    pub not: bool,
    pub length: bool,
    pub hex: bool,
    pub json: bool,
}

/// Returns whether the assertion passed; evaluation errors are `Err`.
pub fn run(args: CheckArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let config = NormalizerConfig {
        accept_hex: args.hex,
        ..NormalizerConfig::default()
    };
    let registry = extended_registry(config)?;

    let subject = operand::parse(&args.subject)?;
    let operands = args
        .args
        .iter()
        .map(|text| operand::parse(text))
        .collect::<Result<Vec<Value>, _>>()?;

    let mut chain = Assertion::new(&registry, subject);
    if args.not {
        chain = chain.not();
    }
    if args.length {
        chain = chain.length();
    }

    let outcome = chain.evaluate(&args.method, &operands)?;
    let passed = outcome.passed != args.not;

    if args.json {
        let document = json!({
            "method": args.method,
            "negated": args.not,
            "passed": passed,
            "outcome": outcome,
        });
        println!("{}", format_json(&document));
    } else {
        println!("{}", format_verdict(&args.method, &outcome, args.not));
    }
    Ok(passed)
}
