use std::collections::BTreeMap;

use numassert_bignum::{registry, OVERRIDES};
use numassert_host::{AssertionContext, Flags, MethodRegistry, Value};

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Number(3.0),
        Value::Number(-1.5),
        Value::Str("abc".into()),
        Value::Str("42".into()),
        Value::List(vec![Value::Number(1.0), Value::Number(2.0)]),
        Value::Map(BTreeMap::from([("k".to_string(), Value::Null)])),
    ]
}

/// Every non-big-integer invocation must produce exactly what the plain
/// registry produces, errors included.
#[test]
fn non_big_operands_match_the_plain_registry() {
    let plain = MethodRegistry::standard();
    let extended = registry();
    let values = samples();
    let flag_sets = [
        Flags::default(),
        Flags {
            negate: true,
            length: false,
        },
        Flags {
            negate: false,
            length: true,
        },
    ];

    for entry in OVERRIDES {
        for subject in &values {
            for first in &values {
                for second in [Value::Number(2.0), Value::Str("x".into())] {
                    let args = [first.clone(), second];
                    for flags in flag_sets {
                        let ctx = AssertionContext::new(entry.name, subject, &args, flags);
                        assert_eq!(
                            plain.invoke(&ctx),
                            extended.invoke(&ctx),
                            "{} on {subject} with {args:?} and {flags:?}",
                            entry.name
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn every_wrapped_name_exists_in_the_standard_registry() {
    let plain = MethodRegistry::standard();
    for entry in OVERRIDES {
        assert!(plain.has_method(entry.name), "{}", entry.name);
    }
    assert_eq!(
        plain.names().collect::<Vec<_>>(),
        registry().names().collect::<Vec<_>>()
    );
}
