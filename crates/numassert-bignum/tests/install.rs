use numassert_bignum::{install, InstallError, EXTENSION_TAG};
use numassert_canonical::{BigInt, NormalizerConfig};
use numassert_host::{
    AssertError, Assertion, AssertionContext, AssertionOutcome, MethodRegistry, Value,
};

#[test]
fn installs_once_per_registry() {
    let mut registry = MethodRegistry::standard();
    install(&mut registry, NormalizerConfig::default()).unwrap();
    assert!(registry.has_extension(EXTENSION_TAG));

    assert_eq!(
        install(&mut registry, NormalizerConfig::default()),
        Err(InstallError::AlreadyInstalled)
    );
    Assertion::new(&registry, BigInt::from(3)).equal(3).unwrap();
}

#[test]
fn refuses_registries_missing_a_method() {
    let mut registry = MethodRegistry::new();
    registry.add_method("equal", |ctx: &AssertionContext<'_>| {
        Ok(AssertionOutcome::new(
            true,
            "ok",
            "not ok",
            Value::Null,
            ctx.subject().clone(),
        ))
    });

    assert_eq!(
        install(&mut registry, NormalizerConfig::default()),
        Err(InstallError::MissingMethod("equals".into()))
    );
    assert!(!registry.has_extension(EXTENSION_TAG));
}

#[test]
fn wraps_whatever_implementation_was_registered() {
    let mut registry = MethodRegistry::standard();
    registry
        .overwrite_method("gt", |_previous| {
            |ctx: &AssertionContext<'_>| {
                Ok(AssertionOutcome::new(
                    false,
                    "custom gt",
                    "custom not gt",
                    Value::Null,
                    ctx.subject().clone(),
                ))
            }
        })
        .unwrap();
    install(&mut registry, NormalizerConfig::default()).unwrap();

    // Big-integer operands take the exact path.
    Assertion::new(&registry, BigInt::from(2)).gt(1).unwrap();

    // Everything else still reaches the custom implementation.
    match Assertion::new(&registry, 2).gt(1) {
        Err(AssertError::Failed(failure)) => assert_eq!(failure.message, "custom gt"),
        other => panic!("unexpected {other:?}"),
    }
}
