use numassert_canonical::{
    BigInt, BigIntLike, CanonicalInt, NormalizerConfig, UnsafeNativePolicy, I256, U256,
};

#[test]
fn canonical_int_serializes_to_decimal_string() {
    let value = CanonicalInt::from_decimal_str("-000123456789012345678901234567890").unwrap();

    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#""-123456789012345678901234567890""#
    );
}

#[test]
fn canonical_int_deserializes_from_decimal_string() {
    let value: CanonicalInt = serde_json::from_str(r#""42""#).unwrap();
    assert_eq!(value, CanonicalInt::from(42));

    assert!(serde_json::from_str::<CanonicalInt>(r#""4.2""#).is_err());
    assert!(serde_json::from_str::<CanonicalInt>("42").is_err());
}

#[test]
fn big_integer_representations_serialize_with_tag() {
    let cases = [
        (BigIntLike::from(BigInt::from(-7)), r#"{"t":"bigint","v":"-7"}"#),
        (BigIntLike::from(U256::from(7u64)), r#"{"t":"u256","v":"7"}"#),
        (
            BigIntLike::from("-7".parse::<I256>().unwrap()),
            r#"{"t":"i256","v":"-7"}"#,
        ),
    ];

    for (value, expected) in cases {
        assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    }
}

#[test]
fn config_defaults_from_empty_document() {
    let config = NormalizerConfig::from_json("{}").unwrap();
    assert_eq!(config, NormalizerConfig::default());
    assert!(!config.accept_hex);
    assert_eq!(config.unsafe_native, UnsafeNativePolicy::Reject);
}

#[test]
fn config_reads_every_field() {
    let config =
        NormalizerConfig::from_json(r#"{"accept_hex": true, "unsafe_native": "warn"}"#).unwrap();
    assert!(config.accept_hex);
    assert_eq!(config.unsafe_native, UnsafeNativePolicy::Warn);
}

#[test]
fn config_rejects_unknown_fields() {
    let err = NormalizerConfig::from_json(r#"{"accept_octal": true}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid normalizer config"));
}
