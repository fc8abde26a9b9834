use numassert_canonical::{
    is_big_integer_like, normalize, BigInt, BigIntLike, CanonicalInt, Normalizer,
    NormalizerConfig, RawNumeric, UnsafeNativePolicy, UnsupportedTypeError, I256,
    MAX_SAFE_INTEGER, U256,
};

const HUGE: &str = "115792089237316195423570985008687907853269984665640564039457584007913129639935";

fn big(value: &str) -> BigIntLike {
    BigIntLike::BigInt(value.parse::<BigInt>().unwrap())
}

#[test]
fn every_representation_of_five_normalizes_equal() {
    let a = big("5");
    let b = BigIntLike::Word(U256::from(5u64));
    let c = BigIntLike::SignedWord("5".parse::<I256>().unwrap());
    let inputs = [
        RawNumeric::Native(5.0),
        RawNumeric::Text("5"),
        RawNumeric::Big(&a),
        RawNumeric::Big(&b),
        RawNumeric::Big(&c),
    ];

    let expected = CanonicalInt::from(5);
    for input in inputs {
        assert_eq!(normalize(&input).unwrap(), expected, "{input:?}");
    }
}

#[test]
fn word_extremes_survive_normalization() {
    let max = BigIntLike::Word(U256::MAX);
    assert_eq!(normalize(&RawNumeric::Big(&max)).unwrap().to_string(), HUGE);

    let min = BigIntLike::SignedWord(I256::MIN);
    let value = normalize(&RawNumeric::Big(&min)).unwrap();
    assert!(value.is_negative());
    assert_eq!(
        value.to_string(),
        "-57896044618658097711785492504343953926634992332820282019728792003956564819968"
    );
}

#[test]
fn strings_parse_as_signed_decimal() {
    assert_eq!(
        normalize(&RawNumeric::Text("-17")).unwrap(),
        CanonicalInt::from(-17)
    );
    assert_eq!(normalize(&RawNumeric::Text(HUGE)).unwrap().to_string(), HUGE);
}

#[test]
fn non_numeric_strings_are_unsupported() {
    for text in ["abc", "", "12.5", " 12", "0x10"] {
        let err = normalize(&RawNumeric::Text(text)).unwrap_err();
        assert_eq!(
            err,
            UnsupportedTypeError::Malformed {
                value: text.to_string()
            }
        );
    }
}

#[test]
fn hex_strings_need_opt_in() {
    let normalizer = Normalizer::new(NormalizerConfig {
        accept_hex: true,
        ..NormalizerConfig::default()
    });
    assert_eq!(
        normalizer.normalize(&RawNumeric::Text("0xff")).unwrap(),
        CanonicalInt::from(255)
    );
    assert_eq!(
        normalizer.normalize(&RawNumeric::Text("-0x10")).unwrap(),
        CanonicalInt::from(-16)
    );
    // Decimal strings still work with hex enabled.
    assert_eq!(
        normalizer.normalize(&RawNumeric::Text("10")).unwrap(),
        CanonicalInt::from(10)
    );
}

#[test]
fn fractional_native_numbers_are_unsupported() {
    assert!(matches!(
        normalize(&RawNumeric::Native(0.5)),
        Err(UnsupportedTypeError::NotInteger { .. })
    ));
}

#[test]
fn unsafe_native_numbers_are_rejected_by_default() {
    let unsafe_number = (MAX_SAFE_INTEGER as f64) + 1.0;
    assert!(matches!(
        normalize(&RawNumeric::Native(unsafe_number)),
        Err(UnsupportedTypeError::UnsafeInteger { .. })
    ));
    assert_eq!(
        normalize(&RawNumeric::Native(MAX_SAFE_INTEGER as f64)).unwrap(),
        CanonicalInt::from(MAX_SAFE_INTEGER)
    );
}

#[test]
fn unsafe_native_numbers_convert_exactly_when_warned() {
    let normalizer = Normalizer::new(NormalizerConfig {
        unsafe_native: UnsafeNativePolicy::Warn,
        ..NormalizerConfig::default()
    });
    let value = normalizer.normalize(&RawNumeric::Native(1e20)).unwrap();
    assert_eq!(value.to_string(), "100000000000000000000");
}

#[test]
fn recognition_only_accepts_big_integer_representations() {
    let a = big("1");
    assert!(is_big_integer_like(&RawNumeric::Big(&a)));
    assert!(!is_big_integer_like(&RawNumeric::Native(1.0)));
    assert!(!is_big_integer_like(&RawNumeric::Text("1")));
}
