use numassert_canonical::{BigIntLike, Normalizer, NormalizerConfig, RawNumeric, U256};

fn main() {
    let normalizer = Normalizer::new(NormalizerConfig {
        accept_hex: true,
        ..NormalizerConfig::default()
    });
    let word = BigIntLike::Word(U256::MAX);
    let inputs = [
        RawNumeric::Native(9_007_199_254_740_991.0),
        RawNumeric::Text("-0x2a"),
        RawNumeric::Big(&word),
    ];

    for input in inputs {
        match normalizer.normalize(&input) {
            Ok(value) => println!("{:<8} {}", input.type_name(), value),
            Err(err) => {
                eprintln!("normalization failed: {}", err);
                std::process::exit(1);
            }
        }
    }
}
