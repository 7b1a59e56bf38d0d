//! Tests for numeral encoding and decoding

mod common;

use romanum::numeral::{conversion_table, decode, encode, NumeralError, MAX_VALUE, MIN_VALUE};

#[test]
fn test_round_trip_full_range() {
    for n in MIN_VALUE..=MAX_VALUE {
        let numeral = encode(n).unwrap();
        assert_eq!(decode(&numeral).unwrap() as i64, n, "round trip failed for {}", n);
    }
}

#[test]
fn test_canonical_forms() {
    for (number, numeral) in common::canonical_pairs() {
        assert_eq!(encode(number).unwrap(), numeral, "encode({})", number);
        assert_eq!(decode(numeral).unwrap() as i64, number, "decode({})", numeral);
    }
}

#[test]
fn test_encode_boundaries() {
    assert_eq!(encode(1).unwrap(), "I");
    assert_eq!(encode(3999).unwrap(), "MMMCMXCIX");
    assert_eq!(encode(0), Err(NumeralError::OutOfRange(0)));
    assert_eq!(encode(4000), Err(NumeralError::OutOfRange(4000)));
    assert_eq!(encode(-5), Err(NumeralError::OutOfRange(-5)));
}

#[test]
fn test_encoded_numerals_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for n in MIN_VALUE..=MAX_VALUE {
        assert!(seen.insert(encode(n).unwrap()), "duplicate numeral for {}", n);
    }
}

#[test]
fn test_decode_validity() {
    assert_eq!(decode("MCMXCIV").unwrap(), 1994);
    assert_eq!(decode("mcmxciv").unwrap(), 1994);
    assert_eq!(
        decode("ABC"),
        Err(NumeralError::InvalidNumeral("ABC".to_string()))
    );
    assert_eq!(decode("").unwrap(), 0);
}

#[test]
fn test_decode_rejects_embedded_whitespace() {
    assert!(decode("X I").is_err());
    assert!(decode(" XI").is_err());
}

#[test]
fn test_table_is_stable_across_calls() {
    let before: Vec<_> = conversion_table().to_vec();
    let first = encode(1888).unwrap();
    let second = encode(1888).unwrap();
    decode("MDCCCLXXXVIII").unwrap();

    assert_eq!(first, second);
    assert_eq!(before, conversion_table().to_vec());
    assert_eq!(conversion_table().len(), 13);
    assert_eq!(conversion_table()[0].symbol, "M");
    assert_eq!(conversion_table()[12].symbol, "I");
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                for n in (1 + t..=MAX_VALUE).step_by(4) {
                    assert_eq!(decode(&encode(n).unwrap()).unwrap() as i64, n);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
