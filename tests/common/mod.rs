//! Shared test utilities and fixtures

/// Well-known numbers and their canonical numerals
pub fn canonical_pairs() -> Vec<(i64, &'static str)> {
    vec![
        (1, "I"),
        (3, "III"),
        (4, "IV"),
        (9, "IX"),
        (14, "XIV"),
        (40, "XL"),
        (90, "XC"),
        (137, "CXXXVII"),
        (400, "CD"),
        (944, "CMXLIV"),
        (999, "CMXCIX"),
        (1994, "MCMXCIV"),
        (2020, "MMXX"),
        (3888, "MMMDCCCLXXXVIII"),
        (3999, "MMMCMXCIX"),
    ]
}
