//! Encoding and decoding between Arabic numbers and Roman numerals
//!
//! Both directions are a single greedy pass over the conversion table.

use super::error::NumeralError;
use super::table::{conversion_table, MAX_VALUE, MIN_VALUE};

/// Encode a number as a canonical Roman numeral.
///
/// Walks the conversion table in descending order, emitting each symbol as
/// many times as its value fits into what is left of the number.
///
/// # Errors
/// Returns [`NumeralError::OutOfRange`] when `number` is outside `1..=3999`.
///
/// # Example
/// ```
/// assert_eq!(romanum::numeral::encode(1994).unwrap(), "MCMXCIV");
/// ```
pub fn encode(number: i64) -> Result<String, NumeralError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&number) {
        return Err(NumeralError::OutOfRange(number));
    }

    // Range checked above, fits in u32
    let mut remaining = number as u32;
    let mut result = String::new();

    for numeral in conversion_table() {
        let count = remaining / numeral.value;
        for _ in 0..count {
            result.push_str(numeral.symbol);
        }
        remaining %= numeral.value;
    }

    debug_assert_eq!(remaining, 0);
    Ok(result)
}

/// Decode a Roman numeral into a number.
///
/// Matching is ASCII case-insensitive, so callers do not need to normalize
/// the input. Each table entry is consumed from the front of the text as often
/// as it matches before moving on to the next entry; the table is never
/// rescanned from the top. This accepts some non-canonical strings such as
/// `IIII` or `CMCM`.
///
/// An empty string decodes to 0.
///
/// # Errors
/// Returns [`NumeralError::InvalidNumeral`] when any text is left over after
/// the pass, or when the total overflows `u32`.
pub fn decode(text: &str) -> Result<u32, NumeralError> {
    let bytes = text.as_bytes();
    let mut cursor = 0;
    let mut total: u32 = 0;

    for numeral in conversion_table() {
        let symbol = numeral.symbol.as_bytes();
        while starts_with_ignore_case(&bytes[cursor..], symbol) {
            total = total
                .checked_add(numeral.value)
                .ok_or_else(|| NumeralError::InvalidNumeral(text.to_string()))?;
            cursor += symbol.len();
        }
    }

    if cursor == bytes.len() {
        Ok(total)
    } else {
        Err(NumeralError::InvalidNumeral(text.to_string()))
    }
}

fn starts_with_ignore_case(rest: &[u8], symbol: &[u8]) -> bool {
    rest.len() >= symbol.len() && rest[..symbol.len()].eq_ignore_ascii_case(symbol)
}
