//! Deciding whether user input is an Arabic number or a Roman numeral

use std::fmt;
use std::num::IntErrorKind;

use super::codec::{decode, encode};
use super::error::NumeralError;

/// Converter input after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConverterInput {
    /// Input parsed as an integer, to be encoded
    Arabic(i64),
    /// Anything else, uppercased, to be decoded
    Roman(String),
}

/// Successful conversion in either direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// An Arabic number written as a Roman numeral
    ToRoman { number: i64, numeral: String },
    /// A Roman numeral read as an Arabic number
    FromRoman { numeral: String, number: u32 },
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::ToRoman { number, numeral } => {
                write!(f, "{} converted to Roman numerals is {}.", number, numeral)
            }
            Conversion::FromRoman { numeral, number } => {
                write!(f, "{} converted from Roman numerals is {}.", numeral, number)
            }
        }
    }
}

/// Classify raw converter input.
///
/// Surrounding whitespace is ignored. A strict integer parse is tried first;
/// integers too large for `i64` are clamped so they still report as out of
/// range rather than as a bad numeral. Everything else is treated as a numeral.
pub fn classify(input: &str) -> ConverterInput {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(number) => ConverterInput::Arabic(number),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => ConverterInput::Arabic(i64::MAX),
            IntErrorKind::NegOverflow => ConverterInput::Arabic(i64::MIN),
            _ => ConverterInput::Roman(trimmed.to_uppercase()),
        },
    }
}

impl ConverterInput {
    /// Run the conversion this input calls for
    pub fn convert(self) -> Result<Conversion, NumeralError> {
        match self {
            ConverterInput::Arabic(number) => {
                encode(number).map(|numeral| Conversion::ToRoman { number, numeral })
            }
            ConverterInput::Roman(numeral) => {
                decode(&numeral).map(|number| Conversion::FromRoman { numeral, number })
            }
        }
    }
}

/// Classify and convert in one step
pub fn convert_input(input: &str) -> Result<Conversion, NumeralError> {
    classify(input).convert()
}
