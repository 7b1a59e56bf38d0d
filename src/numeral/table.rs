//! The Roman numeral conversion table
//!
//! Both the encoder and the decoder walk this table front to back. The order
//! is the greedy matching priority, so it must stay strictly descending by value.

/// Smallest number representable as a Roman numeral
pub const MIN_VALUE: i64 = 1;

/// Largest number representable as a Roman numeral
pub const MAX_VALUE: i64 = 3999;

/// A single symbol of the conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    /// Symbol or subtractive pair, always uppercase
    pub symbol: &'static str,
    /// Value the symbol stands for
    pub value: u32,
}

impl Numeral {
    const fn new(symbol: &'static str, value: u32) -> Self {
        Self { symbol, value }
    }

    /// Whether this entry is a subtractive pair such as `CM` or `IV`
    pub fn is_subtractive(&self) -> bool {
        self.symbol.len() == 2
    }
}

/// Conversion table, strictly descending by value
pub static CONVERSION_TABLE: [Numeral; 13] = [
    Numeral::new("M", 1000),
    Numeral::new("CM", 900),
    Numeral::new("D", 500),
    Numeral::new("CD", 400),
    Numeral::new("C", 100),
    Numeral::new("XC", 90),
    Numeral::new("L", 50),
    Numeral::new("XL", 40),
    Numeral::new("X", 10),
    Numeral::new("IX", 9),
    Numeral::new("V", 5),
    Numeral::new("IV", 4),
    Numeral::new("I", 1),
];

/// Get the conversion table in matching order
pub fn conversion_table() -> &'static [Numeral] {
    &CONVERSION_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_strictly_descending() {
        for pair in conversion_table().windows(2) {
            assert!(
                pair[0].value > pair[1].value,
                "{} should come before {}",
                pair[0].symbol,
                pair[1].symbol
            );
        }
    }

    #[test]
    fn test_subtractive_pairs() {
        let pairs: Vec<&str> = conversion_table()
            .iter()
            .filter(|n| n.is_subtractive())
            .map(|n| n.symbol)
            .collect();
        assert_eq!(pairs, vec!["CM", "CD", "XC", "XL", "IX", "IV"]);
    }
}
