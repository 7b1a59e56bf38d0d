//! Information screen and numeral chart

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::numeral::{conversion_table, encode};

const INTRODUCTION: &str = "\
According to Wikipedia, Roman numerals are a numeral system that originated in ancient Rome. \
They were the main way of writing numbers until the Late Middle Ages, when they were replaced \
by Arabic numerals.

Numbers are represented by combinations of letters from the Latin alphabet. For example, 11 is \
written as 'XI', meaning 'ten plus one', whereas 4 is written as 'IV', meaning 'one less than \
five'. The largest number that can be written this way is 3999.";

/// Build the chart of every symbol in matching order
pub fn chart_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Symbol").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
        Cell::new("Kind").add_attribute(Attribute::Bold),
    ]);

    for numeral in conversion_table() {
        let (kind, color) = if numeral.is_subtractive() {
            ("subtractive", Color::Yellow)
        } else {
            ("additive", Color::Cyan)
        };
        table.add_row(vec![
            Cell::new(numeral.symbol).add_attribute(Attribute::Bold),
            Cell::new(numeral.value),
            Cell::new(kind).fg(color),
        ]);
    }

    table
}

/// Print the introduction and the numeral chart
pub fn display_info(year: i32) {
    println!();
    for paragraph in INTRODUCTION.split("\n\n") {
        println!("  {}", paragraph);
        println!();
    }

    // Years past 3999 have no numeral, leave the sentence out
    if let Ok(numeral) = encode(i64::from(year)) {
        println!(
            "  The current year, {}, is written '{}' in Roman numerals.",
            year,
            style(numeral).yellow().bold()
        );
        println!();
    }

    println!("  Here is a handy chart of each Roman numeral and its value:");
    println!();

    // Indent the table
    for line in chart_table().to_string().lines() {
        println!("    {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_lists_symbols_in_order() {
        let table = chart_table();
        let symbols: Vec<String> = table
            .row_iter()
            .filter_map(|row| row.cell_iter().next().map(|cell| cell.content()))
            .collect();
        assert_eq!(
            symbols,
            vec!["M", "CM", "D", "CD", "C", "XC", "L", "XL", "X", "IX", "V", "IV", "I"]
        );
        assert!(table.to_string().contains("subtractive"));
    }
}
