//! Converter: interactive loop and the one-shot `convert` subcommand

use anyhow::Result;
use console::style;

use crate::cli::prompts::{ask_text, ask_yes_no};
use crate::numeral::{convert_input, NumeralError};
use crate::utils::{print_failure, print_section_header, print_success};

/// Message shown to the user when a conversion fails
pub fn failure_message(error: &NumeralError) -> &'static str {
    match error {
        NumeralError::OutOfRange(_) => "Please ensure number is between 1 and 3999.",
        NumeralError::InvalidNumeral(_) => "Invalid Roman numeral. Try again.",
    }
}

/// Run the interactive converter until the user declines to continue
pub fn run_converter() -> Result<()> {
    print_section_header("Converter");

    loop {
        let input = ask_text("Enter either a number or a Roman numeral to convert")?;

        match convert_input(&input) {
            Ok(conversion) => {
                tracing::debug!(?conversion, "converted");
                print_success(&conversion.to_string());
            }
            Err(e) => {
                tracing::debug!(error = %e, "conversion failed");
                print_failure(failure_message(&e));
                continue;
            }
        }

        if !ask_yes_no("Would you like to convert something else?")? {
            return Ok(());
        }
    }
}

/// Convert each value and print one line per value.
///
/// Every value is attempted; the command fails afterwards if any of them
/// could not be converted.
pub fn run_convert(values: &[String]) -> Result<()> {
    let mut failures = 0usize;

    for value in values {
        match convert_input(value) {
            Ok(conversion) => println!("{}", conversion),
            Err(e) => {
                failures += 1;
                eprintln!("{} {}", style("error:").red().bold(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} value(s) could not be converted", failures, values.len());
    }
    Ok(())
}
