//! Romanum: Roman Numeral Library
//!
//! Conversion between Arabic numbers and Roman numerals, plus the
//! practice and test logic used by the interactive shell.

pub mod cli;
pub mod numeral;
pub mod quiz;
pub mod report;
pub mod utils;
