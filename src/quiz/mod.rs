//! Quiz module - practice rounds and the multiple-choice test

pub mod exam;
pub mod practice;

pub use exam::*;
pub use practice::*;
