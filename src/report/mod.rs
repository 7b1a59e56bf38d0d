//! Report module - numeral chart and test result export

pub mod chart;
pub mod exam_report;

pub use chart::*;
pub use exam_report::*;
