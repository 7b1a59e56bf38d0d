//! Test result export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::quiz::{ExamOutcome, Grade};

/// Metadata about the test run
#[derive(Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the run (RFC 3339)
    pub timestamp: String,
    /// Romanum version
    pub romanum_version: String,
}

/// A single question's result
#[derive(Serialize)]
pub struct QuestionEntry {
    pub number: usize,
    pub given: String,
    pub expected: String,
    pub passed: bool,
}

/// Complete test report with metadata
#[derive(Serialize)]
pub struct ExamReport {
    pub metadata: ReportMetadata,
    pub score: usize,
    pub total: usize,
    pub grade: Grade,
    pub questions: Vec<QuestionEntry>,
}

impl ExamReport {
    pub fn from_outcome(outcome: &ExamOutcome) -> Self {
        let questions = outcome
            .answers
            .iter()
            .map(|answer| QuestionEntry {
                number: answer.number,
                given: answer.given.clone(),
                expected: answer.expected.to_string(),
                passed: answer.correct,
            })
            .collect();

        Self {
            metadata: ReportMetadata {
                timestamp: Utc::now().to_rfc3339(),
                romanum_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            score: outcome.score(),
            total: outcome.total(),
            grade: outcome.grade(),
            questions,
        }
    }
}

/// Export a finished test to a JSON file
pub fn export_exam_report(outcome: &ExamOutcome, output_path: &Path) -> Result<()> {
    let report = ExamReport::from_outcome(outcome);

    let json =
        serde_json::to_string_pretty(&report).context("Failed to serialize test report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write test report to {}", output_path.display()))?;

    tracing::info!(path = %output_path.display(), score = report.score, "test report written");
    Ok(())
}
