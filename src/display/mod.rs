//! Output formatting for command results

pub mod table;

pub use table::render_config_table;

use crate::core::lines::ReverseSummary;
use crate::core::numbers::SumSquares;
use crate::core::substring::SubstringReport;
use crate::error::{AppError, DisplayError};
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| {
        DisplayError::Serialization {
            message: e.to_string(),
        }
        .into()
    })
}

pub fn render_sum_squares(result: &SumSquares, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format!("Sum of squares: {}", result.sum)),
        OutputFormat::Json => to_json(result),
    }
}

pub fn render_reverse(
    summary: &ReverseSummary,
    input: &Path,
    output: &Path,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Reversed {} lines from {} to {}",
            summary.lines,
            input.display(),
            output.display()
        )),
        OutputFormat::Json => to_json(&serde_json::json!({
            "input": input.display().to_string(),
            "output": output.display().to_string(),
            "lines": summary.lines,
            "bytes_written": summary.bytes_written,
        })),
    }
}

pub fn render_substring(report: &SubstringReport, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(report.message()),
        OutputFormat::Json => to_json(report),
    }
}
