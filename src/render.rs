//! Render — prints an [`ExtractionResult`] as text or JSON.

use hwlabel_core::config::OutputFormat;
use hwlabel_core::ExtractionResult;
use serde::Serialize;

/// JSON report shape. Field order is stable.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub raw_text: &'a str,
    pub hardware_id: Option<&'a str>,
    pub boot_tick: Option<&'a str>,
    pub valid: bool,
    pub formatted: String,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a ExtractionResult, placeholder: &str) -> Self {
        Self {
            raw_text: &result.raw_text,
            hardware_id: result.hardware_id.as_ref().map(|id| id.as_str()),
            boot_tick: result.boot_tick.as_ref().map(|t| t.as_str()),
            valid: result.is_valid(),
            formatted: result.formatted_with(placeholder),
        }
    }
}

/// Render `result` in the requested format. Text output has no trailing
/// newline; the caller decides how to terminate it.
pub fn render(
    result: &ExtractionResult,
    format: OutputFormat,
    placeholder: &str,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(result.formatted_with(placeholder)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Report::new(result, placeholder))?),
    }
}
