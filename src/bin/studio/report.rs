//! Serializable report types for the `json` output format.

use ocr_studio::BatchOutput;
use serde::Serialize;

/// One item's outcome in the JSON report.
#[derive(Debug, Serialize)]
pub struct ItemReport {
    pub name: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full batch outcome in the JSON report.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub success: bool,
    pub item_count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub items: Vec<ItemReport>,
    pub combined_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<f64>,
}

impl BatchReport {
    /// Builds a report from a finished batch.
    pub fn from_output(output: &BatchOutput, processing_time_ms: f64) -> Self {
        let items = output
            .results
            .iter()
            .map(|result| ItemReport {
                name: result.name.clone(),
                success: result.is_success(),
                text: result.text().map(str::to_string),
                error: result.error().map(|e| e.to_string()),
            })
            .collect();

        Self {
            success: true,
            item_count: output.len(),
            success_count: output.success_count(),
            failure_count: output.failure_count(),
            items,
            combined_text: output.combined_text(),
            translated_text: None,
            processing_time_ms: Some(processing_time_ms),
        }
    }
}
