//! Result types for batch processing.

use crate::core::OcrError;
use std::fmt;

/// Outcome of processing one item.
///
/// Exactly one variant holds per item: recognition either produced text
/// (possibly empty — the engine ran and found nothing) or the item failed at
/// some stage and carries the error instead.
#[derive(Debug)]
pub enum ItemOutcome {
    /// Extracted text. Empty text is success, not failure.
    Text(String),
    /// The failure that stopped this item; later items are unaffected.
    Failed(OcrError),
}

/// Outcome for one item, tagged with the item's name.
#[derive(Debug)]
pub struct ProcessingResult {
    /// Name of the source item this result belongs to.
    pub name: String,
    /// What happened to it.
    pub outcome: ItemOutcome,
}

impl ProcessingResult {
    /// The extracted text, when the item succeeded.
    pub fn text(&self) -> Option<&str> {
        match &self.outcome {
            ItemOutcome::Text(text) => Some(text),
            ItemOutcome::Failed(_) => None,
        }
    }

    /// The failure, when the item failed.
    pub fn error(&self) -> Option<&OcrError> {
        match &self.outcome {
            ItemOutcome::Text(_) => None,
            ItemOutcome::Failed(err) => Some(err),
        }
    }

    /// Returns true when the item produced text.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Text(_))
    }
}

/// Aggregate output of one batch run.
///
/// Holds one [`ProcessingResult`] per enumerated item, in enumeration order.
/// The combined text is derived purely from the successful results and their
/// order; no other state influences it.
#[derive(Debug, Default)]
pub struct BatchOutput {
    /// Per-item results, one per input item, in enumeration order.
    pub results: Vec<ProcessingResult>,
}

impl BatchOutput {
    /// Number of processed items (successes and failures).
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true for a batch with no items.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over the items that produced text, in order.
    pub fn successes(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results.iter().filter(|r| r.is_success())
    }

    /// Iterates over the items that failed, in order.
    pub fn failures(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    /// Number of items that produced text.
    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    /// Number of items that failed.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Concatenates every successful item's text under a header naming it.
    ///
    /// Each section is `\n--- {name} ---\n{text}\n` with the text trimmed of
    /// surrounding whitespace. Failed items contribute nothing; a batch with
    /// no successes yields the empty string.
    pub fn combined_text(&self) -> String {
        let mut combined = String::new();
        for result in self.successes() {
            if let Some(text) = result.text() {
                combined.push_str(&format!("\n--- {} ---\n{}\n", result.name, text.trim()));
            }
        }
        combined
    }
}

impl fmt::Display for BatchOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Batch: {} items, {} succeeded, {} failed",
            self.len(),
            self.success_count(),
            self.failure_count()
        )?;
        for result in &self.results {
            match &result.outcome {
                ItemOutcome::Text(text) => {
                    writeln!(f, "  {} -> {} chars", result.name, text.len())?
                }
                ItemOutcome::Failed(err) => writeln!(f, "  {} -> error: {}", result.name, err)?,
            }
        }
        Ok(())
    }
}
