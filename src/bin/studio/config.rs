//! Configuration types for the CLI driver.

use ocr_studio::RecognizerConfig;
use std::path::PathBuf;

/// Everything one batch invocation needs.
pub struct BatchJobConfig {
    pub source: PathBuf,
    pub recognizer: RecognizerConfig,
    /// When set, per-item `.txt` files and `output_combined.txt` land here.
    pub out_dir: Option<PathBuf>,
    /// Output format: `pretty`, `text` or `json`.
    pub output: String,
    /// Target language for translating the combined text.
    pub translate_to: Option<String>,
    /// Synthesize speech from the translated (or combined) text.
    pub speak: bool,
    /// Where the MP3 goes when `speak` is set.
    pub audio_out: PathBuf,
}
