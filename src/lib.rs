//! Batch OCR pipeline with optional translation and speech synthesis.
//!
//! The pipeline enumerates images from a directory or zip archive, binarizes
//! each one, hands it to an external OCR engine, and aggregates per-item and
//! combined text while isolating individual item failures. Translation and
//! speech synthesis are downstream collaborators consuming the combined text.
//!
//! # Example
//!
//! ```no_run
//! use ocr_studio::{BatchRunner, ImageSource, RecognizerConfig, TesseractRecognizer};
//!
//! # fn main() -> Result<(), ocr_studio::OcrError> {
//! let recognizer = TesseractRecognizer::new(RecognizerConfig::default())?;
//! let runner = BatchRunner::new(recognizer);
//!
//! let source = ImageSource::from_path("scans/")?;
//! let output = runner.run_source(&source)?;
//!
//! for result in &output.results {
//!     match result.text() {
//!         Some(text) => println!("{}: {} chars", result.name, text.len()),
//!         None => eprintln!("{}: {}", result.name, result.error().unwrap()),
//!     }
//! }
//! println!("{}", output.combined_text());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod pipeline;
pub mod processors;
pub mod recognizer;
pub mod source;
pub mod speech;
pub mod translate;
pub mod utils;

pub use crate::core::{EngineMode, OcrError, PageSegMode, RecognizerConfig};
pub use crate::pipeline::{BatchOutput, BatchRunner, ItemOutcome, ProcessingResult};
pub use crate::recognizer::{Recognize, TesseractRecognizer};
pub use crate::source::{ImageSource, SourceItem, SourceListing};
pub use crate::speech::SpeechSynthesizer;
pub use crate::translate::Translator;
