//! The core module of the batch OCR pipeline.
//!
//! This module contains the fundamental components shared by every stage:
//! - Configuration types for the recognizer
//! - The error taxonomy
//!
//! It also re-exports the commonly used types for convenience.

pub mod config;
pub mod errors;

pub use config::{EngineMode, PageSegMode, RecognizerConfig};
pub use errors::OcrError;
