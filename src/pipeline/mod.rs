//! The batch OCR pipeline module.
//!
//! [`BatchRunner`] drives enumerated items through preprocessing and
//! recognition; [`BatchOutput`] carries the per-item results and the derived
//! combined text.

pub mod batch;
pub mod result;

pub use batch::BatchRunner;
pub use result::{BatchOutput, ItemOutcome, ProcessingResult};
