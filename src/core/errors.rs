//! Core error types for the batch OCR pipeline.
//!
//! This module defines the error taxonomy used throughout the pipeline.
//! Source-level errors abort a batch before any item is processed; item-level
//! errors are recorded in that item's result and never cross the batch
//! boundary. Downstream collaborator errors (translation, speech) are
//! independent of the OCR batch and never invalidate already-produced results.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the OCR pipeline and its collaborators.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The batch source is neither a readable directory nor a valid archive.
    ///
    /// Raised before any item is processed; nothing is salvaged.
    #[error("invalid source '{path}': {reason}", path = .path.display())]
    InvalidSource {
        /// The path that was rejected.
        path: PathBuf,
        /// Why it was rejected.
        reason: String,
    },

    /// An image could not be decoded.
    ///
    /// Recorded per item; the batch continues with the next item.
    #[error("failed to decode '{name}'")]
    Decode {
        /// Name of the item whose bytes could not be decoded.
        name: String,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// The external OCR engine could not be run or reported failure.
    ///
    /// Recorded per item; the batch continues with the next item. Also raised
    /// at recognizer construction when the engine is not installed.
    #[error("recognition failed: {context}")]
    Recognition {
        /// What the engine was asked to do when it failed.
        context: String,
        /// The underlying error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The downstream translation service failed.
    #[error("translation failed: {message}")]
    Translation {
        /// A message describing the failure.
        message: String,
    },

    /// The downstream speech-synthesis service failed.
    #[error("speech synthesis failed: {message}")]
    Synthesis {
        /// A message describing the failure.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl OcrError {
    /// Creates an `InvalidSource` error for the given path.
    pub fn invalid_source(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidSource {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `Recognition` error without an underlying cause.
    pub fn recognition(context: impl Into<String>) -> Self {
        Self::Recognition {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a `Recognition` error wrapping an underlying cause.
    pub fn recognition_with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Recognition {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a `Translation` error.
    pub fn translation(message: impl Into<String>) -> Self {
        Self::Translation {
            message: message.into(),
        }
    }

    /// Creates a `Synthesis` error.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Returns true for errors that are recorded per item rather than
    /// aborting the batch.
    pub fn is_item_level(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Recognition { .. })
    }
}
