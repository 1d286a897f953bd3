//! External OCR engine invocation.
//!
//! The pipeline treats recognition as an opaque service behind the
//! [`Recognize`] trait. The shipped implementation shells out to a Tesseract
//! installation; tests substitute stubs. Each invocation is independent and
//! the adapter holds no mutable state.

use crate::core::{OcrError, RecognizerConfig};
use image::GrayImage;
use std::process::Command;
use tracing::debug;

/// Extracts text from one preprocessed image.
///
/// An empty string is a successful result: the engine ran and found no text.
pub trait Recognize {
    /// Runs the engine on a binarized image and returns the extracted text.
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError>;
}

/// Recognizer backed by the `tesseract` command-line binary.
///
/// Construction probes the installation; a missing or broken binary is
/// reported up front instead of failing on the first item.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    config: RecognizerConfig,
    version: String,
}

impl TesseractRecognizer {
    /// Probes the engine installation and builds the recognizer.
    pub fn new(config: RecognizerConfig) -> Result<Self, OcrError> {
        let version = engine_version(binary_of(&config))?;
        debug!(version = %version, "tesseract available");
        Ok(Self { config, version })
    }

    /// The detected engine version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The configuration this recognizer invokes the engine with.
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }
}

impl Recognize for TesseractRecognizer {
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        // The engine reads from disk, so the binarized buffer goes through a
        // scoped temp file that is removed when this call returns.
        let input = tempfile::Builder::new()
            .prefix("ocr-studio-")
            .suffix(".png")
            .tempfile()?;
        image
            .save(input.path())
            .map_err(|e| OcrError::recognition_with_source("writing engine input", e))?;

        let binary = binary_of(&self.config);
        let mut cmd = Command::new(binary);
        cmd.arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .arg("--oem")
            .arg(self.config.engine_mode.code().to_string())
            .arg("--psm")
            .arg(self.config.page_seg_mode.code().to_string());
        if let Some(tessdata) = &self.config.tessdata_path {
            cmd.env("TESSDATA_PREFIX", tessdata);
        }

        debug!(
            binary = %binary,
            lang = %self.config.language,
            oem = self.config.engine_mode.code(),
            psm = self.config.page_seg_mode.code(),
            "invoking engine"
        );

        let output = cmd
            .output()
            .map_err(|e| OcrError::recognition_with_source(format!("running '{binary}'"), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::recognition(format!(
                "engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn binary_of(config: &RecognizerConfig) -> &str {
    config.binary_path.as_deref().unwrap_or("tesseract")
}

/// Queries `tesseract --version` and parses the version number.
pub fn engine_version(binary: &str) -> Result<String, OcrError> {
    let output = Command::new(binary)
        .arg("--version")
        .output()
        .map_err(|e| {
            OcrError::recognition_with_source(
                format!("'{binary}' is not installed or not on PATH"),
                e,
            )
        })?;

    if !output.status.success() {
        return Err(OcrError::recognition(format!(
            "'{binary} --version' exited with {}",
            output.status
        )));
    }

    // Tesseract prints the banner on stdout or stderr depending on version.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    Ok(parse_version_banner(&format!("{stdout}{stderr}")))
}

/// Pulls the version number out of the engine's banner, e.g.
/// `tesseract 5.3.0` or `tesseract v4.1.1`.
fn parse_version_banner(banner: &str) -> String {
    for line in banner.lines() {
        if line.contains("tesseract") {
            if let Some(version) = line.split_whitespace().nth(1) {
                return version.trim_start_matches('v').to_string();
            }
        }
    }
    "unknown".to_string()
}
