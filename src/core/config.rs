//! Configuration types for the recognizer stage.
//!
//! The engine and page-segmentation modes are the fixed integer sets the
//! external engine accepts; everything else (language code, binary location,
//! tessdata location) is passed through to the engine unchanged.

use serde::{Deserialize, Serialize};

/// Selects the recognition algorithm variant used by the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EngineMode {
    /// Legacy engine only.
    Legacy,
    /// Neural-net LSTM engine only.
    NeuralLstm,
    /// Whatever the engine considers its default.
    #[default]
    Default,
}

impl EngineMode {
    /// The `--oem` code understood by the engine.
    pub fn code(self) -> u8 {
        match self {
            Self::Legacy => 0,
            Self::NeuralLstm => 1,
            Self::Default => 3,
        }
    }

    /// Parses an `--oem` code back into a mode.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Legacy),
            1 => Some(Self::NeuralLstm),
            3 => Some(Self::Default),
            _ => None,
        }
    }
}

/// Assumed text layout guiding the engine's region detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PageSegMode {
    /// Fully automatic page segmentation.
    FullyAutomatic,
    /// A single column of text of variable sizes.
    SingleColumn,
    /// A single uniform block of text.
    #[default]
    Block,
    /// A single text line.
    SingleLine,
}

impl PageSegMode {
    /// The `--psm` code understood by the engine.
    pub fn code(self) -> u8 {
        match self {
            Self::FullyAutomatic => 3,
            Self::SingleColumn => 4,
            Self::Block => 6,
            Self::SingleLine => 7,
        }
    }

    /// Parses a `--psm` code back into a mode.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(Self::FullyAutomatic),
            4 => Some(Self::SingleColumn),
            6 => Some(Self::Block),
            7 => Some(Self::SingleLine),
            _ => None,
        }
    }
}

/// Configuration for invoking the external OCR engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Recognition language code (e.g. `eng`), passed through to the engine.
    pub language: String,
    /// Engine algorithm variant.
    pub engine_mode: EngineMode,
    /// Assumed page layout.
    pub page_seg_mode: PageSegMode,
    /// Path to the engine binary; `tesseract` on `PATH` when unset.
    pub binary_path: Option<String>,
    /// Override for the engine's language-data directory.
    pub tessdata_path: Option<String>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            engine_mode: EngineMode::default(),
            page_seg_mode: PageSegMode::default(),
            binary_path: None,
            tessdata_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_mode_codes_round_trip() {
        for mode in [EngineMode::Legacy, EngineMode::NeuralLstm, EngineMode::Default] {
            assert_eq!(EngineMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(EngineMode::from_code(2), None);
    }

    #[test]
    fn test_page_seg_mode_codes_round_trip() {
        for mode in [
            PageSegMode::FullyAutomatic,
            PageSegMode::SingleColumn,
            PageSegMode::Block,
            PageSegMode::SingleLine,
        ] {
            assert_eq!(PageSegMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(PageSegMode::from_code(11), None);
    }

    #[test]
    fn test_defaults_match_engine_defaults() {
        let config = RecognizerConfig::default();
        assert_eq!(config.language, "eng");
        assert_eq!(config.engine_mode.code(), 3);
        assert_eq!(config.page_seg_mode.code(), 6);
        assert!(config.binary_path.is_none());
    }
}
