//! Text translation via the Google Translate web endpoint.
//!
//! Downstream collaborator: takes the combined OCR text and an opaque target
//! language code, returns translated text. A translation failure never
//! touches already-produced OCR results.

use crate::core::OcrError;
use reqwest::Client;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// HTTP client for the translation service.
#[derive(Debug, Clone)]
pub struct Translator {
    client: Client,
    endpoint: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Creates a translator against the public endpoint.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Overrides the service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Translates `text` into `target_lang` (an opaque language code passed
    /// through to the service, e.g. `fr` or `zh-cn`).
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<String, OcrError> {
        if text.trim().is_empty() {
            return Err(OcrError::translation("no text to translate"));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| OcrError::translation(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(OcrError::translation(format!(
                "service returned HTTP {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| OcrError::translation(format!("unreadable response: {e}")))?;

        let translated = collect_segments(&body)
            .ok_or_else(|| OcrError::translation("unexpected response shape"))?;
        debug!(target = %target_lang, chars = translated.len(), "translated");
        Ok(translated)
    }
}

/// Joins the translated segments out of the service's nested-array response:
/// `[[["segment", "original", ...], ...], ...]`.
fn collect_segments(body: &serde_json::Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(part);
        }
    }
    Some(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_segments_joins_parts() {
        let body = json!([[["Bonjour ", "Hello ", null], ["le monde", "world", null]], null, "en"]);
        assert_eq!(collect_segments(&body).as_deref(), Some("Bonjour le monde"));
    }

    #[test]
    fn test_collect_segments_rejects_unexpected_shape() {
        assert!(collect_segments(&json!({"error": "nope"})).is_none());
        assert!(collect_segments(&json!("plain string")).is_none());
    }

    #[tokio::test]
    async fn test_empty_text_is_a_translation_error() {
        let err = Translator::new().translate("   ", "fr").await.unwrap_err();
        assert!(matches!(err, OcrError::Translation { .. }));
    }
}
