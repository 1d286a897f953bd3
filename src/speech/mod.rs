//! Speech synthesis via the Google Translate TTS endpoint.
//!
//! Downstream collaborator: turns text plus an opaque language code into MP3
//! bytes. The endpoint caps the text length per request, so input is split
//! into chunks on whitespace boundaries and the returned MP3 frames are
//! concatenated, which players accept as one stream.

use crate::core::OcrError;
use bytes::{Bytes, BytesMut};
use reqwest::Client;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Maximum characters the endpoint accepts per request.
pub const MAX_CHUNK_CHARS: usize = 100;

/// HTTP client for the speech-synthesis service.
#[derive(Debug, Clone)]
pub struct SpeechSynthesizer {
    client: Client,
    endpoint: String,
}

impl Default for SpeechSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSynthesizer {
    /// Creates a synthesizer against the public endpoint.
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

    /// Synthesizes `text` in `lang` and returns the MP3 bytes.
    pub async fn synthesize(&self, text: &str, lang: &str) -> Result<Bytes, OcrError> {
        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(OcrError::synthesis("nothing to speak"));
        }

        let total = chunks.len();
        let mut audio = BytesMut::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let total_param = total.to_string();
            let idx_param = idx.to_string();
            let textlen_param = chunk.chars().count().to_string();
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", lang),
                    ("q", chunk.as_str()),
                    ("total", total_param.as_str()),
                    ("idx", idx_param.as_str()),
                    ("textlen", textlen_param.as_str()),
                ])
                .send()
                .await
                .map_err(|e| OcrError::synthesis(format!("request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(OcrError::synthesis(format!(
                    "service returned HTTP {} for chunk {}/{}",
                    response.status(),
                    idx + 1,
                    total
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| OcrError::synthesis(format!("unreadable audio body: {e}")))?;
            audio.extend_from_slice(&bytes);
        }

        debug!(lang = %lang, chunks = total, bytes = audio.len(), "synthesized");
        Ok(audio.freeze())
    }
}

/// Splits text into chunks of at most `max_chars` characters, preferring
/// whitespace boundaries. A single token longer than the limit is split hard.
/// Whitespace-only input yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let word_chars: Vec<char> = word.chars().collect();
            for piece in word_chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { word_len + 1 };
        if current_len + needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
