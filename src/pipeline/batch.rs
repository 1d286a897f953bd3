//! Batch driver with per-item failure isolation.
//!
//! Items flow strictly forward through decode → binarize → recognize, one at
//! a time in enumeration order. A failure in either stage is recorded in that
//! item's result and the batch moves on; one bad scan never takes down the
//! run. Only an unusable source aborts, and that happens before any item is
//! touched.

use crate::core::OcrError;
use crate::pipeline::{BatchOutput, ItemOutcome, ProcessingResult};
use crate::processors;
use crate::recognizer::Recognize;
use crate::source::{ImageSource, SourceItem};
use crate::utils;
use tracing::{info, warn};

/// Drives per-item processing and assembles the [`BatchOutput`].
#[derive(Debug)]
pub struct BatchRunner<R> {
    recognizer: R,
}

impl<R: Recognize> BatchRunner<R> {
    /// Creates a runner around a recognizer.
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Opens a source and processes everything it enumerates.
    ///
    /// An unusable source fails here, before any item is processed. When the
    /// source is an archive, its temporary extraction directory lives exactly
    /// as long as this call.
    pub fn run_source(&self, source: &ImageSource) -> Result<BatchOutput, OcrError> {
        let listing = source.open()?;
        info!(items = listing.len(), "batch enumerated");
        Ok(self.run(listing.items()))
    }

    /// Processes the given items in order.
    ///
    /// Produces exactly one result per item, in the same order. Item failures
    /// are recorded, not propagated.
    pub fn run(&self, items: &[SourceItem]) -> BatchOutput {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            let outcome = match self.process_item(item) {
                Ok(text) => {
                    info!(item = %item.name, chars = text.len(), "processed");
                    ItemOutcome::Text(text)
                }
                Err(err) => {
                    warn!(item = %item.name, error = %err, "item failed");
                    ItemOutcome::Failed(err)
                }
            };
            results.push(ProcessingResult {
                name: item.name.clone(),
                outcome,
            });
        }
        BatchOutput { results }
    }

    fn process_item(&self, item: &SourceItem) -> Result<String, OcrError> {
        let image = utils::load_image(&item.path, &item.name)?;
        let binarized = processors::binarize(&image);
        self.recognizer.recognize(&binarized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;
    use std::cell::RefCell;
    use std::io::{Cursor, Write};
    use std::path::Path;
    use tempfile::tempdir;

    /// Recognizer stub returning scripted outcomes in call order.
    struct ScriptedRecognizer {
        script: RefCell<std::vec::IntoIter<Result<String, OcrError>>>,
    }

    impl ScriptedRecognizer {
        fn new(script: Vec<Result<String, OcrError>>) -> Self {
            Self {
                script: RefCell::new(script.into_iter()),
            }
        }
    }

    impl Recognize for ScriptedRecognizer {
        fn recognize(&self, _image: &GrayImage) -> Result<String, OcrError> {
            self.script
                .borrow_mut()
                .next()
                .expect("recognizer invoked more times than scripted")
        }
    }

    fn write_png(dir: &Path, name: &str) {
        let img = GrayImage::from_pixel(4, 4, image::Luma([200u8]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        std::fs::write(dir.join(name), bytes).unwrap();
    }

    fn items(dir: &Path, names: &[&str]) -> Vec<SourceItem> {
        names
            .iter()
            .map(|name| SourceItem {
                name: (*name).to_string(),
                path: dir.join(name),
            })
            .collect()
    }

    #[test]
    fn test_one_result_per_item_in_order() {
        let dir = tempdir().unwrap();
        for name in ["a.png", "b.png", "c.png"] {
            write_png(dir.path(), name);
        }
        let runner = BatchRunner::new(ScriptedRecognizer::new(vec![
            Ok("alpha".to_string()),
            Ok("beta".to_string()),
            Ok("gamma".to_string()),
        ]));

        let output = runner.run(&items(dir.path(), &["a.png", "b.png", "c.png"]));
        assert_eq!(output.len(), 3);
        let names: Vec<&str> = output.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_failure_is_isolated_to_its_item() {
        let dir = tempdir().unwrap();
        for name in ["a.png", "b.png", "c.png"] {
            write_png(dir.path(), name);
        }
        let runner = BatchRunner::new(ScriptedRecognizer::new(vec![
            Ok("alpha".to_string()),
            Err(OcrError::recognition("engine crashed")),
            Ok("gamma".to_string()),
        ]));

        let output = runner.run(&items(dir.path(), &["a.png", "b.png", "c.png"]));
        assert_eq!(output.len(), 3);
        assert!(output.results[0].is_success());
        assert!(!output.results[1].is_success());
        assert!(output.results[2].is_success());

        let combined = output.combined_text();
        assert!(combined.contains("--- a.png ---"));
        assert!(!combined.contains("b.png"));
        assert!(combined.contains("--- c.png ---"));
    }

    #[test]
    fn test_corrupted_image_records_decode_error_and_continues() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "good.png");
        std::fs::File::create(dir.path().join("broken.png"))
            .unwrap()
            .write_all(b"not really a png")
            .unwrap();
        write_png(dir.path(), "tail.png");

        // The broken item never reaches the recognizer.
        let runner = BatchRunner::new(ScriptedRecognizer::new(vec![
            Ok("first".to_string()),
            Ok("last".to_string()),
        ]));

        let output = runner.run(&items(dir.path(), &["good.png", "broken.png", "tail.png"]));
        assert_eq!(output.len(), 3);
        assert!(matches!(
            output.results[1].error(),
            Some(OcrError::Decode { .. })
        ));
        assert!(output.results[2].is_success());
    }

    #[test]
    fn test_mixed_batch_matches_expected_sections() {
        // Three valid images (one of them yielding empty text) plus one
        // corrupted file: four results, three combined sections.
        let dir = tempdir().unwrap();
        for name in ["one.png", "two.png", "blank.png"] {
            write_png(dir.path(), name);
        }
        std::fs::write(dir.path().join("corrupt.png"), b"garbage").unwrap();

        let runner = BatchRunner::new(ScriptedRecognizer::new(vec![
            Ok("line one".to_string()),
            Ok("line two".to_string()),
            Ok(String::new()),
        ]));

        let output = runner.run(&items(
            dir.path(),
            &["one.png", "two.png", "blank.png", "corrupt.png"],
        ));
        assert_eq!(output.len(), 4);
        assert_eq!(output.success_count(), 3);
        assert_eq!(output.combined_text().matches("--- ").count(), 3);
        assert!(output.results[3].error().is_some());
    }

    #[test]
    fn test_empty_item_list_yields_empty_output() {
        let runner = BatchRunner::new(ScriptedRecognizer::new(Vec::new()));
        let output = runner.run(&[]);
        assert!(output.is_empty());
        assert_eq!(output.combined_text(), "");
    }

    #[test]
    fn test_run_source_rejects_invalid_source() {
        let runner = BatchRunner::new(ScriptedRecognizer::new(Vec::new()));
        let source = ImageSource::Directory("/definitely/not/here".into());
        let err = runner.run_source(&source).unwrap_err();
        assert!(matches!(err, OcrError::InvalidSource { .. }));
    }

    #[test]
    fn test_run_source_over_directory() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "page.png");
        std::fs::write(dir.path().join("skip.docx"), b"word").unwrap();

        let runner = BatchRunner::new(ScriptedRecognizer::new(vec![Ok("hello".to_string())]));
        let source = ImageSource::from_path(dir.path()).unwrap();
        let output = runner.run_source(&source).unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output.results[0].text(), Some("hello"));
    }
}
