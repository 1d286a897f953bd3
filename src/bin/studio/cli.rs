//! Command implementations for the CLI driver.

use crate::config::BatchJobConfig;
use crate::report::BatchReport;
use ocr_studio::{
    BatchOutput, BatchRunner, ImageSource, SpeechSynthesizer, TesseractRecognizer, Translator,
};
use std::path::Path;
use std::time::Instant;
use tracing::info;

type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Runs the OCR batch and the optional downstream stages.
pub async fn run_batch(config: BatchJobConfig) -> CliResult {
    info!("Initializing OCR engine...");
    let recognizer = TesseractRecognizer::new(config.recognizer.clone())?;
    info!(version = %recognizer.version(), "Engine ready");

    let source = ImageSource::from_path(&config.source)?;
    let runner = BatchRunner::new(recognizer);

    let ocr_start = Instant::now();
    let output = runner.run_source(&source)?;
    let processing_time = ocr_start.elapsed();
    info!(
        items = output.len(),
        failed = output.failure_count(),
        ms = processing_time.as_secs_f64() * 1000.0,
        "Batch complete"
    );

    if let Some(ref out_dir) = config.out_dir {
        write_outputs(&output, out_dir)?;
    }

    // Downstream stages are independent of the batch: a failure here is
    // reported but the OCR results above are already complete and persisted.
    let mut translated: Option<String> = None;
    if let Some(ref target) = config.translate_to {
        match Translator::new().translate(&output.combined_text(), target).await {
            Ok(text) => {
                if let Some(ref out_dir) = config.out_dir {
                    std::fs::write(out_dir.join(format!("translated_{target}.txt")), &text)?;
                }
                translated = Some(text);
            }
            Err(e) => eprintln!("Translation failed: {e}"),
        }
    }

    if config.speak {
        let lang = config.translate_to.as_deref().unwrap_or("en");
        let text_to_speak = translated
            .clone()
            .unwrap_or_else(|| output.combined_text());
        match SpeechSynthesizer::new().synthesize(&text_to_speak, lang).await {
            Ok(audio) => {
                std::fs::write(&config.audio_out, &audio)?;
                info!(path = %config.audio_out.display(), bytes = audio.len(), "Audio written");
            }
            Err(e) => eprintln!("Speech synthesis failed: {e}"),
        }
    }

    print_output(
        &output,
        translated,
        &config.output,
        processing_time.as_secs_f64() * 1000.0,
    )?;

    Ok(())
}

/// Translates a text file and prints (or writes) the result.
pub async fn run_translate(
    input: &Path,
    target: &str,
    output: Option<&Path>,
) -> CliResult {
    let text = std::fs::read_to_string(input)?;
    let translated = Translator::new().translate(&text, target).await?;
    match output {
        Some(path) => {
            std::fs::write(path, &translated)?;
            info!(path = %path.display(), "Translation written");
        }
        None => println!("{translated}"),
    }
    Ok(())
}

/// Synthesizes a text file to an MP3 file.
pub async fn run_speak(input: &Path, lang: &str, output: &Path) -> CliResult {
    let text = std::fs::read_to_string(input)?;
    let audio = SpeechSynthesizer::new().synthesize(&text, lang).await?;
    std::fs::write(output, &audio)?;
    info!(path = %output.display(), bytes = audio.len(), "Audio written");
    Ok(())
}

/// Persists one `.txt` per successful item plus the combined document.
fn write_outputs(output: &BatchOutput, out_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(out_dir)?;
    for result in output.successes() {
        let stem = Path::new(&result.name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| result.name.clone());
        if let Some(text) = result.text() {
            std::fs::write(out_dir.join(format!("{stem}.txt")), text)?;
        }
    }
    std::fs::write(out_dir.join("output_combined.txt"), output.combined_text())?;
    Ok(())
}

/// Prints the batch outcome in the requested format.
fn print_output(
    output: &BatchOutput,
    translated: Option<String>,
    format: &str,
    processing_time_ms: f64,
) -> CliResult {
    match format {
        "json" => {
            let mut report = BatchReport::from_output(output, processing_time_ms);
            report.translated_text = translated;
            println!("{}", serde_json::to_string(&report)?);
        }
        "text" => {
            print!("{}", output.combined_text());
        }
        _ => {
            println!("\n=== OCR Batch Results ===");
            println!("Items: {}", output.len());
            println!("Succeeded: {}", output.success_count());
            println!("Failed: {}", output.failure_count());
            println!("Processing time: {processing_time_ms:.2}ms");
            println!();

            for result in &output.results {
                match result.text() {
                    Some(text) => {
                        println!("[ok]   {} ({} chars)", result.name, text.trim().len())
                    }
                    None => println!(
                        "[fail] {}: {}",
                        result.name,
                        result.error().map(|e| e.to_string()).unwrap_or_default()
                    ),
                }
            }

            if output.success_count() > 0 {
                println!("\n--- Combined Text ---");
                println!("{}", output.combined_text());
            } else {
                println!("\nNo text extracted.");
            }

            if let Some(translated) = translated {
                println!("--- Translated ---");
                println!("{translated}");
            }
        }
    }
    Ok(())
}
