//! OCR Studio CLI
//!
//! Batch OCR over a folder or zip archive of images, with optional
//! translation and speech synthesis of the combined text.
//!
//! # Usage
//!
//! ```bash
//! ocr-studio batch scans/ --lang eng --psm 6 --out-dir out/
//! ocr-studio batch scans.zip --translate-to fr --speak --audio-out scans.mp3
//! ocr-studio translate out/output_combined.txt --to de
//! ocr-studio speak out/output_combined.txt --lang en --output speech.mp3
//! ```

mod cli;
mod config;
mod report;

use clap::{Parser, Subcommand};
use ocr_studio::{EngineMode, PageSegMode, RecognizerConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ocr-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract text from images, optionally translate and listen", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run OCR over every image in a folder or zip archive
    Batch {
        /// Directory of images, or a zip archive of images
        source: PathBuf,

        /// Recognition language code passed to the engine
        #[arg(long, default_value = "eng", env = "OCR_STUDIO_LANG")]
        lang: String,

        /// OCR engine mode: 0 (legacy), 1 (neural LSTM) or 3 (default)
        #[arg(long, default_value_t = 3)]
        oem: u8,

        /// Page segmentation mode: 3 (automatic), 4 (column), 6 (block) or 7 (line)
        #[arg(long, default_value_t = 6)]
        psm: u8,

        /// Path to the tesseract binary
        #[arg(long, env = "OCR_STUDIO_TESSERACT")]
        tesseract: Option<String>,

        /// Override for the tessdata directory
        #[arg(long, env = "OCR_STUDIO_TESSDATA")]
        tessdata: Option<String>,

        /// Write per-item .txt files and output_combined.txt into this directory
        #[arg(long = "out-dir")]
        out_dir: Option<PathBuf>,

        /// Output format (pretty, text, json)
        #[arg(long, default_value = "pretty")]
        output: String,

        /// Translate the combined text to this language code
        #[arg(long = "translate-to")]
        translate_to: Option<String>,

        /// Synthesize speech from the translated (or combined) text
        #[arg(long)]
        speak: bool,

        /// Where to write the MP3 when --speak is given
        #[arg(long = "audio-out", default_value = "speech.mp3")]
        audio_out: PathBuf,
    },
    /// Translate a text file
    Translate {
        /// Text file to translate
        input: PathBuf,

        /// Target language code
        #[arg(long)]
        to: String,

        /// Write the translation here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Synthesize a text file to MP3 audio
    Speak {
        /// Text file to read aloud
        input: PathBuf,

        /// Speech language code
        #[arg(long, default_value = "en")]
        lang: String,

        /// Where to write the MP3
        #[arg(long, default_value = "speech.mp3")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    ocr_studio::utils::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Batch {
            source,
            lang,
            oem,
            psm,
            tesseract,
            tessdata,
            out_dir,
            output,
            translate_to,
            speak,
            audio_out,
        } => {
            let engine_mode = EngineMode::from_code(oem)
                .ok_or_else(|| format!("invalid --oem {oem}: expected 0, 1 or 3"))?;
            let page_seg_mode = PageSegMode::from_code(psm)
                .ok_or_else(|| format!("invalid --psm {psm}: expected 3, 4, 6 or 7"))?;

            let job = config::BatchJobConfig {
                source,
                recognizer: RecognizerConfig {
                    language: lang,
                    engine_mode,
                    page_seg_mode,
                    binary_path: tesseract,
                    tessdata_path: tessdata,
                },
                out_dir,
                output,
                translate_to,
                speak,
                audio_out,
            };
            cli::run_batch(job).await?;
        }
        Commands::Translate { input, to, output } => {
            cli::run_translate(&input, &to, output.as_deref()).await?;
        }
        Commands::Speak {
            input,
            lang,
            output,
        } => {
            cli::run_speak(&input, &lang, &output).await?;
        }
    }

    Ok(())
}
