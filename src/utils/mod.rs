//! Utility functions shared across the pipeline: logging setup and image
//! loading.

use crate::core::OcrError;
use image::DynamicImage;
use std::path::Path;

/// Initializes the tracing subscriber from `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Loads and decodes an image, attributing failures to the named item.
pub fn load_image(path: &Path, name: &str) -> Result<DynamicImage, OcrError> {
    image::open(path).map_err(|source| OcrError::Decode {
        name: name.to_string(),
        source,
    })
}
