//! Batch source enumeration.
//!
//! A batch source is either a directory of images or a zip archive of images.
//! Enumeration produces the ordered list of items to process, filtered by
//! recognized image extensions. Archives are expanded into a temporary
//! directory that lives exactly as long as the returned [`SourceListing`];
//! the directory is removed when the listing drops, on every exit path.
//!
//! Ordering follows whatever the underlying directory (or extraction
//! directory) listing returns. It is not sorted, and callers must not assume
//! lexical order.

use crate::core::OcrError;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Filename extensions recognized as processable images (case-insensitive).
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "tif", "tiff"];

/// Returns true if the path carries a recognized image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// One image queued for processing.
///
/// Items carry a name and a readable path rather than decoded pixels so that
/// decoding happens per item inside the batch loop; a corrupted file then
/// fails only its own item instead of the whole enumeration.
#[derive(Debug, Clone)]
pub struct SourceItem {
    /// The item's name within its source (the file name).
    pub name: String,
    /// Path the item can be read from for the duration of the batch.
    pub path: PathBuf,
}

/// A batch input: a directory of images or a zip archive of images.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A filesystem directory scanned non-recursively.
    Directory(PathBuf),
    /// A zip archive expanded into a temporary directory.
    Archive(PathBuf),
}

impl ImageSource {
    /// Classifies a path as a directory or archive source.
    ///
    /// Anything that is neither an existing directory nor an existing `.zip`
    /// file is rejected with `InvalidSource` before any processing starts.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, OcrError> {
        let path = path.into();
        if path.is_dir() {
            return Ok(Self::Directory(path));
        }
        let is_zip = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
        if path.is_file() && is_zip {
            return Ok(Self::Archive(path));
        }
        Err(OcrError::invalid_source(
            path,
            "not a directory and not a zip archive",
        ))
    }

    /// Enumerates the source into an ordered, filtered listing.
    pub fn open(&self) -> Result<SourceListing, OcrError> {
        match self {
            Self::Directory(path) => SourceListing::from_dir(path),
            Self::Archive(path) => {
                let file = File::open(path)
                    .map_err(|e| OcrError::invalid_source(path, e.to_string()))?;
                SourceListing::from_zip_reader(file, path)
            }
        }
    }
}

/// Enumerated items plus the scope guard for any temporary extraction.
///
/// When the source was an archive, the extraction directory is owned here and
/// removed on drop; items remain readable only while the listing is alive.
#[derive(Debug)]
pub struct SourceListing {
    items: Vec<SourceItem>,
    _extracted: Option<TempDir>,
}

impl SourceListing {
    /// Enumerates a directory in listing order, keeping only regular files
    /// with a recognized image extension.
    pub fn from_dir(dir: &Path) -> Result<Self, OcrError> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| OcrError::invalid_source(dir, e.to_string()))?;

        let mut items = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type()?.is_file() || !is_supported_image(&path) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            debug!(item = %name, "queued");
            items.push(SourceItem { name, path });
        }

        Ok(Self {
            items,
            _extracted: None,
        })
    }

    /// Enumerates a zip archive held in memory.
    pub fn from_zip_bytes(bytes: &[u8]) -> Result<Self, OcrError> {
        Self::from_zip_reader(Cursor::new(bytes), Path::new("<archive bytes>"))
    }

    fn from_zip_reader<R>(reader: R, origin: &Path) -> Result<Self, OcrError>
    where
        R: std::io::Read + std::io::Seek,
    {
        let mut archive = zip::ZipArchive::new(reader)
            .map_err(|e| OcrError::invalid_source(origin, format!("not a valid archive: {e}")))?;

        let extracted = TempDir::new()?;
        archive
            .extract(extracted.path())
            .map_err(|e| OcrError::invalid_source(origin, format!("extraction failed: {e}")))?;
        debug!(dir = %extracted.path().display(), entries = archive.len(), "archive extracted");

        let mut listing = Self::from_dir(extracted.path())?;
        listing._extracted = Some(extracted);
        Ok(listing)
    }

    /// The items to process, in enumeration order.
    pub fn items(&self) -> &[SourceItem] {
        &self.items
    }

    /// Number of enumerated items. Zero is a valid, empty batch.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when no item matched the extension filter.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn png_bytes() -> Vec<u8> {
        let img = image::GrayImage::from_pixel(2, 2, image::Luma([128u8]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            let options = zip::write::SimpleFileOptions::default();
            for (name, data) in entries {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn test_supported_extension_filter() {
        assert!(is_supported_image(Path::new("scan.png")));
        assert!(is_supported_image(Path::new("scan.PNG")));
        assert!(is_supported_image(Path::new("page.Tiff")));
        assert!(!is_supported_image(Path::new("notes.docx")));
        assert!(!is_supported_image(Path::new("archive.zip")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn test_directory_enumeration_filters_by_extension() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), png_bytes()).unwrap();
        std::fs::write(dir.path().join("b.JPG"), b"jpeg-ish").unwrap();
        std::fs::write(dir.path().join("notes.docx"), b"word").unwrap();
        std::fs::create_dir(dir.path().join("sub.png")).unwrap();

        let listing = SourceListing::from_dir(dir.path()).unwrap();
        let mut names: Vec<&str> = listing.items().iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a.png", "b.JPG"]);
    }

    #[test]
    fn test_empty_directory_is_a_valid_empty_batch() {
        let dir = tempdir().unwrap();
        let listing = SourceListing::from_dir(dir.path()).unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn test_invalid_path_rejected_before_processing() {
        let err = ImageSource::from_path("/definitely/not/here").unwrap_err();
        assert!(matches!(err, OcrError::InvalidSource { .. }));
    }

    #[test]
    fn test_plain_file_is_not_a_source() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("readme.txt");
        std::fs::write(&file, b"hello").unwrap();
        let err = ImageSource::from_path(&file).unwrap_err();
        assert!(matches!(err, OcrError::InvalidSource { .. }));
    }

    #[test]
    fn test_non_archive_bytes_rejected() {
        let err = SourceListing::from_zip_bytes(b"this is not a zip").unwrap_err();
        assert!(matches!(err, OcrError::InvalidSource { .. }));
    }

    #[test]
    fn test_archive_enumeration_and_filtering() {
        let png = png_bytes();
        let bytes = zip_with(&[
            ("scan.PNG", png.as_slice()),
            ("cover.jpeg", b"jpeg-ish"),
            ("notes.docx", b"word"),
        ]);

        let listing = SourceListing::from_zip_bytes(&bytes).unwrap();
        let mut names: Vec<&str> = listing.items().iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["cover.jpeg", "scan.PNG"]);

        // Items are readable for as long as the listing is alive.
        for item in listing.items() {
            assert!(item.path.exists());
        }
    }

    #[test]
    fn test_archive_with_no_images_yields_empty_batch() {
        let bytes = zip_with(&[("readme.md", b"no images here".as_slice())]);
        let listing = SourceListing::from_zip_bytes(&bytes).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_extraction_dir_removed_when_listing_drops() {
        let bytes = zip_with(&[("scan.png", png_bytes().as_slice())]);
        let listing = SourceListing::from_zip_bytes(&bytes).unwrap();
        let extracted_path = listing.items()[0].path.parent().unwrap().to_path_buf();
        assert!(extracted_path.exists());
        drop(listing);
        assert!(!extracted_path.exists());
    }

    #[test]
    fn test_archive_source_round_trip_from_path() {
        let dir = tempdir().unwrap();
        let zip_path = dir.path().join("batch.zip");
        std::fs::write(&zip_path, zip_with(&[("p.png", png_bytes().as_slice())])).unwrap();

        let source = ImageSource::from_path(&zip_path).unwrap();
        assert!(matches!(source, ImageSource::Archive(_)));
        let listing = source.open().unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.items()[0].name, "p.png");
    }
}
