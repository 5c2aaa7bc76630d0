//! The resume document shipped with the app.
//!
//! The webview previews it through the asset protocol, which only the webview
//! can reach. "Open" therefore hands the OS a copy on disk, and "Download"
//! writes one wherever the user picks.

use std::path::{Path, PathBuf};

use anyhow::Context;
use dioxus::prelude::*;
use portfolio_core::ResumeAsset;
use rfd::FileDialog;

const RESUME_PDF: Asset = asset!("/assets/resume.pdf");
const RESUME_BYTES: &[u8] = include_bytes!("../assets/resume.pdf");

/// Name offered when saving or opening the bundled copy
pub const FILE_NAME: &str = "resume.pdf";

/// The resume the dialog shows
#[derive(Clone, Debug, PartialEq)]
pub struct ResumeDocument {
    pub asset: ResumeAsset,
    /// Shipped with the app, so downloads go through a save dialog
    pub bundled: bool,
}

impl ResumeDocument {
    /// A document at a location given by content or the command line
    pub fn linked(url: impl Into<String>) -> Self {
        Self {
            asset: ResumeAsset::new(url),
            bundled: false,
        }
    }

    /// The bundled document, with an on-disk copy in `copy_dir` for the OS viewer
    pub fn bundled(copy_dir: &Path) -> Self {
        let asset = ResumeAsset::new(RESUME_PDF.to_string()).with_file_name(FILE_NAME);
        let asset = match write_copy(copy_dir) {
            Ok(path) => asset.with_open_url(file_url(&path)),
            Err(e) => {
                tracing::warn!("Could not place resume copy in {:?}: {:?}", copy_dir, e);
                asset
            }
        };
        Self {
            asset,
            bundled: true,
        }
    }

    /// Linked document when a location is given, the bundled one otherwise
    pub fn resolve(resume_url: Option<&str>, copy_dir: &Path) -> Self {
        match resume_url {
            Some(url) => Self::linked(url),
            None => Self::bundled(copy_dir),
        }
    }
}

/// Where the on-disk copy lives
pub fn default_copy_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("portfolio-desktop")
}

fn write_copy(dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(FILE_NAME);
    std::fs::write(&path, RESUME_BYTES)?;
    Ok(path)
}

fn file_url(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    if path.starts_with('/') {
        format!("file://{}", path)
    } else {
        format!("file:///{}", path)
    }
}

/// Ask where to save the bundled resume and write it there.
///
/// `Ok(None)` when the user cancels the dialog.
pub async fn save_copy(file_name: String) -> anyhow::Result<Option<PathBuf>> {
    // Open save dialog (blocking, but in spawn_blocking so UI stays responsive)
    let picked = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_title("Save Resume")
            .set_file_name(file_name)
            .save_file()
    })
    .await
    .context("save dialog task failed")?;

    let Some(path) = picked else {
        return Ok(None);
    };
    tokio::fs::write(&path, RESUME_BYTES)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Saved resume to {:?}", path);
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bundled_document_is_a_pdf() {
        assert!(RESUME_BYTES.starts_with(b"%PDF-"));
        assert!(RESUME_BYTES.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn copy_matches_bundled_bytes() {
        let dir = TempDir::new().unwrap();
        let path = write_copy(&dir.path().join("nested")).unwrap();
        assert_eq!(path.file_name().unwrap(), FILE_NAME);
        assert_eq!(std::fs::read(&path).unwrap(), RESUME_BYTES);
    }

    #[test]
    fn file_urls_are_absolute() {
        assert_eq!(
            file_url(Path::new("/home/a/.cache/portfolio-desktop/resume.pdf")),
            "file:///home/a/.cache/portfolio-desktop/resume.pdf"
        );
        assert_eq!(
            file_url(Path::new(r"C:\Users\a\resume.pdf")),
            "file:///C:/Users/a/resume.pdf"
        );
    }

    #[test]
    fn given_location_overrides_bundled_copy() {
        let dir = TempDir::new().unwrap();
        let doc = ResumeDocument::resolve(Some("https://example.com/cv.pdf"), dir.path());
        assert!(!doc.bundled);
        assert_eq!(doc.asset.url(), "https://example.com/cv.pdf");
        assert_eq!(doc.asset.open_url(), "https://example.com/cv.pdf");
        assert_eq!(doc.asset.file_name(), "cv.pdf");
        // Nothing is written for a linked document
        assert!(!dir.path().join(FILE_NAME).exists());
    }
}
