use lesson_preview_engine::{FileSink, PreviewError, PreviewSink};
use std::path::{Path, PathBuf};

/// Writes the preview document to disk, then opens it in the default browser.
pub struct BrowserSink {
    file: FileSink,
    open_browser: bool,
}

impl BrowserSink {
    pub fn new(path: impl Into<PathBuf>, open_browser: bool) -> Self {
        Self {
            file: FileSink::new(path),
            open_browser,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl PreviewSink for BrowserSink {
    fn open_preview(&mut self, html_document: &str) -> Result<(), PreviewError> {
        self.file.open_preview(html_document)?;
        if !self.open_browser {
            return Ok(());
        }

        log::info!("Opening {} in browser", self.path().display());
        open::that(self.path()).map_err(|e| PreviewError::SurfaceUnavailable {
            reason: format!("failed to open {}: {e}", self.path().display()),
        })
    }
}
