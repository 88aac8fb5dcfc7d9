use crate::preview::{PreviewError, PreviewSink};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input is {actual} characters, over the {limit} character limit")]
    InputTooLarge { limit: usize, actual: usize },
}

/// Read a markdown file and return its content
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Reject input longer than `limit` characters.
///
/// The renderer never limits its input, so callers that need bounded latency
/// check here first.
pub fn check_input_size(text: &str, limit: Option<usize>) -> Result<(), IoError> {
    let Some(limit) = limit else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual > limit {
        return Err(IoError::InputTooLarge { limit, actual });
    }
    Ok(())
}

/// Preview sink that writes the document to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreviewSink for FileSink {
    fn open_preview(&mut self, html_document: &str) -> Result<(), PreviewError> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, html_document)?;
        log::debug!("wrote preview to {}", self.path.display());
        Ok(())
    }
}
