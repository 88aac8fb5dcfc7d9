//! # Preview Documents
//!
//! Wraps rendered lesson HTML in a complete, styled document and hands it to a
//! [`PreviewSink`]. The sink is the only place a display surface is touched;
//! the renderer itself knows nothing about windows or browsers.

use thiserror::Error;

use crate::render::render;

/// Stylesheet embedded in every preview document unless the caller supplies one.
pub const DEFAULT_STYLESHEET: &str = include_str!("preview.css");

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Nothing to preview")]
    NothingToPreview,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Preview surface unavailable: {reason}")]
    SurfaceUnavailable { reason: String },
}

/// Optional lesson identity shown as a heading above the rendered content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewMeta {
    pub title: Option<String>,
    pub module_number: Option<u32>,
    pub lesson_number: Option<u32>,
}

impl PreviewMeta {
    /// Heading text such as `1.2 Deploying`, or `None` when there is nothing to show.
    pub fn heading_text(&self) -> Option<String> {
        let numbering = match (self.module_number, self.lesson_number) {
            (Some(module), Some(lesson)) => Some(format!("{module}.{lesson}")),
            (Some(n), None) | (None, Some(n)) => Some(n.to_string()),
            (None, None) => None,
        };
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        match (numbering, title) {
            (Some(numbering), Some(title)) => Some(format!("{numbering} {title}")),
            (Some(numbering), None) => Some(numbering),
            (None, Some(title)) => Some(title.to_string()),
            (None, None) => None,
        }
    }
}

/// A display surface that can show a complete HTML document.
pub trait PreviewSink {
    fn open_preview(&mut self, html_document: &str) -> Result<(), PreviewError>;
}

/// Builds the stand-alone preview document for `markdown`.
///
/// Blank markdown is rejected with [`PreviewError::NothingToPreview`].
pub fn build_document(
    markdown: &str,
    meta: &PreviewMeta,
    stylesheet: &str,
) -> Result<String, PreviewError> {
    if markdown.trim().is_empty() {
        return Err(PreviewError::NothingToPreview);
    }

    let heading = meta.heading_text();
    let title = html_escape::encode_text(heading.as_deref().unwrap_or("Lesson preview"));
    let title_html = heading
        .as_deref()
        .map(|h| {
            format!(
                "<h1 class=\"preview-title\">{}</h1>\n",
                html_escape::encode_text(h)
            )
        })
        .unwrap_or_default();
    let body = render(markdown);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{stylesheet}
</style>
</head>
<body>
<div class="preview-container">
{title_html}{body}
</div>
</body>
</html>
"#
    ))
}

/// Renders `markdown` into a preview document and opens it on `sink`.
///
/// The sink is never invoked for blank markdown.
pub fn open_preview<S: PreviewSink + ?Sized>(
    sink: &mut S,
    markdown: &str,
    meta: &PreviewMeta,
    stylesheet: &str,
) -> Result<(), PreviewError> {
    let document = build_document(markdown, meta, stylesheet)?;
    log::debug!("opening preview document of {} bytes", document.len());
    sink.open_preview(&document)
}
