//! Fenced code block extraction and restoration.
//!
//! Fences are pulled out of the document before any line-oriented stage runs and
//! replaced by a `__CODE_BLOCK_<index>__` placeholder. The extracted blocks travel
//! through the pipeline as an explicit [`CodeBlocks`] value and are substituted
//! back by [`restore`] once every other stage is done, so headings, lists and
//! paragraphs never see code content.
//!
//! Placeholders are not escaped against author text of the same shape.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::highlight::{SOLIDITY_LANGUAGE, highlight};

/// Code block pulled out of a document, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    pub index: usize,
    pub raw_content: String,
    pub language: Option<String>,
    /// Final `<pre><code>` fragment substituted for the placeholder.
    pub html: String,
}

/// Ordered accumulator of extracted blocks for one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlocks {
    blocks: Vec<ExtractedBlock>,
}

impl CodeBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder token for the block at `index`.
    pub fn placeholder(index: usize) -> String {
        format!("__CODE_BLOCK_{index}__")
    }

    /// Appends a block and returns the placeholder that stands in for it.
    fn push(&mut self, raw_content: &str, language: Option<&str>, html: String) -> String {
        let index = self.blocks.len();
        self.blocks.push(ExtractedBlock {
            index,
            raw_content: raw_content.to_string(),
            language: language.map(str::to_string),
            html,
        });
        Self::placeholder(index)
    }

    pub fn get(&self, index: usize) -> Option<&ExtractedBlock> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractedBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn solidity_fence() -> &'static Regex {
    static SOLIDITY_FENCE: OnceLock<Regex> = OnceLock::new();
    SOLIDITY_FENCE.get_or_init(|| {
        Regex::new(&format!(
            r"(?s)```{SOLIDITY_LANGUAGE}(?:[ \t][^\n]*)?\n(.*?)(?:```|\z)"
        ))
        .expect("Invalid solidity fence regex")
    })
}

fn any_fence() -> &'static Regex {
    static ANY_FENCE: OnceLock<Regex> = OnceLock::new();
    ANY_FENCE.get_or_init(|| {
        Regex::new(r"(?s)```([^\s`]*)[^\n]*\n(.*?)(?:```|\z)").expect("Invalid fence regex")
    })
}

fn placeholder_pattern() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"__CODE_BLOCK_(\d+)__").expect("Invalid placeholder regex"))
}

/// True when `line` is nothing but a placeholder token.
pub fn is_placeholder_line(line: &str) -> bool {
    placeholder_pattern()
        .find(line)
        .is_some_and(|m| m.start() == 0 && m.end() == line.len())
}

/// Extracts ```` ```solidity ```` fences, running their content through the highlighter.
///
/// An unterminated fence consumes the rest of the document.
pub fn extract_solidity(text: &str, blocks: CodeBlocks) -> (String, CodeBlocks) {
    let mut blocks = blocks;
    let out = solidity_fence()
        .replace_all(text, |caps: &Captures| {
            let raw = caps[1].trim_end();
            let html = format!(
                r#"<pre class="code-block language-{SOLIDITY_LANGUAGE}"><code>{}</code></pre>"#,
                highlight(raw)
            );
            blocks.push(raw, Some(SOLIDITY_LANGUAGE), html)
        })
        .into_owned();
    (out, blocks)
}

/// Extracts every remaining fence verbatim, escaped but not highlighted.
pub fn extract_generic(text: &str, blocks: CodeBlocks) -> (String, CodeBlocks) {
    let mut blocks = blocks;
    let out = any_fence()
        .replace_all(text, |caps: &Captures| {
            let language = Some(&caps[1]).filter(|lang| !lang.is_empty());
            let raw = caps[2].trim_end();
            let code_open = match language {
                Some(lang) => format!(
                    r#"<code class="language-{}">"#,
                    html_escape::encode_double_quoted_attribute(lang)
                ),
                None => "<code>".to_string(),
            };
            let html = format!(
                r#"<pre class="code-block">{code_open}{}</code></pre>"#,
                html_escape::encode_text(raw)
            );
            blocks.push(raw, language, html)
        })
        .into_owned();
    (out, blocks)
}

/// Substitutes each placeholder with its block's fragment in a single pass.
///
/// Placeholders with no matching block are left untouched.
pub fn restore(text: &str, blocks: &CodeBlocks) -> String {
    placeholder_pattern()
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| blocks.get(index))
                .map_or_else(|| caps[0].to_string(), |block| block.html.clone())
        })
        .into_owned()
}
