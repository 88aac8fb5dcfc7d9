//! Line-oriented block stages: headings, blockquotes, lists and paragraphs.
//!
//! Every stage is a `&str -> String` rewrite over the whole document. Stages
//! only ever see placeholders in place of code blocks.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::{fence, inline};

/// Blockquote syntax knowledge.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` prefix and a single following space, if present.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }
}

struct BlockPatterns {
    /// Index 0 is `######`, index 5 is `#`.
    headings: [Regex; 6],
    blockquote: Regex,
    unordered_item: Regex,
    ordered_item: Regex,
    block_tag: Regex,
    lead_paragraph: Regex,
    empty_paragraph: Regex,
}

fn patterns() -> &'static BlockPatterns {
    static PATTERNS: OnceLock<BlockPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| BlockPatterns {
        headings: std::array::from_fn(|i| {
            Regex::new(&format!(r"(?m)^#{{{}}} (.*)$", 6 - i)).expect("Invalid heading regex")
        }),
        blockquote: Regex::new(r"(?m)^>.*(?:\n>.*)*").expect("Invalid blockquote regex"),
        unordered_item: Regex::new(r"(?m)^[ \t]*[*-] (.*)$").expect("Invalid list item regex"),
        ordered_item: Regex::new(r"(?m)^[ \t]*\d+\. (.*)$").expect("Invalid list item regex"),
        block_tag: Regex::new(
            r"^</?(?:h[1-6]|ul|ol|li|blockquote|pre|p|div|table|hr|section|figure)\b",
        )
        .expect("Invalid block tag regex"),
        lead_paragraph: Regex::new(r"(?m)^<p>(.*)</p>\n<(ul|ol)>")
            .expect("Invalid lead paragraph regex"),
        empty_paragraph: Regex::new(r"<p>\s*</p>").expect("Invalid empty paragraph regex"),
    })
}

/// `#` through `######` to `<h1>`..`<h6>`, longest prefix first.
pub fn headings(text: &str) -> String {
    let mut out = text.to_string();
    for (i, pattern) in patterns().headings.iter().enumerate() {
        let level = 6 - i;
        out = pattern
            .replace_all(&out, |caps: &Captures| {
                format!("<h{level}>{}</h{level}>", caps[1].trim_end())
            })
            .into_owned();
    }
    out
}

/// Contiguous `>` lines to a single-line `<blockquote>` fragment.
///
/// The quoted lines go through a reduced pipeline of their own: headings,
/// lists, emphasis and paragraphs. Images, links and code are not handled
/// inside quotes.
pub fn blockquotes(text: &str) -> String {
    patterns()
        .blockquote
        .replace_all(text, |caps: &Captures| {
            let inner = caps[0]
                .split('\n')
                .map(BlockQuote::strip_prefix)
                .collect::<Vec<_>>()
                .join("\n");
            let inner = headings(&inner);
            let inner = unordered_lists(&inner);
            let inner = ordered_lists(&inner);
            let inner = inline::emphasis(&inner);
            let inner = paragraphs(&inner);
            let body: String = inner.split('\n').filter(|l| !l.trim().is_empty()).collect();
            format!("<blockquote>{body}</blockquote>")
        })
        .into_owned()
}

/// `* item` / `- item` lines to `<li>`, each contiguous run wrapped in `<ul>`.
pub fn unordered_lists(text: &str) -> String {
    let items = patterns()
        .unordered_item
        .replace_all(text, "<li>$1</li>");
    wrap_item_runs(&items, "ul")
}

/// `1. item` lines to `<li>`; runs not already inside a list container get `<ol>`.
pub fn ordered_lists(text: &str) -> String {
    let items = patterns().ordered_item.replace_all(text, "<li>$1</li>");
    wrap_item_runs(&items, "ol")
}

fn wrap_item_runs(text: &str, container: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut depth = 0usize;
    let mut in_run = false;

    for line in text.split('\n') {
        let is_item = depth == 0 && line.starts_with("<li>");
        if is_item && !in_run {
            out.push(format!("<{container}>"));
            in_run = true;
        } else if !is_item && in_run {
            out.push(format!("</{container}>"));
            in_run = false;
        }

        match line {
            "<ul>" | "<ol>" => depth += 1,
            "</ul>" | "</ol>" => depth = depth.saturating_sub(1),
            _ => {}
        }
        out.push(line.to_string());
    }
    if in_run {
        out.push(format!("</{container}>"));
    }

    out.join("\n")
}

/// Wraps every remaining text line in `<p>`.
///
/// Blank lines, lines opening or closing a block-level tag, and lines holding
/// only a code block placeholder are left as they are.
pub fn paragraphs(text: &str) -> String {
    let block_tag = &patterns().block_tag;
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty()
                || block_tag.is_match(trimmed)
                || fence::is_placeholder_line(trimmed)
            {
                line.to_string()
            } else {
                format!("<p>{trimmed}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reduces the bottom margin of a paragraph that directly introduces a list.
pub fn tighten_lead_paragraphs(text: &str) -> String {
    patterns()
        .lead_paragraph
        .replace_all(text, "<p style=\"margin-bottom: 4px\">$1</p>\n<$2>")
        .into_owned()
}

/// Drops empty paragraphs and blank lines.
pub fn cleanup(text: &str) -> String {
    let without_empty = patterns().empty_paragraph.replace_all(text, "");
    without_empty
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
