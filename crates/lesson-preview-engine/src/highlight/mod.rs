//! # Solidity Highlighting
//!
//! Line-oriented lexical highlighter for Solidity snippets in lesson content.
//!
//! Each line is HTML-escaped and then classified by a fixed, ordered set of rules:
//!
//! 1. `//` comment to end of line
//! 2. same-line `/* ... */` comment
//! 3. double- or single-quoted string literal
//! 4. integer or decimal literal
//! 5. keyword from [`KEYWORDS`]
//!
//! Precedence is per line, not per character: once a line contains a comment
//! the remaining rules are skipped, and once it contains a string literal no
//! number or keyword on that line is wrapped. Existing lesson content was
//! authored against this behavior, so it is kept as is.
//!
//! Block comments are only recognized when they open and close on the same line.

mod keywords;

pub use keywords::KEYWORDS;

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Fence tag that routes a code block through [`highlight`].
pub const SOLIDITY_LANGUAGE: &str = "solidity";

/// Token category assigned to a span of a code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Comment,
    String,
    Numeric,
    Keyword,
    Plain,
}

impl Category {
    /// CSS class of the wrapping span, `None` for plain text.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Category::Comment => Some("hl-comment"),
            Category::String => Some("hl-string"),
            Category::Numeric => Some("hl-number"),
            Category::Keyword => Some("hl-keyword"),
            Category::Plain => None,
        }
    }

    fn wrap(self, text: &str) -> String {
        match self.css_class() {
            Some(class) => format!(r#"<span class="{class}">{text}</span>"#),
            None => text.to_string(),
        }
    }
}

struct Rules {
    line_comment: Regex,
    block_comment: Regex,
    string: Regex,
    numeric: Regex,
    keyword: Regex,
    tag: Regex,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| {
        let words: Vec<String> = KEYWORDS.iter().map(|w| regex::escape(w)).collect();
        Rules {
            line_comment: Regex::new(r"//.*$").expect("Invalid line comment regex"),
            block_comment: Regex::new(r"/\*.*?\*/").expect("Invalid block comment regex"),
            string: Regex::new(r#""[^"]*"|'[^']*'"#).expect("Invalid string regex"),
            numeric: Regex::new(r"\b\d+(?:\.\d+)?\b").expect("Invalid numeric regex"),
            keyword: Regex::new(&format!(r"\b(?:{})\b", words.join("|")))
                .expect("Invalid keyword regex"),
            tag: Regex::new(r"<[^>]*>").expect("Invalid tag regex"),
        }
    })
}

/// Highlights Solidity source, returning HTML with `hl-*` spans.
///
/// Never fails; lines are processed independently and rejoined with `\n`.
pub fn highlight(code: &str) -> String {
    code.split('\n')
        .map(highlight_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlight_line(line: &str) -> String {
    let rules = rules();
    let escaped = html_escape::encode_text(line);

    if let Some(m) = rules.line_comment.find(&escaped) {
        return format!(
            "{}{}",
            &escaped[..m.start()],
            Category::Comment.wrap(m.as_str())
        );
    }

    if rules.block_comment.is_match(&escaped) {
        return wrap_all(&escaped, &rules.block_comment, Category::Comment);
    }

    if rules.string.is_match(&escaped) {
        return wrap_all(&escaped, &rules.string, Category::String);
    }

    let numbered = wrap_outside_tags(&escaped, &rules.numeric, Category::Numeric);
    wrap_outside_tags(&numbered, &rules.keyword, Category::Keyword)
}

fn wrap_all(text: &str, pattern: &Regex, category: Category) -> String {
    pattern
        .replace_all(text, |caps: &Captures| category.wrap(&caps[0]))
        .into_owned()
}

// Spans already inserted on this line must keep their markup intact.
fn wrap_outside_tags(line: &str, pattern: &Regex, category: Category) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for tag in rules().tag.find_iter(line) {
        out.push_str(&wrap_all(&line[last..tag.start()], pattern, category));
        out.push_str(tag.as_str());
        last = tag.end();
    }
    out.push_str(&wrap_all(&line[last..], pattern, category));
    out
}
