//! Inline stages: code spans, images, links and emphasis.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Attributes added to every generated anchor; links open in a new context.
const LINK_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

struct InlinePatterns {
    code: Regex,
    linked_image: Regex,
    image: Regex,
    link: Regex,
    bold: Regex,
    italic: Regex,
}

fn patterns() -> &'static InlinePatterns {
    static PATTERNS: OnceLock<InlinePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| InlinePatterns {
        code: Regex::new(r"`([^`\n]+)`").expect("Invalid inline code regex"),
        linked_image: Regex::new(r"\[!\[([^\]]*)\]\(([^)\s]+)\)\]\(([^)\s]+)\)")
            .expect("Invalid linked image regex"),
        image: Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").expect("Invalid image regex"),
        link: Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("Invalid link regex"),
        bold: Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"),
        italic: Regex::new(r"\*([^*\n]+)\*").expect("Invalid italic regex"),
    })
}

/// `` `code` `` to an escaped inline code fragment.
pub fn inline_code(text: &str) -> String {
    patterns()
        .code
        .replace_all(text, |caps: &Captures| {
            format!(
                r#"<code class="inline-code">{}</code>"#,
                html_escape::encode_text(&caps[1])
            )
        })
        .into_owned()
}

/// `[![alt](img)](href)`, typically a video thumbnail, to a clickable image.
///
/// Must run before [`images`] and [`links`], otherwise the outer link and the
/// inner image are rendered as two unrelated fragments.
pub fn linked_images(text: &str) -> String {
    patterns()
        .linked_image
        .replace_all(text, |caps: &Captures| {
            format!(
                r#"<a href="{}" {LINK_ATTRS} class="thumbnail-link"><img src="{}" alt="{}" class="thumbnail"></a>"#,
                &caps[3], &caps[2], &caps[1]
            )
        })
        .into_owned()
}

pub fn images(text: &str) -> String {
    patterns()
        .image
        .replace_all(text, |caps: &Captures| {
            format!(r#"<img src="{}" alt="{}">"#, &caps[2], &caps[1])
        })
        .into_owned()
}

pub fn links(text: &str) -> String {
    patterns()
        .link
        .replace_all(text, |caps: &Captures| {
            format!(r#"<a href="{}" {LINK_ATTRS}>{}</a>"#, &caps[2], &caps[1])
        })
        .into_owned()
}

/// Bold before italic, so `**x**` is never split into two single-asterisk pairs.
pub fn emphasis(text: &str) -> String {
    let p = patterns();
    let bolded = p.bold.replace_all(text, "<strong>$1</strong>");
    p.italic.replace_all(&bolded, "<em>$1</em>").into_owned()
}
