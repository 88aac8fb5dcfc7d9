//! Cross-stage tests for the full render pipeline.
//!
//! Rendering is not idempotent. Rendering already rendered HTML as if it were
//! markdown is unsupported, so no test here feeds output back into `render`.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::highlight::highlight;
use crate::render::{extract_code_blocks, render};
use pretty_assertions::assert_eq;
use regex::Regex;

/// Create a temporary directory for file based tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

fn strip_spans(html: &str) -> String {
    Regex::new(r"</?span[^>]*>")
        .unwrap()
        .replace_all(html, "")
        .into_owned()
}

#[test]
fn heading() {
    assert_eq!(render("# Hello"), "<h1>Hello</h1>");
}

#[test]
fn unordered_list_has_one_container_in_input_order() {
    let html = render("* a\n* b");

    assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    assert_eq!(html.matches("<ul>").count(), 1);
}

#[test]
fn ordered_list() {
    assert_eq!(
        render("1. first\n2. second"),
        "<ol>\n<li>first</li>\n<li>second</li>\n</ol>"
    );
}

#[test]
fn blockquote_with_bold() {
    let html = render("> **Note**");

    assert_eq!(html, "<blockquote><p><strong>Note</strong></p></blockquote>");
    assert_eq!(html.matches("<blockquote>").count(), 1);
}

#[test]
fn image() {
    assert_eq!(
        render("![alt](http://x/y.png)"),
        r#"<p><img src="http://x/y.png" alt="alt"></p>"#
    );
}

#[test]
fn linked_image_is_an_anchor_wrapping_an_image() {
    let html = render("[![alt](http://img)](http://link)");

    assert!(html.contains(r#"<a href="http://link""#));
    assert!(html.contains(r#"<img src="http://img" alt="alt" class="thumbnail"></a>"#));
    assert_eq!(html.matches("<a ").count(), 1);
    assert_eq!(html.matches("<img ").count(), 1);
}

#[test]
fn solidity_keywords_are_highlighted_and_text_is_recoverable() {
    let source = "pragma solidity ^0.8.0;\ncontract Token {\n    uint256 public supply = 100;\n}";
    let html = render(&format!("```solidity\n{source}\n```"));

    assert!(html.contains(r#"<span class="hl-keyword">contract</span>"#));
    assert!(html.starts_with(r#"<pre class="code-block language-solidity"><code>"#));

    let (_, blocks) = extract_code_blocks(&format!("```solidity\n{source}\n```"));
    let block = blocks.get(0).unwrap();
    assert_eq!(block.raw_content, source);
    assert_eq!(strip_spans(&highlight(source)), source);
}

#[test]
fn fence_content_is_never_reflowed() {
    let html = render("```\n# not a heading\n* not a list\n**not bold**\n```");

    assert_eq!(
        html,
        "<pre class=\"code-block\"><code># not a heading\n* not a list\n**not bold**</code></pre>"
    );
}

#[test]
fn solidity_comment_hash_is_not_a_heading() {
    let html = render("```solidity\n// # comment\n```");

    assert!(!html.contains("<h1>"));
    assert!(html.contains(r#"<span class="hl-comment">// # comment</span>"#));
}

#[test]
fn string_lines_get_no_keyword_spans() {
    let html = render("```solidity\nstring name = \"contract\"; return;\n```");

    assert!(!html.contains("hl-keyword"));
    assert!(html.contains(r#"<span class="hl-string">"contract"</span>"#));
}

#[test]
fn paragraph_before_list_is_tightened() {
    assert_eq!(
        render("Steps:\n* one\n* two"),
        "<p style=\"margin-bottom: 4px\">Steps:</p>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
    );
}

#[test]
fn blank_lines_are_collapsed() {
    assert_eq!(
        render("First\n\n\n\nSecond"),
        "<p>First</p>\n<p>Second</p>"
    );
}

#[test]
fn link_and_inline_code_in_paragraph() {
    assert_eq!(
        render("Run `forge test` then read [docs](https://book.getfoundry.sh)."),
        concat!(
            r#"<p>Run <code class="inline-code">forge test</code> then read "#,
            r#"<a href="https://book.getfoundry.sh" target="_blank" rel="noopener noreferrer">docs</a>.</p>"#
        )
    );
}

#[test]
fn emphasis_in_headings_and_list_items() {
    assert_eq!(
        render("## **Setup**\n- *optional* step"),
        "<h2><strong>Setup</strong></h2>\n<ul>\n<li><em>optional</em> step</li>\n</ul>"
    );
}

#[test]
fn raw_html_passes_through() {
    assert_eq!(
        render("<div class=\"note\">hi</div>"),
        "<div class=\"note\">hi</div>"
    );
}

#[test]
fn crlf_input_renders_like_lf() {
    assert_eq!(render("# A\r\n* b"), render("# A\n* b"));
}

#[test]
fn code_block_between_paragraphs_is_not_wrapped() {
    assert_eq!(
        render("Before\n```\nx\n```\nAfter"),
        "<p>Before</p>\n<pre class=\"code-block\"><code>x</code></pre>\n<p>After</p>"
    );
}

#[test]
fn unterminated_fence_swallows_the_rest() {
    let html = render("Intro\n```\n# tail\n* more");

    assert_eq!(
        html,
        "<p>Intro</p>\n<pre class=\"code-block\"><code># tail\n* more</code></pre>"
    );
}

#[test]
fn every_placeholder_is_resolved() {
    let md = "```solidity\nuint a;\n```\ntext\n```js\nlet b;\n```\n> quote\n```\nc\n```";
    let html = render(md);

    assert!(!html.contains("__CODE_BLOCK_"));
    assert_eq!(html.matches("<pre class=\"code-block").count(), 3);
}

#[test]
fn render_is_total_over_odd_input() {
    let inputs = [
        "",
        "```",
        "**",
        "* ",
        "> ",
        "[](",
        "![",
        "#",
        "1.",
        "`",
        "*a**b*c**",
        "> > nested\n>> deeper",
        "[![x](y)](",
        "__CODE_BLOCK_0__",
        "\u{1F980} ünïcödé **bold**",
    ];
    for input in inputs {
        let _ = render(input);
    }
    assert_eq!(render(""), "");
}

#[test]
fn render_is_safe_to_call_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || render(&format!("# Lesson {i}\n* item"))))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("<h1>Lesson {i}</h1>\n<ul>\n<li>item</li>\n</ul>")
        );
    }
}
