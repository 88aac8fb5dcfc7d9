//! # Markdown Rendering
//!
//! Turns lesson markdown into HTML through a fixed sequence of whole-document
//! rewrite stages. This is deliberately not a CommonMark parser: lesson content
//! was authored against these exact stage semantics, including their edge cases.
//!
//! ## Stage order
//!
//! 1. Solidity fences extracted and highlighted ([`fence::extract_solidity`])
//! 2. Remaining fences extracted verbatim ([`fence::extract_generic`])
//! 3. Inline code, headings, blockquotes
//! 4. Linked images, images, links
//! 5. Unordered then ordered lists
//! 6. Bold, then italic
//! 7. Paragraph wrapping, lead paragraph tightening, cleanup
//! 8. Code blocks restored ([`fence::restore`])
//!
//! Rendering is not idempotent: feeding rendered HTML back in is unsupported.

pub mod blocks;
pub mod fence;
pub mod inline;

use fence::CodeBlocks;

type Stage = fn(&str) -> String;

/// Stages that run between fence extraction and restoration, in order.
const STAGES: &[(&str, Stage)] = &[
    ("inline_code", inline::inline_code),
    ("headings", blocks::headings),
    ("blockquotes", blocks::blockquotes),
    ("linked_images", inline::linked_images),
    ("images", inline::images),
    ("links", inline::links),
    ("unordered_lists", blocks::unordered_lists),
    ("ordered_lists", blocks::ordered_lists),
    ("emphasis", inline::emphasis),
    ("paragraphs", blocks::paragraphs),
    ("tighten_lead_paragraphs", blocks::tighten_lead_paragraphs),
    ("cleanup", blocks::cleanup),
];

/// Renders lesson markdown to an HTML fragment.
///
/// Total over any input: malformed markdown produces oddly nested output, never
/// an error. Callers that need bounded latency must cap the input size.
pub fn render(markdown: &str) -> String {
    let normalized = markdown.replace("\r\n", "\n");

    let (text, code_blocks) = extract_code_blocks(&normalized);
    log::debug!("extracted {} code blocks", code_blocks.len());

    let text = STAGES.iter().fold(text, |text, (name, stage)| {
        let next = stage(&text);
        log::trace!("stage {name}: {} -> {} bytes", text.len(), next.len());
        next
    });

    fence::restore(&text, &code_blocks)
}

/// Pulls every fenced block out of `markdown`, Solidity fences first.
pub fn extract_code_blocks(markdown: &str) -> (String, CodeBlocks) {
    let (text, code_blocks) = fence::extract_solidity(markdown, CodeBlocks::new());
    fence::extract_generic(&text, code_blocks)
}
