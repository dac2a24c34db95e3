//! MarkMe Transform
//!
//! A pass-ordered Markdown to HTML transformer for a small, line-oriented
//! dialect. The transformer is a sequence of global substitutions over a
//! single buffer; every pass sees the output of the passes before it, so
//! the order of [`Pass::ALL`] is what makes the output correct.
//!
//! The transformer does **no** HTML escaping. Raw HTML in the input is
//! passed through untouched and must be run through `markme-sanitize`
//! before it is displayed.
//!
//! # Example
//!
//! ```
//! use markme_transform::transform;
//!
//! assert_eq!(transform("# Hello"), "<h1>Hello</h1>");
//! assert_eq!(
//!     transform("* a\n* b"),
//!     "<ul><li>a</li><li>b</li></ul>"
//! );
//! ```
//!
//! All patterns are compiled with the `regex` crate, which never
//! backtracks, so each pass runs in time linear in the buffer length.

pub mod block;
pub mod breaks;
pub mod inline;

use log::trace;

// =============================================================================
// Passes
// =============================================================================

/// One substitution step of the pipeline.
///
/// Variants are declared in pipeline order; the derived `Ord` is the
/// execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pass {
    /// `^#{1,4} text` to `<h1>`..`<h4>`
    Headers,
    /// `**text**` and `__text__` to `<strong>`
    Bold,
    /// `*text*` and `_text_` to `<em>`
    Italic,
    /// `![alt](url)` to `<img>`
    Image,
    /// `[label](url)` to `<a>`
    Link,
    /// `^* text` and `^- text` to single-item `<ul>`
    UnorderedList,
    /// `^N. text` to single-item `<ol>`
    OrderedList,
    /// Join adjacent lists of the same type
    ListMerge,
    /// `^> text` to `<blockquote>`, consecutive quotes joined with `<br>`
    Blockquote,
    /// Triple-backtick fences to `<pre><code>`
    FencedCode,
    /// Single-backtick spans to `<code>`
    InlineCode,
    /// Every `\n` to `<br>`
    LineBreaks,
    /// Whitespace between two `<br>` removed
    BreakCollapse,
}

impl Pass {
    /// Every pass, in pipeline order.
    pub const ALL: [Pass; 13] = [
        Pass::Headers,
        Pass::Bold,
        Pass::Italic,
        Pass::Image,
        Pass::Link,
        Pass::UnorderedList,
        Pass::OrderedList,
        Pass::ListMerge,
        Pass::Blockquote,
        Pass::FencedCode,
        Pass::InlineCode,
        Pass::LineBreaks,
        Pass::BreakCollapse,
    ];

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Pass::Headers => "headers",
            Pass::Bold => "bold",
            Pass::Italic => "italic",
            Pass::Image => "image",
            Pass::Link => "link",
            Pass::UnorderedList => "unordered-list",
            Pass::OrderedList => "ordered-list",
            Pass::ListMerge => "list-merge",
            Pass::Blockquote => "blockquote",
            Pass::FencedCode => "fenced-code",
            Pass::InlineCode => "inline-code",
            Pass::LineBreaks => "line-breaks",
            Pass::BreakCollapse => "break-collapse",
        }
    }

    /// Run this pass over the whole buffer.
    pub fn apply(&self, input: &str) -> String {
        match self {
            Pass::Headers => block::headers(input),
            Pass::Bold => inline::bold(input),
            Pass::Italic => inline::italic(input),
            Pass::Image => inline::images(input),
            Pass::Link => inline::links(input),
            Pass::UnorderedList => block::unordered_items(input),
            Pass::OrderedList => block::ordered_items(input),
            Pass::ListMerge => block::merge_lists(input),
            Pass::Blockquote => block::blockquotes(input),
            Pass::FencedCode => block::fenced_code(input),
            Pass::InlineCode => inline::inline_code(input),
            Pass::LineBreaks => breaks::line_breaks(input),
            Pass::BreakCollapse => breaks::collapse_breaks(input),
        }
    }
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Transformer
// =============================================================================

/// An ordered pipeline of [`Pass`]es.
///
/// The default pipeline runs every pass. A custom pipeline may leave
/// passes out but can never reorder them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformer {
    passes: Vec<Pass>,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer {
    /// Create a transformer running every pass.
    pub fn new() -> Self {
        Self {
            passes: Pass::ALL.to_vec(),
        }
    }

    /// Create a transformer over a subset of passes.
    ///
    /// The passes are put back into pipeline order and deduplicated.
    ///
    /// ```
    /// use markme_transform::{Pass, Transformer};
    ///
    /// let t = Transformer::with_passes(&[Pass::LineBreaks, Pass::Headers]);
    /// assert_eq!(t.passes(), &[Pass::Headers, Pass::LineBreaks]);
    /// ```
    pub fn with_passes(passes: &[Pass]) -> Self {
        let mut passes = passes.to_vec();
        passes.sort();
        passes.dedup();
        Self { passes }
    }

    /// Drop one pass from the pipeline.
    pub fn without(mut self, pass: Pass) -> Self {
        self.passes.retain(|p| *p != pass);
        self
    }

    /// The passes this transformer runs, in order.
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Transform Markdown into (unsanitized) HTML.
    ///
    /// Never fails: text that matches no pass is emitted unchanged.
    pub fn transform(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut html = text.to_string();
        for pass in &self.passes {
            html = pass.apply(&html);
            trace!("pass {} -> {} bytes", pass, html.len());
        }
        html
    }
}

/// Transform Markdown with the full pipeline.
pub fn transform(text: &str) -> String {
    Transformer::new().transform(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(transform(""), "");
    }

    #[test]
    fn test_plain_text_only_gets_breaks() {
        assert_eq!(transform("hello\nworld"), "hello<br>world");
        assert_eq!(transform("just text"), "just text");
    }

    #[test]
    fn test_header_exact() {
        assert_eq!(transform("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_bold_italic_non_interference() {
        assert_eq!(
            transform("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_list_merge() {
        assert_eq!(transform("* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(
            transform("1. one\n2. two\n3. three"),
            "<ol><li>one</li><li>two</li><li>three</li></ol>"
        );
    }

    #[test]
    fn test_mixed_list_types_stay_separate() {
        assert_eq!(
            transform("* a\n1. b\n* c"),
            "<ul><li>a</li></ul><br><ol><li>b</li></ol><br><ul><li>c</li></ul>"
        );
    }

    #[test]
    fn test_fenced_code_keeps_raw_html() {
        assert_eq!(
            transform("```\n<b>x</b>\n```"),
            "<pre><code><br><b>x</b><br></code></pre>"
        );
    }

    #[test]
    fn test_raw_html_passes_through() {
        assert_eq!(
            transform("<script>alert(1)</script>"),
            "<script>alert(1)</script>"
        );
    }

    #[test]
    fn test_image_is_not_mistaken_for_link() {
        assert_eq!(
            transform("![logo](https://x.test/a.png)"),
            "<img src=\"https://x.test/a.png\" alt=\"logo\" />"
        );
    }

    #[test]
    fn test_image_and_link_on_one_line() {
        assert_eq!(
            transform("![i](a.png) [l](b.html)"),
            "<img src=\"a.png\" alt=\"i\" /> <a href=\"b.html\">l</a>"
        );
    }

    #[test]
    fn test_malformed_link_left_literal() {
        assert_eq!(transform("[no-close(url)"), "[no-close(url)");
        assert_eq!(transform("[label](no-close"), "[label](no-close");
    }

    #[test]
    fn test_blockquote_lines_joined() {
        assert_eq!(
            transform("> one\n> two"),
            "<blockquote>one<br>two</blockquote>"
        );
    }

    #[test]
    fn test_header_then_paragraph() {
        assert_eq!(
            transform("## Sub\n\nBody text"),
            "<h2>Sub</h2><br><br>Body text"
        );
    }

    #[test]
    fn test_pass_order_is_canonical() {
        let mut sorted = Pass::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Pass::ALL.to_vec());
    }

    #[test]
    fn test_with_passes_sorts_and_dedups() {
        let t = Transformer::with_passes(&[Pass::Link, Pass::Headers, Pass::Link]);
        assert_eq!(t.passes(), &[Pass::Headers, Pass::Link]);
    }

    #[test]
    fn test_without_link_pass() {
        let t = Transformer::new().without(Pass::Link);
        assert_eq!(t.transform("[a](b)"), "[a](b)");
        assert_eq!(t.passes().len(), Pass::ALL.len() - 1);
    }

    #[test]
    fn test_pass_names_unique() {
        let mut names: Vec<_> = Pass::ALL.iter().map(Pass::name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Pass::ALL.len());
    }
}
