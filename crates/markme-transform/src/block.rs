//! Block-level passes.
//!
//! Headers, list items, list merging, blockquotes and fenced code. All
//! line-anchored patterns run in multi-line mode, so `^` and `$` match at
//! every `\n` in the buffer.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// 1 to 4 `#`, one space, rest of the line
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(#{1,4}) (.*)$").unwrap());

/// `* ` or `- ` at the start of a line
static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[*-] (.*)$").unwrap());

/// Digits, a dot and a space at the start of a line
static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]+\. (.*)$").unwrap());

static UL_SEAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</ul>\s*<ul>").unwrap());

static OL_SEAM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</ol>\s*<ol>").unwrap());

static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());

static QUOTE_SEAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</blockquote>\s*<blockquote>").unwrap());

/// Shortest span between two triple-backtick fences, across lines
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

// =============================================================================
// Passes
// =============================================================================

/// Promote `# text` .. `#### text` lines to `<h1>` .. `<h4>`.
///
/// The level equals the number of leading `#`. A line starting with five
/// or more `#` has no space after the fourth and is left alone.
pub fn headers(input: &str) -> String {
    HEADER_RE
        .replace_all(input, |caps: &Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned()
}

/// Wrap each `* text` / `- text` line in its own `<ul><li>`.
pub fn unordered_items(input: &str) -> String {
    UNORDERED_ITEM_RE
        .replace_all(input, "<ul><li>${1}</li></ul>")
        .into_owned()
}

/// Wrap each `N. text` line in its own `<ol><li>`. The number is dropped.
pub fn ordered_items(input: &str) -> String {
    ORDERED_ITEM_RE
        .replace_all(input, "<ol><li>${1}</li></ol>")
        .into_owned()
}

/// Remove the seam between adjacent lists of the same type.
///
/// Only whitespace may separate the two lists, so an unordered item
/// directly followed by an ordered one (or the reverse) keeps both
/// single-item lists.
pub fn merge_lists(input: &str) -> String {
    let merged = UL_SEAM_RE.replace_all(input, "");
    OL_SEAM_RE.replace_all(&merged, "").into_owned()
}

/// Wrap `> text` lines in `<blockquote>` and join consecutive quotes
/// into one, separating their lines with `<br>`.
pub fn blockquotes(input: &str) -> String {
    let quoted = QUOTE_RE.replace_all(input, "<blockquote>${1}</blockquote>");
    QUOTE_SEAM_RE.replace_all(&quoted, "<br>").into_owned()
}

/// Wrap fenced code in `<pre><code>`. The content, including the text
/// right after the opening fence, is kept verbatim.
pub fn fenced_code(input: &str) -> String {
    FENCE_RE
        .replace_all(input, "<pre><code>${1}</code></pre>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_levels() {
        assert_eq!(headers("# a"), "<h1>a</h1>");
        assert_eq!(headers("## a"), "<h2>a</h2>");
        assert_eq!(headers("### a"), "<h3>a</h3>");
        assert_eq!(headers("#### a"), "<h4>a</h4>");
    }

    #[test]
    fn test_header_five_hashes_ignored() {
        assert_eq!(headers("##### a"), "##### a");
        assert_eq!(headers("###### a"), "###### a");
    }

    #[test]
    fn test_header_requires_space() {
        assert_eq!(headers("#tag"), "#tag");
    }

    #[test]
    fn test_header_only_at_line_start() {
        assert_eq!(headers("text # not"), "text # not");
        assert_eq!(headers("intro\n# Title"), "intro\n<h1>Title</h1>");
    }

    #[test]
    fn test_header_keeps_inner_hashes() {
        assert_eq!(headers("# C# notes"), "<h1>C# notes</h1>");
    }

    #[test]
    fn test_unordered_items() {
        assert_eq!(
            unordered_items("* a\n- b"),
            "<ul><li>a</li></ul>\n<ul><li>b</li></ul>"
        );
        assert_eq!(unordered_items("*not a list"), "*not a list");
    }

    #[test]
    fn test_ordered_items_drop_number() {
        assert_eq!(ordered_items("42. answer"), "<ol><li>answer</li></ol>");
        assert_eq!(ordered_items("1.no space"), "1.no space");
    }

    #[test]
    fn test_merge_lists() {
        let html = "<ul><li>a</li></ul>\n<ul><li>b</li></ul>";
        assert_eq!(merge_lists(html), "<ul><li>a</li><li>b</li></ul>");

        let html = "<ol><li>a</li></ol>\n\n<ol><li>b</li></ol>";
        assert_eq!(merge_lists(html), "<ol><li>a</li><li>b</li></ol>");
    }

    #[test]
    fn test_merge_lists_across_types_is_noop() {
        let html = "<ul><li>a</li></ul>\n<ol><li>b</li></ol>";
        assert_eq!(merge_lists(html), html);
    }

    #[test]
    fn test_blockquotes_join() {
        assert_eq!(
            blockquotes("> a\n> b\n> c"),
            "<blockquote>a<br>b<br>c</blockquote>"
        );
        assert_eq!(blockquotes(">no space"), ">no space");
    }

    #[test]
    fn test_fenced_code_multiline() {
        assert_eq!(
            fenced_code("```\nlet x = 1;\n```"),
            "<pre><code>\nlet x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn test_fenced_code_keeps_language_tag_as_text() {
        assert_eq!(
            fenced_code("```rust\nfn main() {}\n```"),
            "<pre><code>rust\nfn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_fenced_code_non_greedy() {
        assert_eq!(
            fenced_code("```a``` and ```b```"),
            "<pre><code>a</code></pre> and <pre><code>b</code></pre>"
        );
    }

    #[test]
    fn test_unclosed_fence_left_literal() {
        assert_eq!(fenced_code("```\nnever closed"), "```\nnever closed");
    }
}
