//! Inline passes.
//!
//! Emphasis, images, links and inline code. Emphasis patterns use `.`,
//! which does not match `\n`, so a marker never pairs with one on another
//! line.

use regex::Regex;
use std::sync::LazyLock;

static BOLD_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static BOLD_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

static ITALIC_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

static ITALIC_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

/// `![alt](url)`: alt has no `[`, url has no `)`
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[]+)\]\(([^)]+)\)").unwrap());

/// `[label](url)`: label has no `[`, url has no `)`
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\[]+)\]\(([^)]+)\)").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// `**text**` then `__text__` to `<strong>`, shortest match first.
///
/// Runs before [`italic`] so the doubled markers are gone by the time
/// single markers are paired.
pub fn bold(input: &str) -> String {
    let starred = BOLD_STAR_RE.replace_all(input, "<strong>${1}</strong>");
    BOLD_UNDERSCORE_RE
        .replace_all(&starred, "<strong>${1}</strong>")
        .into_owned()
}

/// `*text*` then `_text_` to `<em>`, shortest match first.
pub fn italic(input: &str) -> String {
    let starred = ITALIC_STAR_RE.replace_all(input, "<em>${1}</em>");
    ITALIC_UNDERSCORE_RE
        .replace_all(&starred, "<em>${1}</em>")
        .into_owned()
}

/// `![alt](url)` to `<img src="url" alt="alt" />`.
///
/// Must run before [`links`], whose pattern would otherwise consume the
/// bracketed part of the image and leave a stray `!`.
pub fn images(input: &str) -> String {
    IMAGE_RE
        .replace_all(input, r#"<img src="${2}" alt="${1}" />"#)
        .into_owned()
}

/// `[label](url)` to `<a href="url">label</a>`.
pub fn links(input: &str) -> String {
    LINK_RE
        .replace_all(input, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}

/// `` `text` `` to `<code>text</code>`. Empty spans are not code.
pub fn inline_code(input: &str) -> String {
    INLINE_CODE_RE
        .replace_all(input, "<code>${1}</code>")
        .into_owned()
}
