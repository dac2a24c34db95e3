//! HTML allow-list sanitization.
//!
//! Policy:
//! - only [`ALLOWED_TAGS`] survive; any other element is unwrapped, its
//!   text kept (escaped) and the tags dropped
//! - `script` and `style` elements are removed together with their content
//! - only the attributes in [`ALLOWED_ATTRIBUTES`] survive, so every
//!   `on*` event handler is dropped
//! - `href`/`src` values must be relative or use one of [`ALLOWED_SCHEMES`];
//!   otherwise the attribute is removed
//! - comments are stripped and no `rel` attribute is added to links
//!
//! Cleaning is idempotent. Misnested input such as `<h1><select><h1>`
//! serializes to markup the parser would restructure on the next read, so
//! [`Sanitizer::clean`] re-cleans until the output is stable.

use ammonia::{Builder, UrlRelative};
use log::{trace, warn};
use std::collections::{HashMap, HashSet};

/// Tags that survive sanitization.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "strong",
    "em",
    "a",
    "img",
    "ul",
    "ol",
    "li",
    "blockquote",
    "pre",
    "code",
    "br",
];

/// Attributes that survive sanitization, per tag.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[("a", &["href"]), ("img", &["src", "alt"])];

/// URL schemes accepted in `href` and `src`.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Elements removed together with everything inside them.
const CLEAN_CONTENT_TAGS: &[&str] = &["script", "style"];

/// Passes after the first before giving up on a stable tree.
const MAX_EXTRA_PASSES: usize = 4;

/// The markme sanitization policy.
///
/// Holds a configured [`ammonia::Builder`]; build one and reuse it when
/// cleaning many fragments.
pub struct Sanitizer {
    builder: Builder<'static>,
    text_only: Builder<'static>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sanitizer")
            .field("tags", &ALLOWED_TAGS)
            .field("schemes", &ALLOWED_SCHEMES)
            .finish()
    }
}

impl Sanitizer {
    /// Create a sanitizer enforcing the fixed allow-list.
    pub fn new() -> Self {
        let tags: HashSet<&'static str> = ALLOWED_TAGS.iter().copied().collect();
        let tag_attributes: HashMap<&'static str, HashSet<&'static str>> = ALLOWED_ATTRIBUTES
            .iter()
            .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
            .collect();

        let mut builder = Builder::default();
        builder
            .tags(tags)
            .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect())
            .tag_attributes(tag_attributes)
            .generic_attributes(HashSet::new())
            .url_schemes(ALLOWED_SCHEMES.iter().copied().collect())
            .url_relative(UrlRelative::PassThrough)
            .link_rel(None)
            .strip_comments(true);

        let mut text_only = Builder::empty();
        text_only
            .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect())
            .strip_comments(true);

        Self { builder, text_only }
    }

    /// Sanitize an HTML fragment.
    ///
    /// Never fails; markup that cannot be made safe is removed. The result
    /// is a fixpoint: cleaning it again returns it unchanged.
    pub fn clean(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }

        let mut cleaned = self.pass(html);
        for _ in 0..MAX_EXTRA_PASSES {
            let again = self.pass(&cleaned);
            if again == cleaned {
                trace!("sanitized {} bytes into {} bytes", html.len(), cleaned.len());
                return cleaned;
            }
            cleaned = again;
        }

        // Text carries no structure for the parser to rebuild.
        warn!("markup did not settle after sanitizing, keeping its text only");
        self.text_only.clean(&cleaned).to_string()
    }

    /// One parse and serialize round.
    ///
    /// The parser drops a newline directly after `<pre>`, so one is
    /// doubled there to keep the content the same on the next read.
    fn pass(&self, html: &str) -> String {
        self.builder
            .clean(html)
            .to_string()
            .replace("<pre>\n", "<pre>\n\n")
    }
}

/// Sanitize an HTML fragment with the default policy.
///
/// # Example
/// ```
/// use markme_sanitize::clean;
///
/// assert_eq!(clean(r#"<a href="javascript:alert(1)">x</a>"#), "<a>x</a>");
/// assert_eq!(clean("<div>kept text</div>"), "kept text");
/// ```
pub fn clean(html: &str) -> String {
    Sanitizer::new().clean(html)
}

/// Check a URL against the scheme allow-list.
///
/// Relative URLs (no scheme) are accepted, as the sanitizer passes them
/// through. URLs containing control characters are rejected.
///
/// # Example
/// ```
/// use markme_sanitize::is_safe_url;
///
/// assert!(is_safe_url("https://example.com/a.png"));
/// assert!(is_safe_url("/images/avatar.png"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// assert!(!is_safe_url("data:text/html,<script>alert(1)</script>"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
    if url.chars().any(|c| c.is_control()) {
        return false;
    }
    match url_scheme(url.trim_start()) {
        Some(scheme) => ALLOWED_SCHEMES
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(scheme)),
        None => true,
    }
}

/// The scheme of an absolute URL, if it has one.
///
/// A scheme is a letter followed by letters, digits, `+`, `-` or `.`,
/// terminated by `:` before any `/`, `?` or `#`.
fn url_scheme(url: &str) -> Option<&str> {
    let end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'))?;
    if !url[end..].starts_with(':') {
        return None;
    }
    let scheme = &url[..end];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        Some(scheme)
    } else {
        None
    }
}
