//! Text helpers that operate on raw Markdown before rendering.
//!
//! Both helpers cut at character boundaries, never inside a UTF-8
//! sequence.

/// Longest prefix of `text` that is at most `max_bytes` bytes long.
///
/// `max_bytes == 0` means no limit.
///
/// # Example
/// ```
/// use markme_render::text::truncate_bytes;
///
/// assert_eq!(truncate_bytes("héllo", 2), "h");
/// assert_eq!(truncate_bytes("héllo", 3), "hé");
/// assert_eq!(truncate_bytes("héllo", 0), "héllo");
/// ```
pub fn truncate_bytes(text: &str, max_bytes: usize) -> &str {
    if max_bytes == 0 || text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// First `max_chars` characters of `text`, with `...` appended when
/// anything was cut off.
///
/// Used for document listings, which show raw Markdown rather than
/// rendered HTML.
///
/// # Example
/// ```
/// use markme_render::text::excerpt;
///
/// assert_eq!(excerpt("# Notes on Rust", 8), "# Notes ...");
/// assert_eq!(excerpt("short", 150), "short");
/// ```
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
