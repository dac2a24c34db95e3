//! MarkMe Sanitize
//!
//! This crate is the security boundary between transformed Markdown and
//! whatever displays it. It enforces a fixed allow-list of tags,
//! attributes and URL schemes on top of the `ammonia` HTML sanitizer.
//!
//! # Overview
//!
//! - [`clean`] - Sanitize an HTML string against the allow-list
//! - [`Sanitizer`] - The configured policy, reusable across calls
//! - [`is_safe_url`] - Check a single URL against the scheme allow-list
//! - [`ALLOWED_TAGS`], [`ALLOWED_ATTRIBUTES`], [`ALLOWED_SCHEMES`] - The policy itself
//!
//! # Example
//!
//! ```
//! use markme_sanitize::clean;
//!
//! let html = clean(r#"<h1 onclick="steal()">Hi</h1><script>alert(1)</script>"#);
//! assert_eq!(html, "<h1>Hi</h1>");
//! ```

pub mod sanitize;

pub use sanitize::*;
