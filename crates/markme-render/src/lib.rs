//! MarkMe Render
//!
//! This crate joins the transformer and the sanitizer into the one
//! operation callers should use to produce display HTML:
//!
//! ```text
//! render(markdown) = sanitize(transform(markdown))
//! ```
//!
//! Every path that produces HTML goes through [`render`] or
//! [`Renderer::render`], including content loaded from a store.
//!
//! # Example
//!
//! ```
//! use markme_render::render;
//!
//! assert_eq!(render("# Title"), "<h1>Title</h1>");
//! assert_eq!(
//!     render("**bold** <script>alert(1)</script>"),
//!     "<strong>bold</strong> "
//! );
//! ```

pub mod features;
pub mod text;

pub use features::RenderFeatures;
pub use text::{excerpt, truncate_bytes};

use log::debug;
use markme_sanitize::Sanitizer;
use markme_transform::Transformer;

/// Render Markdown to sanitized HTML with every feature enabled.
///
/// Pure and deterministic; safe to call from many threads at once.
pub fn render(markdown: &str) -> String {
    Renderer::default().render(markdown)
}

/// A configured render pipeline.
///
/// Build once and reuse: the sanitizer policy is assembled in
/// [`Renderer::new`].
#[derive(Debug)]
pub struct Renderer {
    features: RenderFeatures,
    transformer: Transformer,
    sanitizer: Sanitizer,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderFeatures::default())
    }
}

impl Renderer {
    /// Create a renderer with the given features.
    pub fn new(features: RenderFeatures) -> Self {
        Self {
            transformer: features.transformer(),
            sanitizer: Sanitizer::new(),
            features,
        }
    }

    /// The features this renderer was built with.
    pub fn features(&self) -> &RenderFeatures {
        &self.features
    }

    /// Render Markdown to sanitized HTML.
    ///
    /// Input over the configured byte cap is truncated first.
    pub fn render(&self, markdown: &str) -> String {
        let input = truncate_bytes(markdown, self.features.max_input_bytes);
        if input.len() < markdown.len() {
            debug!(
                "input truncated from {} to {} bytes",
                markdown.len(),
                input.len()
            );
        }

        let html = self.transformer.transform(input);
        self.sanitizer.clean(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_render_header() {
        assert_eq!(render("# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn test_render_fenced_code_neutralizes_tags() {
        let html = render("```\n<b>x</b>\n```");
        assert_eq!(html, "<pre><code><br>x<br></code></pre>");
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_render_image_serialization() {
        assert_eq!(
            render("![logo](https://x.test/logo.png)"),
            r#"<img src="https://x.test/logo.png" alt="logo">"#
        );
    }

    #[test]
    fn test_render_javascript_link_neutralized() {
        let html = render("[click](javascript:alert(1))");
        assert_eq!(html, "<a>click</a>)");
    }

    #[test]
    fn test_renderer_without_links() {
        let renderer = Renderer::new(RenderFeatures {
            links: false,
            ..RenderFeatures::default()
        });
        assert_eq!(renderer.render("[a](https://b.test)"), "[a](https://b.test)");
        assert!(!renderer.features().links);
    }

    #[test]
    fn test_renderer_without_images_still_links_bracket() {
        let renderer = Renderer::new(RenderFeatures {
            images: false,
            ..RenderFeatures::default()
        });
        assert_eq!(
            renderer.render("![alt](https://x.test/p.png)"),
            r#"!<a href="https://x.test/p.png">alt</a>"#
        );
    }

    #[test]
    fn test_renderer_truncates_input() {
        let renderer = Renderer::new(RenderFeatures {
            max_input_bytes: 5,
            ..RenderFeatures::default()
        });
        assert_eq!(renderer.render("# Title that is long"), "<h1>Tit</h1>");
    }

    /// Deepest nesting of `<tag>` elements in `html`.
    fn max_depth(html: &str, tag: &str) -> usize {
        let open = format!("<{tag}>");
        let close = format!("</{tag}>");
        let (mut depth, mut max) = (0usize, 0usize);
        let mut rest = html;
        while let Some(i) = rest.find('<') {
            rest = &rest[i..];
            if rest.starts_with(&open) {
                depth += 1;
                max = max.max(depth);
            } else if rest.starts_with(&close) {
                depth = depth.saturating_sub(1);
            }
            rest = &rest[1..];
        }
        max
    }

    #[test]
    fn test_render_select_does_not_nest_headings() {
        let html = render("# a <select>\n# b");
        assert_eq!(max_depth(&html, "h1"), 1, "{html:?}");
        assert_eq!(Sanitizer::new().clean(&html), html);
    }

    #[test]
    fn test_render_table_does_not_nest_list_items() {
        let html = render("<li><table><li>x");
        assert_eq!(max_depth(&html, "li"), 1, "{html:?}");
        assert_eq!(Sanitizer::new().clean(&html), html);
    }
}
