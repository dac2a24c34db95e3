//! The example document seeded into an empty library.

/// Fixed id of the example document.
pub const EXAMPLE_ID: &str = "example";

pub const EXAMPLE_TITLE: &str = "Welcome to MarkMe";

pub const EXAMPLE_TAGS: [&str; 2] = ["sample", "personal"];

/// Touches every construct the renderer understands.
pub const EXAMPLE_CONTENT: &str = r#"# Welcome to MarkMe

MarkMe turns a small, predictable subset of **Markdown** into safe HTML.

## Formatting

Use **bold** or __bold__ for strong text, and *italic* or _italic_ for emphasis.
Wrap short snippets in backticks: `cargo run -- render notes.md`.

## Lists

* Write a draft
* Review it
* Export it

1. Open a document
2. Edit the content
3. Save your changes

## Links and images

[Markdown guide](https://www.markdownguide.org/basic-syntax/)

![Markdown logo](https://markdown-here.com/img/icon256.png)

## Quotes

> Plain text is the most durable format there is.
> It will outlive every editor you own.

## Code

```
fn main() {
    println!("hello from markme");
}
```

### Expiry

Documents expire 30 days after their last save. Extend one to keep it longer.
"#;
