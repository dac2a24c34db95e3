//! Export helpers.
//!
//! Exports are plain files: a single document as `.md`, the whole
//! library as pretty-printed JSON, or the profile bio as Markdown.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use markme_core::{Document, Profile, Result};

/// File name used when exporting the whole library.
pub const ALL_DOCUMENTS_FILE: &str = "markme-documents.json";

/// File name for a single exported document.
///
/// Every character that is not an ASCII letter or digit becomes `-`,
/// and the result is lowercased.
///
/// ```
/// use markme_store::export::export_filename;
///
/// assert_eq!(export_filename("My Notes!"), "my-notes-.md");
/// assert_eq!(export_filename(""), "untitled.md");
/// ```
pub fn export_filename(title: &str) -> String {
    if title.is_empty() {
        return "untitled.md".to_string();
    }
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("{stem}.md")
}

/// File name for an exported bio: whitespace runs become `-`.
///
/// ```
/// use markme_store::export::bio_filename;
///
/// assert_eq!(bio_filename("Ada  Lovelace"), "ada-lovelace-bio.md");
/// ```
pub fn bio_filename(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if stem.is_empty() {
        "bio.md".to_string()
    } else {
        format!("{stem}-bio.md")
    }
}

/// The profile as a Markdown document: name as a header, then the bio.
pub fn bio_markdown(profile: &Profile) -> String {
    format!("# {}\n\n{}", profile.name, profile.bio)
}

/// All documents as pretty-printed JSON.
pub fn documents_json(docs: &[Document]) -> Result<String> {
    Ok(serde_json::to_string_pretty(docs)?)
}

/// Write `contents` to `dir/file_name`, creating `dir` when needed.
///
/// Returns the written path.
pub fn write_export(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    info!("exported {} bytes to {}", contents.len(), path.display());
    Ok(path)
}
