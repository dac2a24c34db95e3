//! Record types for markme
//!
//! Every record serializes to JSON with camelCase keys so a store file
//! stays readable and stable across versions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Theme;

/// A stored Markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Opaque identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Raw Markdown content (never pre-rendered HTML)
    pub content: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// Expiry time; documents without one never expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Whether the document has expired at `now`.
    ///
    /// A document is still live while its expiry lies strictly in the future.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }

    /// Word and character counts of the content.
    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.content)
    }
}

/// A request to create or update a [`Document`].
///
/// When `id` names an existing document the draft is merged into it;
/// otherwise a new document is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    /// Existing id to update, or the id to create with
    pub id: Option<String>,
    /// Title
    pub title: String,
    /// Markdown content
    pub content: String,
    /// Tags; `None` keeps the existing tags on update
    pub tags: Option<Vec<String>>,
    /// Explicit expiry for a new document
    pub expires_at: Option<DateTime<Utc>>,
}

impl DocumentDraft {
    /// Create a draft for a new document.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Target an existing (or specific) id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the tags.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set an explicit expiry.
    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// The user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Short biography (Markdown)
    pub bio: String,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "MarkMe User".to_string(),
            bio: "Write a brief description about yourself.".to_string(),
            avatar: None,
        }
    }
}

/// Application preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Theme preference
    #[serde(default)]
    pub theme: Theme,
    /// Editor font size name
    #[serde(default = "default_font_size")]
    pub font_size: String,
    /// Editor font family name
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Save the editor buffer automatically
    #[serde(default = "default_true")]
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            font_size: default_font_size(),
            font_family: default_font_family(),
            auto_save: true,
        }
    }
}

fn default_font_size() -> String {
    "medium".to_string()
}

fn default_font_family() -> String {
    "fira-code".to_string()
}

fn default_true() -> bool {
    true
}

/// Word and character counts for a Markdown buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStats {
    /// Whitespace-separated tokens of the trimmed text
    pub words: usize,
    /// Unicode scalar values
    pub characters: usize,
}

impl TextStats {
    /// Count words and characters in `text`.
    ///
    /// ```
    /// use markme_core::TextStats;
    ///
    /// let stats = TextStats::of("  hello   markdown world \n");
    /// assert_eq!(stats.words, 3);
    /// assert_eq!(TextStats::of("   ").words, 0);
    /// ```
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }
}

/// Aggregate numbers over the live documents of a library.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    /// Number of live documents
    pub total_documents: usize,
    /// Sum of word counts
    pub total_words: usize,
    /// Most recent `updated_at`
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn doc(expires_at: Option<DateTime<Utc>>) -> Document {
        Document {
            id: "d1".into(),
            title: "Title".into(),
            content: "one two".into(),
            tags: vec![],
            created_at: at(1),
            updated_at: at(1),
            expires_at,
        }
    }

    #[test]
    fn test_document_expiry_is_exclusive() {
        let d = doc(Some(at(10)));
        assert!(!d.is_expired(at(9)));
        assert!(d.is_expired(at(10)));
        assert!(d.is_expired(at(10) + Duration::seconds(1)));
    }

    #[test]
    fn test_document_without_expiry_never_expires() {
        assert!(!doc(None).is_expired(at(28)));
    }

    #[test]
    fn test_document_json_uses_camel_case() {
        let json = serde_json::to_value(doc(Some(at(10)))).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("expiresAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_document_json_omits_missing_expiry() {
        let json = serde_json::to_value(doc(None)).unwrap();
        assert!(json.get("expiresAt").is_none());

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back.expires_at, None);
    }

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_size, "medium");
        assert_eq!(settings.font_family, "fira-code");
        assert!(settings.auto_save);
    }

    #[test]
    fn test_profile_default() {
        let profile = Profile::default();
        assert_eq!(profile.name, "MarkMe User");
        assert!(profile.avatar.is_none());
    }

    #[test]
    fn test_text_stats() {
        assert_eq!(TextStats::of(""), TextStats::default());
        let stats = TextStats::of("# Hi\n\nthere é");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.characters, 13);
    }

    #[test]
    fn test_draft_builder() {
        let draft = DocumentDraft::new("T", "C").with_id("x").with_tags(["a", "b"]);
        assert_eq!(draft.id.as_deref(), Some("x"));
        assert_eq!(draft.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(draft.expires_at, None);
    }
}
