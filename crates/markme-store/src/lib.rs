//! MarkMe Store
//!
//! Persistence for documents, the user profile and settings, kept behind
//! the [`DocumentStore`] trait so callers never touch storage directly.
//!
//! # Overview
//!
//! - [`DocumentStore`] - get/list/put/delete over typed records
//! - [`MemoryStore`] - in-process store, used in tests and dry runs
//! - [`JsonFileStore`] - one JSON file, rewritten atomically on change
//! - [`Library`] - expiry, id and timestamp policy on top of any store
//! - [`export`] - file names and payloads for exporting documents
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use markme_core::DocumentDraft;
//! use markme_store::{Library, MemoryStore};
//!
//! let mut library = Library::new(MemoryStore::new());
//! let now = Utc::now();
//! let doc = library.save(DocumentDraft::new("Notes", "# Hello"), now).unwrap();
//! assert_eq!(library.document(&doc.id, now).unwrap().unwrap().title, "Notes");
//! ```

pub mod export;
pub mod json;
pub mod library;
pub mod memory;
pub mod sample;

pub use json::JsonFileStore;
pub use library::{Library, DEFAULT_EXPIRY_DAYS};
pub use memory::MemoryStore;

use markme_core::{Document, Profile, Result, Settings};

/// Typed key-value persistence for markme records.
///
/// Implementations store documents in insertion order and return
/// defaults for a profile or settings record that was never saved.
pub trait DocumentStore {
    /// Every stored document, expired ones included.
    fn list(&self) -> Result<Vec<Document>>;

    /// Look up one document by id.
    fn get(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.list()?.into_iter().find(|doc| doc.id == id))
    }

    /// Insert a document, or replace the one with the same id in place.
    fn put(&mut self, doc: Document) -> Result<()>;

    /// Remove a document. Returns whether it existed.
    fn delete(&mut self, id: &str) -> Result<bool>;

    /// Replace the whole document set.
    fn replace_all(&mut self, docs: Vec<Document>) -> Result<()>;

    /// The saved profile, or the default one.
    fn load_profile(&self) -> Result<Profile>;

    /// Save the profile.
    fn save_profile(&mut self, profile: &Profile) -> Result<()>;

    /// The saved settings, or the defaults.
    fn load_settings(&self) -> Result<Settings>;

    /// Save the settings.
    fn save_settings(&mut self, settings: &Settings) -> Result<()>;
}

/// Insert `doc` into `docs`, replacing an existing entry with the same id.
pub(crate) fn upsert(docs: &mut Vec<Document>, doc: Document) {
    match docs.iter_mut().find(|existing| existing.id == doc.id) {
        Some(existing) => *existing = doc,
        None => docs.push(doc),
    }
}
