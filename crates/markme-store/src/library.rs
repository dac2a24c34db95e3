//! Document lifecycle on top of a [`DocumentStore`].
//!
//! The library owns the policy the raw store does not know about:
//! ids, timestamps, expiry and the seeded example document. Every
//! operation takes the current time explicitly.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use markme_core::{
    Document, DocumentDraft, LibraryStats, MarkmeError, Profile, Result, Settings,
};

use crate::sample::{EXAMPLE_CONTENT, EXAMPLE_ID, EXAMPLE_TAGS, EXAMPLE_TITLE};
use crate::DocumentStore;

/// Days a document lives after its last save.
pub const DEFAULT_EXPIRY_DAYS: u32 = 30;

/// Documents, profile and settings backed by a store.
#[derive(Debug)]
pub struct Library<S> {
    store: S,
    expiry: Duration,
}

impl<S: DocumentStore> Library<S> {
    /// Create a library with the default 30 day expiry.
    pub fn new(store: S) -> Self {
        Self::with_expiry_days(store, DEFAULT_EXPIRY_DAYS)
    }

    pub fn with_expiry_days(store: S, days: u32) -> Self {
        Self {
            store,
            expiry: Duration::days(i64::from(days)),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Expiry time for a document saved at `now`.
    ///
    /// Fails with [`MarkmeError::Invalid`] when the expiry falls outside
    /// the representable date range.
    pub fn expiry_from(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        now.checked_add_signed(self.expiry).ok_or_else(|| {
            MarkmeError::Invalid(format!(
                "expiry of {} days from {now} is out of range",
                self.expiry.num_days()
            ))
        })
    }

    /// All live documents, in store order.
    ///
    /// Expired documents are removed from the store as a side effect.
    pub fn documents(&mut self, now: DateTime<Utc>) -> Result<Vec<Document>> {
        let (expired, live): (Vec<_>, Vec<_>) = self
            .store
            .list()?
            .into_iter()
            .partition(|doc| doc.is_expired(now));

        if !expired.is_empty() {
            info!("purging {} expired document(s)", expired.len());
            for doc in &expired {
                debug!("expired: {} ({})", doc.id, doc.title);
            }
            self.store.replace_all(live.clone())?;
        }

        Ok(live)
    }

    /// One live document by id.
    pub fn document(&mut self, id: &str, now: DateTime<Utc>) -> Result<Option<Document>> {
        Ok(self.documents(now)?.into_iter().find(|doc| doc.id == id))
    }

    /// Create or update a document from a draft.
    ///
    /// A draft whose id names a live document updates it: title and
    /// content are replaced, tags only when the draft carries them,
    /// `created_at` is kept and the expiry restarts from `now`.
    /// Anything else creates a new document, with a fresh id unless the
    /// draft names one.
    pub fn save(&mut self, draft: DocumentDraft, now: DateTime<Utc>) -> Result<Document> {
        let existing = match &draft.id {
            Some(id) => self.document(id, now)?,
            None => {
                self.documents(now)?;
                None
            }
        };

        let doc = match existing {
            Some(mut doc) => {
                doc.title = draft.title;
                doc.content = draft.content;
                if let Some(tags) = draft.tags {
                    doc.tags = tags;
                }
                doc.updated_at = now;
                doc.expires_at = Some(self.expiry_from(now)?);
                debug!("updating document {}", doc.id);
                doc
            }
            None => {
                let expires_at = match draft.expires_at {
                    Some(at) => at,
                    None => self.expiry_from(now)?,
                };
                let doc = Document {
                    id: draft.id.unwrap_or_else(new_id),
                    title: draft.title,
                    content: draft.content,
                    tags: draft.tags.unwrap_or_default(),
                    created_at: now,
                    updated_at: now,
                    expires_at: Some(expires_at),
                };
                debug!("creating document {}", doc.id);
                doc
            }
        };

        self.store.put(doc.clone())?;
        Ok(doc)
    }

    /// Delete a document. Returns whether it existed.
    pub fn delete(&mut self, id: &str, now: DateTime<Utc>) -> Result<bool> {
        self.documents(now)?;
        self.store.delete(id)
    }

    /// Restart a live document's expiry from `now`.
    ///
    /// Returns the updated document, or `None` when no live document has
    /// that id. `updated_at` is left alone.
    pub fn extend(&mut self, id: &str, now: DateTime<Utc>) -> Result<Option<Document>> {
        let Some(mut doc) = self.document(id, now)? else {
            return Ok(None);
        };
        doc.expires_at = Some(self.expiry_from(now)?);
        self.store.put(doc.clone())?;
        Ok(Some(doc))
    }

    /// Live documents whose title contains `term`, ignoring case.
    ///
    /// An empty term matches everything.
    pub fn search(&mut self, term: &str, now: DateTime<Utc>) -> Result<Vec<Document>> {
        let needle = term.to_lowercase();
        Ok(self
            .documents(now)?
            .into_iter()
            .filter(|doc| doc.title.to_lowercase().contains(&needle))
            .collect())
    }

    /// Seed the example document when the library is empty.
    ///
    /// Returns the seeded document, or `None` when there was already
    /// something in the library.
    pub fn initialize_defaults(&mut self, now: DateTime<Utc>) -> Result<Option<Document>> {
        if !self.documents(now)?.is_empty() {
            return Ok(None);
        }

        let draft = DocumentDraft::new(EXAMPLE_TITLE, EXAMPLE_CONTENT)
            .with_id(EXAMPLE_ID)
            .with_tags(EXAMPLE_TAGS)
            .expiring_at(self.expiry_from(now)?);
        let doc = self.save(draft, now)?;
        info!("seeded example document");
        Ok(Some(doc))
    }

    /// Totals over the live documents.
    pub fn stats(&mut self, now: DateTime<Utc>) -> Result<LibraryStats> {
        let docs = self.documents(now)?;
        Ok(LibraryStats {
            total_documents: docs.len(),
            total_words: docs.iter().map(|doc| doc.stats().words).sum(),
            last_updated: docs.iter().map(|doc| doc.updated_at).max(),
        })
    }

    /// Purge expired documents now. Returns how many were removed.
    pub fn cleanup(&mut self, now: DateTime<Utc>) -> Result<usize> {
        let before = self.store.list()?.len();
        let after = self.documents(now)?.len();
        Ok(before - after)
    }

    pub fn profile(&self) -> Result<Profile> {
        self.store.load_profile()
    }

    pub fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.store.save_profile(profile)
    }

    pub fn settings(&self) -> Result<Settings> {
        self.store.load_settings()
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.store.save_settings(settings)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
