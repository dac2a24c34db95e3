//! In-memory store.

use markme_core::{Document, Profile, Result, Settings};

use crate::{upsert, DocumentStore};

/// A [`DocumentStore`] that keeps everything in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Vec<Document>,
    profile: Option<Profile>,
    settings: Option<Settings>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with documents.
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }
}

impl DocumentStore for MemoryStore {
    fn list(&self) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.documents.iter().find(|doc| doc.id == id).cloned())
    }

    fn put(&mut self, doc: Document) -> Result<()> {
        upsert(&mut self.documents, doc);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.id != id);
        Ok(self.documents.len() != before)
    }

    fn replace_all(&mut self, docs: Vec<Document>) -> Result<()> {
        self.documents = docs;
        Ok(())
    }

    fn load_profile(&self) -> Result<Profile> {
        Ok(self.profile.clone().unwrap_or_default())
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn load_settings(&self) -> Result<Settings> {
        Ok(self.settings.clone().unwrap_or_default())
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.settings = Some(settings.clone());
        Ok(())
    }
}
