//! JSON file store.
//!
//! All records live in one JSON object under three fixed keys:
//!
//! ```json
//! {
//!   "markme-documents": [ ... ],
//!   "markme-profile": { ... },
//!   "markme-settings": { ... }
//! }
//! ```
//!
//! The file is read once on open and rewritten whole after every change.
//! A write goes to a sibling temp file first and is then renamed over the
//! original, so readers never see a half-written store. Changes are made
//! to a copy of the records and only kept once the write succeeds.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use markme_core::{Document, MarkmeError, Profile, Result, Settings};
use serde::{Deserialize, Serialize};

use crate::{upsert, DocumentStore};

pub const DOCUMENTS_KEY: &str = "markme-documents";
pub const PROFILE_KEY: &str = "markme-profile";
pub const SETTINGS_KEY: &str = "markme-settings";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(rename = "markme-documents", default)]
    documents: Vec<Document>,
    #[serde(
        rename = "markme-profile",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    profile: Option<Profile>,
    #[serde(
        rename = "markme-settings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    settings: Option<Settings>,
}

/// A [`DocumentStore`] persisted to a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreFile,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first write.
    /// An unreadable or malformed file is an error, never silently reset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                StoreFile::default()
            } else {
                serde_json::from_str(&raw).map_err(|e| {
                    MarkmeError::Store(format!("Parse error in {}: {}", path.display(), e))
                })?
            }
        } else {
            debug!("store {} does not exist yet", path.display());
            StoreFile::default()
        };

        info!(
            "opened store {} ({} documents)",
            path.display(),
            data.documents.len()
        );
        Ok(Self { path, data })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the records, write it, then keep it.
    ///
    /// On a failed write the handle still matches the file.
    fn commit(&mut self, change: impl FnOnce(&mut StoreFile)) -> Result<()> {
        let mut next = self.data.clone();
        change(&mut next);
        self.write(&next)?;
        self.data = next;
        Ok(())
    }

    fn write(&self, data: &StoreFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            "wrote store {} ({} documents)",
            self.path.display(),
            data.documents.len()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DocumentStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Document>> {
        Ok(self.data.documents.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.data.documents.iter().find(|doc| doc.id == id).cloned())
    }

    fn put(&mut self, doc: Document) -> Result<()> {
        self.commit(|data| upsert(&mut data.documents, doc))
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        if !self.data.documents.iter().any(|doc| doc.id == id) {
            return Ok(false);
        }
        self.commit(|data| data.documents.retain(|doc| doc.id != id))?;
        Ok(true)
    }

    fn replace_all(&mut self, docs: Vec<Document>) -> Result<()> {
        self.commit(|data| data.documents = docs)
    }

    fn load_profile(&self) -> Result<Profile> {
        Ok(self.data.profile.clone().unwrap_or_default())
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.commit(|data| data.profile = Some(profile.clone()))
    }

    fn load_settings(&self) -> Result<Settings> {
        Ok(self.data.settings.clone().unwrap_or_default())
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.commit(|data| data.settings = Some(settings.clone()))
    }
}
