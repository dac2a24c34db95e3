//! MarkMe Core
//!
//! This crate provides the record types and error definitions shared
//! by every markme crate.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Document`], [`DocumentDraft`] - Stored Markdown documents and save requests
//! - [`Profile`], [`Settings`], [`Theme`] - User records kept next to the documents
//! - [`TextStats`], [`LibraryStats`] - Word and character counts
//! - [`MarkmeError`] - Error types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::Theme;
pub use error::{MarkmeError, Result};
pub use types::{Document, DocumentDraft, LibraryStats, Profile, Settings, TextStats};
