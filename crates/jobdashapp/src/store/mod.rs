//! # Storage Layer
//!
//! The dashboard persists a handful of JSON documents under fixed keys, the
//! same way a browser app uses `localStorage`. This module splits that in two:
//!
//! 1. **Raw I/O**: the [`Storage`] trait reads, writes and removes a string per key.
//!    [`fs::FsStorage`] keeps one `<key>.json` file per key in a data directory,
//!    [`memory::MemStorage`] keeps them in a map for tests.
//! 2. **Documents**: [`views::ViewStore`] and [`draft::DraftStore`] know what lives
//!    under their key, how to (de)serialize it and how to degrade when it is corrupt.
//!
//! ## Keys
//!
//! | Key | Contents |
//! |-----|----------|
//! | `customJobViews` | JSON array of custom `JobViewConfig` |
//! | `jobPostingDraft` | JSON object with the job-posting wizard draft |
//!
//! ## Write Semantics
//!
//! Every mutation rewrites the whole document. There is no locking or merge:
//! two writers overwrite each other and the last write wins.
//!
//! ## Corruption
//!
//! Unparseable documents are never surfaced as errors. Loading reports
//! [`LoadOutcome::Corrupt`], logs a warning and removes the entry so the next
//! load starts clean.

use crate::error::Result;

pub mod draft;
pub mod fs;
pub mod memory;
pub mod views;

pub const CUSTOM_VIEWS_KEY: &str = "customJobViews";
pub const DRAFT_KEY: &str = "jobPostingDraft";

/// Key/value string storage.
///
/// All methods take `&self`; implementations needing mutation use interior
/// mutability.
pub trait Storage {
    /// Read the raw value for `key`. `Ok(None)` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Result of loading a persisted document.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// The document was present and parsed.
    Loaded(T),
    /// Nothing stored under the key.
    Missing,
    /// The stored document could not be parsed and was discarded.
    Corrupt { error: String },
}

impl<T> LoadOutcome<T> {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt { .. })
    }

    /// The loaded value, or `None` for missing/corrupt documents.
    pub fn loaded(self) -> Option<T> {
        match self {
            LoadOutcome::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Default> LoadOutcome<T> {
    /// The loaded value, degrading to the default.
    pub fn into_value(self) -> T {
        self.loaded().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_degrades_to_default() {
        let corrupt: LoadOutcome<Vec<u8>> = LoadOutcome::Corrupt {
            error: "bad".into(),
        };
        assert!(corrupt.is_corrupt());
        assert!(corrupt.into_value().is_empty());

        let missing: LoadOutcome<Vec<u8>> = LoadOutcome::Missing;
        assert!(missing.loaded().is_none());

        assert_eq!(LoadOutcome::Loaded(vec![1u8]).into_value(), vec![1]);
    }
}
