//! Debounced autosave of the job-posting wizard draft.
//!
//! Every form edit hands the whole draft to [`DraftAutosave::edit`]. Nothing is
//! written until the debounce window passes without further edits, and a draft
//! whose content equals the last written one is not written again.

use crate::debounce::Debouncer;
use crate::error::Result;
use crate::model::JobPostingDraft;
use crate::store::draft::DraftStore;
use crate::store::{LoadOutcome, Storage};
use std::time::{Duration, Instant};
use tracing::debug;

type DraftDebouncer = Debouncer<JobPostingDraft, fn(&JobPostingDraft, &JobPostingDraft) -> bool>;

pub struct DraftAutosave<'a, S: Storage> {
    store: DraftStore<'a, S>,
    debouncer: DraftDebouncer,
}

impl<'a, S: Storage> DraftAutosave<'a, S> {
    pub fn new(storage: &'a S, window: Duration) -> Self {
        Self {
            store: DraftStore::new(storage),
            debouncer: Debouncer::with_equality(
                window,
                JobPostingDraft::same_content as fn(&JobPostingDraft, &JobPostingDraft) -> bool,
            ),
        }
    }

    /// Restore the stored draft, degrading to an empty one.
    pub fn restore(&self) -> Result<JobPostingDraft> {
        let outcome = self.store.load()?;
        Ok(match outcome {
            LoadOutcome::Loaded(draft) => draft,
            _ => JobPostingDraft::default(),
        })
    }

    /// Record an edit. Replaces any pending, unwritten edit.
    pub fn edit(&mut self, draft: JobPostingDraft, now: Instant) {
        self.debouncer.dispatch(draft, now);
    }

    /// Write the pending draft if its window elapsed. Returns whether a write happened.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        match self.debouncer.poll(now) {
            Some(draft) => self.write(&draft),
            None => Ok(false),
        }
    }

    /// Write the pending draft now, e.g. before leaving the wizard.
    pub fn flush(&mut self) -> Result<bool> {
        match self.debouncer.flush() {
            Some(draft) => self.write(&draft),
            None => Ok(false),
        }
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// The posting was submitted: drop pending edits and the stored draft.
    pub fn submit(&mut self) -> Result<()> {
        self.debouncer.reset();
        self.store.clear()?;
        debug!("draft cleared after submit");
        Ok(())
    }

    fn write(&self, draft: &JobPostingDraft) -> Result<bool> {
        self.store.save(draft)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::DEFAULT_WINDOW;
    use crate::store::memory::MemStorage;
    use crate::store::DRAFT_KEY;
    use serde_json::json;

    fn draft(title: &str) -> JobPostingDraft {
        let mut draft = JobPostingDraft::default();
        draft.position.insert("title".into(), json!(title));
        draft
    }

    #[test]
    fn rapid_edits_coalesce_into_one_write() {
        let storage = MemStorage::new();
        let mut autosave = DraftAutosave::new(&storage, DEFAULT_WINDOW);
        let start = Instant::now();

        autosave.edit(draft("V"), start);
        autosave.edit(draft("Vý"), start + Duration::from_millis(100));
        autosave.edit(draft("Vývojář"), start + Duration::from_millis(200));

        assert!(!autosave.tick(start + Duration::from_millis(600)).unwrap());
        assert!(autosave.tick(start + Duration::from_millis(700)).unwrap());
        assert_eq!(storage.write_count(), 1);

        let restored = autosave.restore().unwrap();
        assert_eq!(restored.position_title(), Some("Vývojář"));
    }

    #[test]
    fn identical_content_is_not_rewritten() {
        let storage = MemStorage::new();
        let mut autosave = DraftAutosave::new(&storage, DEFAULT_WINDOW);
        let start = Instant::now();

        autosave.edit(draft("Skladník"), start);
        assert!(autosave.flush().unwrap());
        autosave.edit(draft("Skladník"), start);
        assert!(!autosave.flush().unwrap());
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn submit_clears_pending_and_stored_draft() {
        let storage = MemStorage::new();
        let mut autosave = DraftAutosave::new(&storage, DEFAULT_WINDOW);
        let start = Instant::now();

        autosave.edit(draft("A"), start);
        autosave.flush().unwrap();
        autosave.edit(draft("B"), start);
        autosave.submit().unwrap();

        assert!(!autosave.has_pending());
        assert!(!storage.contains_key(DRAFT_KEY));
        assert_eq!(autosave.restore().unwrap(), JobPostingDraft::default());
    }

    #[test]
    fn restore_degrades_on_corrupt_draft() {
        let storage = MemStorage::new();
        storage.set_item(DRAFT_KEY, "nope").unwrap();
        let autosave = DraftAutosave::new(&storage, DEFAULT_WINDOW);
        assert_eq!(autosave.restore().unwrap(), JobPostingDraft::default());
    }
}
