use super::{LoadOutcome, Storage, DRAFT_KEY};
use crate::error::{JobDashError, Result};
use crate::model::JobPostingDraft;
use chrono::Utc;
use tracing::{debug, warn};

/// The job-posting wizard draft, stored under [`DRAFT_KEY`].
pub struct DraftStore<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> DraftStore<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Load the draft. Parse failures remove the entry and report `Corrupt`.
    pub fn load(&self) -> Result<LoadOutcome<JobPostingDraft>> {
        let Some(raw) = self.storage.get_item(DRAFT_KEY)? else {
            return Ok(LoadOutcome::Missing);
        };
        match serde_json::from_str(&raw) {
            Ok(draft) => Ok(LoadOutcome::Loaded(draft)),
            Err(e) => {
                warn!(key = DRAFT_KEY, error = %e, "discarding corrupt draft");
                self.storage.remove_item(DRAFT_KEY)?;
                Ok(LoadOutcome::Corrupt {
                    error: e.to_string(),
                })
            }
        }
    }

    /// Persist the draft, stamping `saved_at`. Returns the stored draft.
    pub fn save(&self, draft: &JobPostingDraft) -> Result<JobPostingDraft> {
        let mut stamped = draft.clone();
        stamped.saved_at = Some(Utc::now());
        let content = serde_json::to_string(&stamped).map_err(JobDashError::Serialization)?;
        self.storage.set_item(DRAFT_KEY, &content)?;
        debug!("persisted job posting draft");
        Ok(stamped)
    }

    /// Drop the draft, e.g. after the posting was submitted.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(DRAFT_KEY)
    }
}
