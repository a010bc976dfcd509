use super::{LoadOutcome, Storage, CUSTOM_VIEWS_KEY};
use crate::error::{JobDashError, Result};
use crate::views::{builtin_views, JobViewConfig};
use tracing::{debug, warn};

/// Persistence for the custom view sequence.
///
/// The registry never talks to storage directly; whoever owns it calls
/// [`save`](ViewPersistence::save) after every registry mutation.
pub trait ViewPersistence {
    /// Load custom views. Parse failures degrade to [`LoadOutcome::Corrupt`].
    fn load(&self) -> Result<LoadOutcome<Vec<JobViewConfig>>>;

    /// Overwrite the persisted sequence.
    fn save(&self, views: &[JobViewConfig]) -> Result<()>;
}

/// Custom views stored as one JSON array under [`CUSTOM_VIEWS_KEY`].
pub struct ViewStore<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> ViewStore<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> ViewPersistence for ViewStore<'_, S> {
    fn load(&self) -> Result<LoadOutcome<Vec<JobViewConfig>>> {
        let Some(raw) = self.storage.get_item(CUSTOM_VIEWS_KEY)? else {
            return Ok(LoadOutcome::Missing);
        };

        let parsed: Vec<JobViewConfig> = match serde_json::from_str(&raw) {
            Ok(views) => views,
            Err(e) => {
                warn!(key = CUSTOM_VIEWS_KEY, error = %e, "discarding corrupt custom views");
                self.storage.remove_item(CUSTOM_VIEWS_KEY)?;
                return Ok(LoadOutcome::Corrupt {
                    error: e.to_string(),
                });
            }
        };

        let builtins = builtin_views();
        let mut views: Vec<JobViewConfig> = Vec::with_capacity(parsed.len());
        for mut view in parsed {
            let taken = builtins.iter().any(|b| b.value == view.value)
                || views.iter().any(|v| v.value == view.value);
            if taken {
                warn!(view = %view.value, "skipping custom view with duplicate id");
                continue;
            }
            view.is_custom = true;
            views.push(view);
        }

        debug!(count = views.len(), "loaded custom views");
        Ok(LoadOutcome::Loaded(views))
    }

    fn save(&self, views: &[JobViewConfig]) -> Result<()> {
        let content = serde_json::to_string(views).map_err(JobDashError::Serialization)?;
        self.storage.set_item(CUSTOM_VIEWS_KEY, &content)?;
        debug!(count = views.len(), "persisted custom views");
        Ok(())
    }
}
