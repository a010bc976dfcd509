//! # API Facade
//!
//! The API layer is a **thin facade** over the dashboard reducer and the
//! persistence adapters. It is the single entry point for every client (the
//! CLI today), and plays the part the filter and view dialogs play in a
//! browser UI: validate the user's input, dispatch one [`Action`], persist
//! what changed.
//!
//! ## Role and Responsibilities
//!
//! - **Validates** input the reducer accepts blindly (catalog ids and option
//!   values, existing and editable view ids)
//! - **Dispatches** to [`DashboardState::apply`]
//! - **Persists** on [`Effect::PersistViews`], immediately, through [`ViewStore`]
//! - **Returns structured types** ([`CmdResult`]), never strings for the terminal
//!
//! ## Degraded Loads
//!
//! [`JobDashApi::open`] never fails on corrupt stored views. The views are
//! dropped, the entry is removed, and a warning lands in [`JobDashApi::notices`]
//! for the client to show.
//!
//! ## Generic Over Storage
//!
//! `JobDashApi<S: Storage>` runs on `FsStorage` in production and
//! `MemStorage` in tests.

use crate::catalog::{self, FilterOption};
use crate::debounce::DEFAULT_WINDOW;
use crate::draft::DraftAutosave;
use crate::error::{JobDashError, Result};
use crate::filters::ActiveFilterSet;
use crate::model::{Job, JobPostingDraft};
use crate::pipeline::SortOption;
use crate::state::{Action, DashboardState, Effect};
use crate::store::draft::DraftStore;
use crate::store::views::{ViewPersistence, ViewStore};
use crate::store::{LoadOutcome, Storage};
use crate::suggest::{FieldSuggester, Prefill, SuggestionCache};
use crate::views::{JobViewConfig, ViewRegistry};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CmdResult {
    pub effects: Vec<Effect>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    fn new(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            messages: Vec::new(),
        }
    }

    fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn persisted(&self) -> bool {
        self.effects.contains(&Effect::PersistViews)
    }
}

/// The main API facade for dashboard operations.
pub struct JobDashApi<S: Storage> {
    storage: S,
    state: DashboardState,
    notices: Vec<CmdMessage>,
    debounce: Duration,
}

impl<S: Storage> JobDashApi<S> {
    /// Load persisted custom views and start on the default view.
    pub fn open(storage: S) -> Result<Self> {
        let mut notices = Vec::new();
        let custom = match ViewStore::new(&storage).load()? {
            LoadOutcome::Loaded(views) => views,
            LoadOutcome::Missing => Vec::new(),
            LoadOutcome::Corrupt { error } => {
                warn!(%error, "custom views were corrupt and have been reset");
                notices.push(CmdMessage::warning(
                    "Saved views could not be read and have been reset",
                ));
                Vec::new()
            }
        };
        debug!(custom = custom.len(), "dashboard opened");

        Ok(Self {
            storage,
            state: DashboardState::new(ViewRegistry::new(custom)),
            notices,
            debounce: DEFAULT_WINDOW,
        })
    }

    /// Draft autosave window, see [`DraftAutosave`].
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce = window;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Warnings collected while opening.
    pub fn notices(&self) -> &[CmdMessage] {
        &self.notices
    }

    pub fn catalog(&self) -> &'static [FilterOption] {
        catalog::FILTERS
    }

    /// Built-in views first, then custom views in creation order.
    pub fn views(&self) -> Vec<&JobViewConfig> {
        self.state.views.all().collect()
    }

    pub fn view(&self, id: &str) -> Result<&JobViewConfig> {
        self.state
            .views
            .get(id)
            .ok_or_else(|| JobDashError::ViewNotFound(id.to_string()))
    }

    pub fn active_filters(&self) -> &ActiveFilterSet {
        &self.state.filters
    }

    pub fn select_view(&mut self, id: &str) -> Result<CmdResult> {
        self.view(id)?;
        self.dispatch(Action::SelectView(id.to_string()))
    }

    /// Add a value the way the filter dialog does: the id must be in the
    /// catalog and fixed-option filters only take their listed options.
    pub fn add_filter(&mut self, id: &str, value: &str) -> Result<CmdResult> {
        let option = catalog::get_option(id)
            .ok_or_else(|| JobDashError::InvalidFilter(format!("unknown filter '{}'", id)))?;
        let value = value.trim();
        if value.is_empty() {
            return Err(JobDashError::InvalidFilter(format!(
                "no value given for '{}'",
                id
            )));
        }
        if !option.accepts(value) {
            return Err(JobDashError::InvalidFilter(format!(
                "'{}' is not one of: {}",
                value,
                option.options.join(", ")
            )));
        }
        self.dispatch(Action::AddFilter {
            id: id.to_string(),
            value: value.to_string(),
        })
    }

    pub fn remove_filter(&mut self, id: &str, value: Option<&str>) -> Result<CmdResult> {
        self.dispatch(Action::RemoveFilter {
            id: id.to_string(),
            value: value.map(str::to_string),
        })
    }

    pub fn clear_filters(&mut self) -> Result<CmdResult> {
        self.dispatch(Action::ClearFilters)
    }

    pub fn set_search(&mut self, search: &str) -> Result<CmdResult> {
        self.dispatch(Action::SetSearch(search.to_string()))
    }

    pub fn set_sort(&mut self, sort: SortOption) -> Result<CmdResult> {
        self.dispatch(Action::SetSort(sort))
    }

    /// Save the current filters as a new custom view and make it active.
    pub fn save_view(&mut self, name: &str) -> Result<CmdResult> {
        let result = self.dispatch(Action::SaveView {
            name: name.to_string(),
        })?;
        let message = format!("Saved view '{}' ({})", name.trim(), self.state.active_view);
        Ok(result.with_message(CmdMessage::success(message)))
    }

    pub fn update_view(
        &mut self,
        id: &str,
        name: &str,
        filters: ActiveFilterSet,
    ) -> Result<CmdResult> {
        self.ensure_custom(id)?;
        let result = self.dispatch(Action::UpdateView {
            id: id.to_string(),
            name: name.to_string(),
            filters,
        })?;
        Ok(result.with_message(CmdMessage::success(format!("Updated view '{}'", id))))
    }

    pub fn delete_view(&mut self, id: &str) -> Result<CmdResult> {
        self.ensure_custom(id)?;
        let result = self.dispatch(Action::DeleteView(id.to_string()))?;
        Ok(result.with_message(CmdMessage::success(format!("Deleted view '{}'", id))))
    }

    /// The visible jobs for the current filters, search and sort.
    pub fn list_jobs(&self, jobs: &[Job]) -> Vec<Job> {
        self.state.visible_jobs(jobs)
    }

    pub fn draft(&self) -> Result<LoadOutcome<JobPostingDraft>> {
        DraftStore::new(&self.storage).load()
    }

    pub fn clear_draft(&self) -> Result<()> {
        DraftAutosave::new(&self.storage, self.debounce).submit()
    }

    /// Prefill the stored draft's position step for `position`.
    ///
    /// Suggestion failures degrade to the title alone; only storage errors fail.
    pub fn prefill_draft<T: FieldSuggester>(
        &self,
        suggestions: &mut SuggestionCache<T>,
        position: &str,
    ) -> Result<Prefill> {
        let mut autosave = DraftAutosave::new(&self.storage, self.debounce);
        let mut draft = autosave.restore()?;
        let prefill = suggestions.prefill(position);
        prefill.apply_to(&mut draft);
        autosave.edit(draft, Instant::now());
        autosave.flush()?;
        Ok(prefill)
    }

    fn ensure_custom(&self, id: &str) -> Result<()> {
        if self.state.views.is_builtin(id) {
            return Err(JobDashError::BuiltinView(id.to_string()));
        }
        self.view(id).map(|_| ())
    }

    /// Apply `action` and persist before committing: a failed write leaves
    /// both the state and the storage as they were.
    fn dispatch(&mut self, action: Action) -> Result<CmdResult> {
        let mut next = self.state.clone();
        let effects = next.apply(action)?;
        if effects.contains(&Effect::PersistViews) {
            ViewStore::new(&self.storage).save(next.views.custom())?;
        }
        self.state = next;
        Ok(CmdResult::new(effects))
    }
}

/// Read a JSON array of jobs.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>> {
    let content = fs::read_to_string(path)?;
    let jobs: Vec<Job> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = jobs.len(), "loaded jobs");
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStorage;
    use crate::store::CUSTOM_VIEWS_KEY;
    use crate::suggest::FieldSuggestion;
    use crate::test_utils::sample_jobs;

    fn api() -> JobDashApi<MemStorage> {
        JobDashApi::open(MemStorage::new()).unwrap()
    }

    struct Offline;

    impl FieldSuggester for Offline {
        fn suggest(&self, _position: &str) -> Result<FieldSuggestion> {
            Err(JobDashError::Suggest("offline".into()))
        }
    }

    #[test]
    fn opens_on_default_view() {
        let api = api();
        assert_eq!(api.state().active_view, "Aktivní");
        assert_eq!(api.views().len(), 5);
        assert!(api.notices().is_empty());
    }

    #[test]
    fn corrupt_views_open_with_notice() {
        let storage = MemStorage::new();
        storage.set_item(CUSTOM_VIEWS_KEY, "[{oops").unwrap();

        let api = JobDashApi::open(storage).unwrap();
        assert!(api.state().views.custom().is_empty());
        assert_eq!(api.notices().len(), 1);
        assert_eq!(api.notices()[0].level, MessageLevel::Warning);
        assert!(!api.storage().contains_key(CUSTOM_VIEWS_KEY));
    }

    #[test]
    fn add_filter_validates_against_catalog() {
        let mut api = api();
        assert!(matches!(
            api.add_filter("salary", "100"),
            Err(JobDashError::InvalidFilter(_))
        ));
        assert!(matches!(
            api.add_filter("status", "Smazaný"),
            Err(JobDashError::InvalidFilter(_))
        ));
        assert!(matches!(
            api.add_filter("location", "  "),
            Err(JobDashError::InvalidFilter(_))
        ));
        assert!(api.add_filter("location", "Praha").is_ok());
    }

    #[test]
    fn save_view_persists_immediately() {
        let mut api = api();
        api.add_filter("location", "Praha").unwrap();
        let result = api.save_view("Praha").unwrap();

        assert!(result.persisted());
        assert_eq!(api.storage().write_count(), 1);

        let reopened = JobDashApi::open(api.storage).unwrap();
        assert!(reopened.view("praha").unwrap().is_custom);
    }

    #[test]
    fn failed_view_write_leaves_state_untouched() {
        let mut api = api();
        api.add_filter("location", "Praha").unwrap();
        let before = api.state().clone();

        api.storage().set_simulate_write_error(true);
        assert!(matches!(
            api.save_view("Praha"),
            Err(JobDashError::Store(_))
        ));
        assert_eq!(api.state(), &before);
        assert!(api.state().views.get("praha").is_none());

        api.storage().set_simulate_write_error(false);
        api.save_view("Praha").unwrap();
        assert!(api.storage().contains_key(CUSTOM_VIEWS_KEY));
        assert_eq!(api.state().active_view, "praha");

        api.storage().set_simulate_write_error(true);
        assert!(api.delete_view("praha").is_err());
        assert!(api.state().views.get("praha").is_some());
        assert_eq!(api.state().active_view, "praha");
    }

    #[test]
    fn builtin_views_cannot_be_edited() {
        let mut api = api();
        assert!(matches!(
            api.delete_view("Aktivní"),
            Err(JobDashError::BuiltinView(_))
        ));
        assert!(matches!(
            api.update_view("Vystavené", "X", ActiveFilterSet::new()),
            Err(JobDashError::BuiltinView(_))
        ));
        assert!(matches!(
            api.delete_view("nope"),
            Err(JobDashError::ViewNotFound(_))
        ));
        assert_eq!(api.storage().write_count(), 0);
    }

    #[test]
    fn select_unknown_view_errors() {
        let mut api = api();
        assert!(matches!(
            api.select_view("nope"),
            Err(JobDashError::ViewNotFound(_))
        ));
    }

    #[test]
    fn list_jobs_follows_state() {
        let mut api = api();
        let jobs = sample_jobs();
        let active = api.list_jobs(&jobs);
        assert!(active.iter().all(|job| job.status == "Aktivní"));

        api.clear_filters().unwrap();
        assert_eq!(api.list_jobs(&jobs).len(), jobs.len());
    }

    #[test]
    fn prefill_degrades_and_stores_title() {
        let api = api();
        let mut cache = SuggestionCache::new(Offline);
        let prefill = api.prefill_draft(&mut cache, "Skladník").unwrap();
        assert!(prefill.is_degraded());

        let draft = api.draft().unwrap().into_value();
        assert_eq!(draft.position_title(), Some("Skladník"));
        assert!(draft.saved_at.is_some());

        api.clear_draft().unwrap();
        assert_eq!(api.draft().unwrap(), LoadOutcome::Missing);
    }
}
