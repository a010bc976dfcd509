//! # Dashboard State
//!
//! All interaction with the job dashboard goes through one reducer:
//! [`DashboardState::apply`] takes an [`Action`], mutates the state and returns
//! the [`Effect`]s the caller must carry out. The reducer itself never touches
//! storage, which keeps every transition testable in isolation.
//!
//! ## View Tabs and Filters
//!
//! - Selecting a view replaces the active filters with the view's filters. An
//!   existing `recruiter` filter is carried over unless the view sets its own.
//! - Editing the `status` filter by hand activates the view named after the
//!   new status, if one exists, so the tabs follow manual edits.
//! - Clearing all filters returns the tabs to the default view.
//! - Deleting the active custom view falls back to the default view.
//!
//! When a manual status edit and a custom view disagree, the last mutation
//! wins: the tab follows the status edit.

use crate::error::Result;
use crate::filters::{ActiveFilterSet, FilterChange};
use crate::model::Job;
use crate::pipeline::{filter_and_sort, SortOption};
use crate::views::{JobViewConfig, ViewRegistry, DEFAULT_VIEW};
use tracing::debug;

const RECRUITER: &str = "recruiter";
const STATUS: &str = "status";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddFilter { id: String, value: String },
    RemoveFilter { id: String, value: Option<String> },
    ClearFilters,
    SelectView(String),
    SaveView { name: String },
    UpdateView {
        id: String,
        name: String,
        filters: ActiveFilterSet,
    },
    DeleteView(String),
    SetSearch(String),
    SetSort(SortOption),
}

/// Follow-up work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The custom view sequence changed and must be written out.
    PersistViews,
    /// The visible job list must be re-derived.
    Refilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub filters: ActiveFilterSet,
    pub active_view: String,
    pub views: ViewRegistry,
    pub search: String,
    pub sort: SortOption,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ViewRegistry::default())
    }
}

impl DashboardState {
    /// Fresh dashboard with the default view applied.
    pub fn new(views: ViewRegistry) -> Self {
        let mut state = Self {
            filters: ActiveFilterSet::new(),
            active_view: DEFAULT_VIEW.to_string(),
            views,
            search: String::new(),
            sort: SortOption::default(),
        };
        state.apply_view(DEFAULT_VIEW);
        state
    }

    pub fn active_view(&self) -> Option<&JobViewConfig> {
        self.views.get(&self.active_view)
    }

    /// The jobs the dashboard currently shows.
    pub fn visible_jobs(&self, jobs: &[Job]) -> Vec<Job> {
        filter_and_sort(jobs, &self.filters, &self.search, self.sort)
    }

    /// Apply one action.
    ///
    /// Errors leave the state untouched.
    pub fn apply(&mut self, action: Action) -> Result<Vec<Effect>> {
        debug!(?action, "applying dashboard action");
        let effects = match action {
            Action::AddFilter { id, value } => {
                let change = self.filters.add_or_update(&id, &value);
                self.after_filter_edit(&id, change)
            }
            Action::RemoveFilter { id, value } => {
                let change = self.filters.remove(&id, value.as_deref());
                self.after_filter_edit(&id, change)
            }
            Action::ClearFilters => {
                self.filters.clear();
                self.active_view = DEFAULT_VIEW.to_string();
                vec![Effect::Refilter]
            }
            Action::SelectView(id) => {
                if self.apply_view(&id) {
                    vec![Effect::Refilter]
                } else {
                    Vec::new()
                }
            }
            Action::SaveView { name } => {
                let id = self.views.save_view(&name, &self.filters)?;
                self.active_view = id;
                vec![Effect::PersistViews, Effect::Refilter]
            }
            Action::UpdateView { id, name, filters } => {
                if !self.views.update_view(&id, &name, &filters)? {
                    return Ok(Vec::new());
                }
                let mut effects = vec![Effect::PersistViews];
                if self.active_view == id {
                    self.apply_view(&id);
                    effects.push(Effect::Refilter);
                }
                effects
            }
            Action::DeleteView(id) => {
                if !self.views.delete_view(&id) {
                    return Ok(Vec::new());
                }
                let mut effects = vec![Effect::PersistViews];
                if self.active_view == id {
                    self.apply_view(DEFAULT_VIEW);
                    effects.push(Effect::Refilter);
                }
                effects
            }
            Action::SetSearch(search) => {
                self.search = search;
                vec![Effect::Refilter]
            }
            Action::SetSort(sort) => {
                self.sort = sort;
                vec![Effect::Refilter]
            }
        };
        Ok(effects)
    }

    /// Replace the active filters with the view's filters.
    ///
    /// Returns `false` for unknown view ids, leaving the state untouched.
    pub fn apply_view(&mut self, id: &str) -> bool {
        let Some(view) = self.views.get(id) else {
            return false;
        };
        let mut next = view.active_filters();
        if next.get(RECRUITER).is_none() {
            if let Some(recruiter) = self.filters.get(RECRUITER) {
                next.insert(recruiter.clone());
            }
        }
        self.filters = next;
        self.active_view = id.to_string();
        true
    }

    fn after_filter_edit(&mut self, id: &str, change: FilterChange) -> Vec<Effect> {
        if !change.is_change() {
            return Vec::new();
        }
        if id == STATUS {
            self.sync_view_with_status();
        }
        vec![Effect::Refilter]
    }

    fn sync_view_with_status(&mut self) {
        let Some(status) = self
            .filters
            .get(STATUS)
            .and_then(|filter| filter.value.as_single())
        else {
            return;
        };
        if self.views.contains(status) {
            self.active_view = status.to_string();
        }
    }
}

/// By-value form of [`DashboardState::apply`].
pub fn apply_action(
    mut state: DashboardState,
    action: Action,
) -> Result<(DashboardState, Vec<Effect>)> {
    let effects = state.apply(action)?;
    Ok((state, effects))
}
