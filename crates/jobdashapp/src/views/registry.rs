use super::config::{builtin_views, slugify, JobViewConfig, ViewFilters};
use crate::error::{JobDashError, Result};
use crate::filters::ActiveFilterSet;

/// Built-in views followed by user-created custom views.
///
/// The registry only manages the view list. Selecting a view and keeping the
/// active filters in sync is the dashboard reducer's job, and persisting the
/// custom sequence is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRegistry {
    builtins: Vec<JobViewConfig>,
    custom: Vec<JobViewConfig>,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ViewRegistry {
    pub fn new(custom: Vec<JobViewConfig>) -> Self {
        Self {
            builtins: builtin_views(),
            custom,
        }
    }

    /// All views in tab order: built-ins first.
    pub fn all(&self) -> impl Iterator<Item = &JobViewConfig> {
        self.builtins.iter().chain(self.custom.iter())
    }

    pub fn custom(&self) -> &[JobViewConfig] {
        &self.custom
    }

    pub fn get(&self, id: &str) -> Option<&JobViewConfig> {
        self.all().find(|view| view.value == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn is_builtin(&self, id: &str) -> bool {
        self.builtins.iter().any(|view| view.value == id)
    }

    /// Create a custom view capturing `filters`. Returns the new view's id.
    pub fn save_view(&mut self, name: &str, filters: &ActiveFilterSet) -> Result<String> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(JobDashError::InvalidName(
                "view name cannot be empty".to_string(),
            ));
        }
        if self.contains(&slug) {
            return Err(JobDashError::ViewExists(slug));
        }

        self.custom.push(JobViewConfig::custom(
            slug.clone(),
            name.trim(),
            ViewFilters::from_active(filters),
        ));
        Ok(slug)
    }

    /// Replace a custom view's label and filters.
    ///
    /// Returns `Ok(false)` when `id` is unknown or names a built-in view.
    pub fn update_view(&mut self, id: &str, name: &str, filters: &ActiveFilterSet) -> Result<bool> {
        let Some(view) = self.custom.iter_mut().find(|view| view.value == id) else {
            return Ok(false);
        };
        if name.trim().is_empty() {
            return Err(JobDashError::InvalidName(
                "view name cannot be empty".to_string(),
            ));
        }
        view.label = name.trim().to_string();
        view.filters = Some(ViewFilters::from_active(filters));
        Ok(true)
    }

    /// Remove a custom view. Returns `false` when nothing was removed.
    pub fn delete_view(&mut self, id: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|view| view.value != id);
        self.custom.len() != before
    }
}
