//! The set of filters currently applied to the job list.

use super::FilterValue;
use crate::catalog;
use serde::{Deserialize, Serialize};

/// One applied filter criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub id: String,
    /// Denormalized copy of the catalog label at creation time.
    pub label: String,
    pub value: FilterValue,
}

impl ActiveFilter {
    /// Create a filter, copying its label from the catalog.
    pub fn new(id: impl Into<String>, value: FilterValue) -> Self {
        let id = id.into();
        Self {
            label: catalog::label_for(&id),
            id,
            value,
        }
    }

    pub fn is_multi(&self) -> bool {
        self.value.is_multi()
    }

    pub fn display_text(&self) -> String {
        self.value.display_text()
    }
}

/// What a mutation did to the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Added,
    Updated,
    Removed,
    Unchanged,
}

impl FilterChange {
    pub fn is_change(self) -> bool {
        self != FilterChange::Unchanged
    }
}

/// Ordered collection of active filters, at most one per id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveFilterSet {
    filters: Vec<ActiveFilter>,
}

impl ActiveFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveFilter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ActiveFilter> {
        self.filters.iter().find(|f| f.id == id)
    }

    pub fn as_slice(&self) -> &[ActiveFilter] {
        &self.filters
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.filters.iter().position(|f| f.id == id)
    }

    /// Add a value for `id`, or update the existing filter.
    ///
    /// - No filter yet: create one, as a set when the catalog marks `id` multi.
    /// - Multi filter: toggle membership of `value`; an emptied set removes the filter.
    /// - Single filter: overwrite.
    ///
    /// Empty values are pending input and leave the set untouched.
    pub fn add_or_update(&mut self, id: &str, value: &str) -> FilterChange {
        if value.is_empty() {
            return FilterChange::Unchanged;
        }

        let Some(pos) = self.position(id) else {
            let value = if catalog::is_multi(id) {
                FilterValue::multi([value])
            } else {
                FilterValue::single(value)
            };
            self.filters.push(ActiveFilter::new(id, value));
            return FilterChange::Added;
        };

        match &mut self.filters[pos].value {
            FilterValue::Multi(values) => {
                if let Some(member) = values.iter().position(|v| v == value) {
                    values.remove(member);
                    if values.is_empty() {
                        self.filters.remove(pos);
                        return FilterChange::Removed;
                    }
                } else {
                    values.push(value.to_string());
                }
                FilterChange::Updated
            }
            FilterValue::Single(current) => {
                if current == value {
                    FilterChange::Unchanged
                } else {
                    *current = value.to_string();
                    FilterChange::Updated
                }
            }
        }
    }

    /// Insert a whole filter, replacing any existing filter with the same id.
    ///
    /// Filters with an empty value are dropped.
    pub fn insert(&mut self, filter: ActiveFilter) -> FilterChange {
        if filter.value.is_empty() {
            return match self.position(&filter.id) {
                Some(pos) => {
                    self.filters.remove(pos);
                    FilterChange::Removed
                }
                None => FilterChange::Unchanged,
            };
        }
        match self.position(&filter.id) {
            Some(pos) if self.filters[pos] == filter => FilterChange::Unchanged,
            Some(pos) => {
                self.filters[pos] = filter;
                FilterChange::Updated
            }
            None => {
                self.filters.push(filter);
                FilterChange::Added
            }
        }
    }

    /// Remove a filter, or one member of it.
    ///
    /// - `value == None`: delete the whole filter.
    /// - Multi filter: remove that member, deleting the filter when emptied.
    /// - Single filter: delete only when the stored value equals `value`.
    pub fn remove(&mut self, id: &str, value: Option<&str>) -> FilterChange {
        let Some(pos) = self.position(id) else {
            return FilterChange::Unchanged;
        };

        let Some(value) = value else {
            self.filters.remove(pos);
            return FilterChange::Removed;
        };

        match &mut self.filters[pos].value {
            FilterValue::Multi(values) => {
                let Some(member) = values.iter().position(|v| v == value) else {
                    return FilterChange::Unchanged;
                };
                values.remove(member);
                if values.is_empty() {
                    self.filters.remove(pos);
                    FilterChange::Removed
                } else {
                    FilterChange::Updated
                }
            }
            FilterValue::Single(current) => {
                if current == value {
                    self.filters.remove(pos);
                    FilterChange::Removed
                } else {
                    FilterChange::Unchanged
                }
            }
        }
    }

    pub fn clear(&mut self) -> FilterChange {
        if self.filters.is_empty() {
            return FilterChange::Unchanged;
        }
        self.filters.clear();
        FilterChange::Removed
    }

    /// Display text for a filter: verbatim, or comma-joined for sets.
    pub fn display_text(filter: &ActiveFilter) -> String {
        filter.display_text()
    }
}

impl FromIterator<ActiveFilter> for ActiveFilterSet {
    fn from_iter<T: IntoIterator<Item = ActiveFilter>>(iter: T) -> Self {
        let mut set = ActiveFilterSet::new();
        for filter in iter {
            set.insert(filter);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ActiveFilterSet {
    type Item = &'a ActiveFilter;
    type IntoIter = std::slice::Iter<'a, ActiveFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_creates_single_filter_with_catalog_label() {
        let mut set = ActiveFilterSet::new();
        assert_eq!(set.add_or_update("status", "Aktivní"), FilterChange::Added);

        let filter = set.get("status").unwrap();
        assert_eq!(filter.label, "Stav");
        assert_eq!(filter.value, FilterValue::single("Aktivní"));
        assert!(!filter.is_multi());
    }

    #[test]
    fn add_wraps_multi_capable_filters_in_a_set() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("adStatus", "Ukončený");
        assert!(set.get("adStatus").unwrap().is_multi());
    }

    #[test]
    fn add_overwrites_single_filter() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("status", "Aktivní");
        assert_eq!(
            set.add_or_update("status", "Archivovaný"),
            FilterChange::Updated
        );
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get("status").unwrap().value,
            FilterValue::single("Archivovaný")
        );
    }

    #[test]
    fn add_toggles_multi_membership() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("portal", "Jobs.cz");
        set.add_or_update("portal", "LinkedIn");
        assert_eq!(
            set.get("portal").unwrap().display_text(),
            "Jobs.cz, LinkedIn"
        );

        set.add_or_update("portal", "Jobs.cz");
        assert_eq!(set.get("portal").unwrap().display_text(), "LinkedIn");

        assert_eq!(set.add_or_update("portal", "LinkedIn"), FilterChange::Removed);
        assert!(set.get("portal").is_none());
    }

    #[test]
    fn add_ignores_empty_value() {
        let mut set = ActiveFilterSet::new();
        assert_eq!(set.add_or_update("location", ""), FilterChange::Unchanged);
        assert!(set.is_empty());
    }

    #[test]
    fn unknown_ids_are_accepted_as_single_values() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("title", "Vývojář");
        let filter = set.get("title").unwrap();
        assert_eq!(filter.label, "title");
        assert_eq!(filter.value, FilterValue::single("Vývojář"));
    }

    #[test]
    fn add_then_remove_on_multi_filter_round_trips() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("status", "Aktivní");
        set.add_or_update("adStatus", "Ukončený");
        let before = set.clone();

        set.add_or_update("adStatus", "Nevystavený");
        set.remove("adStatus", Some("Nevystavený"));
        assert_eq!(set, before);

        let mut empty_before = ActiveFilterSet::new();
        empty_before.add_or_update("status", "Aktivní");
        let snapshot = empty_before.clone();
        empty_before.add_or_update("portal", "Prace.cz");
        empty_before.remove("portal", Some("Prace.cz"));
        assert_eq!(empty_before, snapshot);
    }

    #[test]
    fn remove_without_value_deletes_filter() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("portal", "Jobs.cz");
        set.add_or_update("portal", "LinkedIn");
        assert_eq!(set.remove("portal", None), FilterChange::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn remove_single_requires_matching_value() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("location", "Praha");

        assert_eq!(set.remove("location", Some("Brno")), FilterChange::Unchanged);
        assert!(set.get("location").is_some());

        assert_eq!(set.remove("location", Some("Praha")), FilterChange::Removed);
        assert!(set.get("location").is_none());
    }

    #[test]
    fn remove_missing_member_is_unchanged() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("adStatus", "Vystavený");
        assert_eq!(set.remove("adStatus", Some("Ukončený")), FilterChange::Unchanged);
        assert_eq!(set.remove("nothing", None), FilterChange::Unchanged);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = ActiveFilterSet::new();
        set.add_or_update("status", "Aktivní");
        set.add_or_update("location", "Brno");
        assert_eq!(set.clear(), FilterChange::Removed);
        assert!(set.is_empty());
        assert_eq!(set.clear(), FilterChange::Unchanged);
    }

    #[test]
    fn insert_replaces_and_drops_empty() {
        let mut set = ActiveFilterSet::new();
        set.insert(ActiveFilter::new("location", FilterValue::single("Brno")));
        set.insert(ActiveFilter::new("location", FilterValue::single("Praha")));
        assert_eq!(set.len(), 1);

        assert_eq!(
            set.insert(ActiveFilter::new("location", FilterValue::Multi(vec![]))),
            FilterChange::Removed
        );
        assert!(set.is_empty());
    }

    #[test]
    fn display_text_for_single_and_multi() {
        let single = ActiveFilter::new("location", FilterValue::single("Ostrava"));
        let multi = ActiveFilter::new("adStatus", FilterValue::multi(["Ukončený", "Nevystavený"]));
        assert_eq!(ActiveFilterSet::display_text(&single), "Ostrava");
        assert_eq!(ActiveFilterSet::display_text(&multi), "Ukončený, Nevystavený");
    }
}
