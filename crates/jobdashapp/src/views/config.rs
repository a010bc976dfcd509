//! View configuration types and their persisted shape.

use crate::filters::{ActiveFilter, ActiveFilterSet, FilterValue};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Persisted key for the `adStatus` filter id.
pub const AD_STATUS_KEY: &str = "advertisement.status";

/// Translate an active filter id into the key stored in a view.
pub fn persisted_key(filter_id: &str) -> &str {
    match filter_id {
        "adStatus" => AD_STATUS_KEY,
        other => other,
    }
}

/// Translate a stored view key back into an active filter id.
pub fn filter_id(persisted_key: &str) -> &str {
    match persisted_key {
        AD_STATUS_KEY => "adStatus",
        other => other,
    }
}

/// Ordered `key -> value` mapping of a view's filters.
///
/// Serialized as a JSON object. Entry order is preserved both ways so that
/// applying a saved view rebuilds the filters in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilters {
    entries: Vec<(String, FilterValue)>,
}

impl ViewFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: FilterValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capture active filters, translating ids to persisted keys.
    pub fn from_active(filters: &ActiveFilterSet) -> Self {
        let mut out = ViewFilters::new();
        for filter in filters {
            out.insert(persisted_key(&filter.id), filter.value.clone());
        }
        out
    }

    /// Rebuild active filters, translating persisted keys back to ids.
    pub fn to_active(&self) -> ActiveFilterSet {
        self.iter()
            .map(|(key, value)| ActiveFilter::new(filter_id(key), value.clone()))
            .collect()
    }
}

impl Serialize for ViewFilters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ViewFilters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FiltersVisitor;

        impl<'de> Visitor<'de> for FiltersVisitor {
            type Value = ViewFilters;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of filter keys to a string or list of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ViewFilters, A::Error> {
                let mut filters = ViewFilters::new();
                while let Some((key, value)) = access.next_entry::<String, FilterValue>()? {
                    filters.insert(key, value);
                }
                Ok(filters)
            }
        }

        deserializer.deserialize_map(FiltersVisitor)
    }
}

/// A named, reusable bundle of filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobViewConfig {
    /// Unique slug across built-in and custom views.
    pub value: String,
    pub label: String,
    /// `None` means the view shows every job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<ViewFilters>,
    #[serde(default)]
    pub is_custom: bool,
}

impl JobViewConfig {
    pub fn custom(value: impl Into<String>, label: impl Into<String>, filters: ViewFilters) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            filters: Some(filters),
            is_custom: true,
        }
    }

    fn builtin(value: &str, label: &str, filters: ViewFilters) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            filters: Some(filters),
            is_custom: false,
        }
    }

    /// Filters this view applies, rebuilt as an active set.
    pub fn active_filters(&self) -> ActiveFilterSet {
        self.filters
            .as_ref()
            .map(ViewFilters::to_active)
            .unwrap_or_default()
    }
}

/// Slug for a view name: lowercase, whitespace runs collapsed to `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The fixed views every dashboard has.
pub fn builtin_views() -> Vec<JobViewConfig> {
    use crate::catalog::{
        AD_ENDED, AD_PUBLISHED, AD_UNPUBLISHED, STATUS_ACTIVE, STATUS_ARCHIVED, STATUS_DRAFT,
    };

    vec![
        JobViewConfig::builtin(
            STATUS_ACTIVE,
            "Aktivní",
            ViewFilters::new().with("status", FilterValue::single(STATUS_ACTIVE)),
        ),
        JobViewConfig::builtin(
            "Vystavené",
            "Vystavené",
            ViewFilters::new().with(AD_STATUS_KEY, FilterValue::single(AD_PUBLISHED)),
        ),
        JobViewConfig::builtin(
            "Nevystavené",
            "Nevystavené",
            ViewFilters::new().with(AD_STATUS_KEY, FilterValue::multi([AD_ENDED, AD_UNPUBLISHED])),
        ),
        JobViewConfig::builtin(
            STATUS_DRAFT,
            "Rozpracované",
            ViewFilters::new().with("status", FilterValue::single(STATUS_DRAFT)),
        ),
        JobViewConfig::builtin(
            STATUS_ARCHIVED,
            "Archivované",
            ViewFilters::new().with("status", FilterValue::single(STATUS_ARCHIVED)),
        ),
    ]
}

/// The view selected on startup and after deleting the active custom view.
pub const DEFAULT_VIEW: &str = crate::catalog::STATUS_ACTIVE;
