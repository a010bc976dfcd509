//! Filter value representation.

use serde::{Deserialize, Serialize};

/// The value held by an active filter or a saved view entry.
///
/// Serialized untagged so that persisted views stay readable: a single value
/// is a JSON string, a multi value is a JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// One selected value (e.g. `status` = "Aktivní")
    Single(String),

    /// A set of selected values in insertion order, without duplicates.
    Multi(Vec<String>),
}

impl FilterValue {
    pub fn single(value: impl Into<String>) -> Self {
        FilterValue::Single(value.into())
    }

    /// Build a multi value, dropping duplicates while keeping first-seen order.
    pub fn multi<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !set.contains(&value) {
                set.push(value);
            }
        }
        FilterValue::Multi(set)
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, FilterValue::Multi(_))
    }

    /// A filter with nothing selected.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Single(v) => v.is_empty(),
            FilterValue::Multi(values) => values.is_empty(),
        }
    }

    /// Test a job attribute against this value.
    ///
    /// Single values compare for equality, multi values for membership.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            FilterValue::Single(v) => v == candidate,
            FilterValue::Multi(values) => values.iter().any(|v| v == candidate),
        }
    }

    /// Whether `value` is (one of) the selected values.
    pub fn contains(&self, value: &str) -> bool {
        self.matches(value)
    }

    /// Get the string if this is a Single value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            FilterValue::Single(v) => Some(v),
            FilterValue::Multi(_) => None,
        }
    }

    /// Get the members if this is a Multi value.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            FilterValue::Multi(values) => Some(values),
            FilterValue::Single(_) => None,
        }
    }

    /// Display form: verbatim for single values, comma-joined for sets.
    pub fn display_text(&self) -> String {
        match self {
            FilterValue::Single(v) => v.clone(),
            FilterValue::Multi(values) => values.join(", "),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Single(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::multi(values)
    }
}
