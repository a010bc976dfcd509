//! Filter catalog.
//!
//! The static registry of attributes the job list can be filtered by. Every
//! [`ActiveFilter`](crate::filters::ActiveFilter) references one of these ids,
//! although ids outside the catalog (e.g. `title` coming from an old saved
//! view) are tolerated and simply carry their id as label.

/// A single filterable attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Stable key used by active filters (e.g. "status", "adStatus")
    pub id: &'static str,

    /// Human readable name shown in the filter dialog
    pub label: &'static str,

    /// Allowed values, in display order. Empty means free text.
    pub options: &'static [&'static str],

    /// Whether adding a value accumulates into a set instead of replacing.
    pub multi: bool,
}

impl FilterOption {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            options: &[],
            multi: false,
        }
    }

    const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    const fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    /// True when the filter takes arbitrary text instead of a fixed option.
    pub fn is_free_text(&self) -> bool {
        self.options.is_empty()
    }

    /// Check whether `value` is acceptable for this filter.
    pub fn accepts(&self, value: &str) -> bool {
        self.is_free_text() || self.options.contains(&value)
    }
}

pub const STATUS_ACTIVE: &str = "Aktivní";
pub const STATUS_DRAFT: &str = "Rozpracovaný";
pub const STATUS_ARCHIVED: &str = "Archivovaný";

pub const AD_PUBLISHED: &str = "Vystavený";
pub const AD_ENDED: &str = "Ukončený";
pub const AD_UNPUBLISHED: &str = "Nevystavený";

/// Registry of all filterable job attributes.
pub const FILTERS: &[FilterOption] = &[
    FilterOption::new("status", "Stav").options(&[STATUS_ACTIVE, STATUS_DRAFT, STATUS_ARCHIVED]),
    FilterOption::new("recruiter", "Náborář"),
    FilterOption::new("location", "Lokalita"),
    FilterOption::new("adStatus", "Stav inzerce")
        .options(&[AD_PUBLISHED, AD_ENDED, AD_UNPUBLISHED])
        .multi(),
    FilterOption::new("portal", "Portál")
        .options(&["Jobs.cz", "Prace.cz", "LinkedIn", "Firemní web"])
        .multi(),
];

/// Look up a catalog entry by id.
pub fn get_option(id: &str) -> Option<&'static FilterOption> {
    FILTERS.iter().find(|option| option.id == id)
}

/// Display label for a filter id, falling back to the id itself.
pub fn label_for(id: &str) -> String {
    get_option(id)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Whether values for this id accumulate into a set.
pub fn is_multi(id: &str) -> bool {
    get_option(id).is_some_and(|option| option.multi)
}
