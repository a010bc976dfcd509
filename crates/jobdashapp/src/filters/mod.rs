//! # Active Filters
//!
//! The in-memory filters driving the visible job list.
//!
//! | Kind | Examples | Behavior on add |
//! |------|----------|-----------------|
//! | Single | `status`, `recruiter`, `location` | overwrite |
//! | Multi | `adStatus`, `portal` | toggle membership |
//!
//! Whether a filter is multi is decided by the [catalog](crate::catalog) when it
//! is first created; after that the [`FilterValue`] variant is authoritative.

mod set;
mod value;

pub use set::{ActiveFilter, ActiveFilterSet, FilterChange};
pub use value::FilterValue;
