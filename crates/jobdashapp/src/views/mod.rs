//! # Views
//!
//! A view is a named bundle of filters shown as a tab above the job list.
//!
//! - **Built-in views** are defined in code, immutable and never persisted.
//! - **Custom views** are created from the current filters, can be edited and
//!   deleted, and are persisted as one JSON array (see [`crate::store::views`]).
//!
//! View filters are stored under *persisted keys*, which equal the filter ids
//! except `adStatus`, stored as `advertisement.status`.

mod config;
mod registry;

pub use config::{
    builtin_views, filter_id, persisted_key, slugify, JobViewConfig, ViewFilters, AD_STATUS_KEY,
    DEFAULT_VIEW,
};
pub use registry::ViewRegistry;
