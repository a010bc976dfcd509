//! # Jobdash Architecture
//!
//! Jobdash is the **filter and view state** of a recruitment job dashboard,
//! packaged as a UI-agnostic library. It knows which jobs are visible and why;
//! it does not know how they are drawn.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `jobdash` binary, or any other UI)             │
//! │  - Parses input, renders jobs and views, owns exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates input like the filter/view dialogs             │
//! │  - Dispatches actions, persists immediately                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State (state.rs, filters/, views/, pipeline.rs)            │
//! │  - Reducer over filters, view tabs, search and sort         │
//! │  - Pure filter/sort pipeline over jobs                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Key/value Storage trait, like browser localStorage       │
//! │  - FsStorage (production), MemStorage (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the client decides whether
//! and where they are shown.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`state`]: Dashboard reducer (actions and effects)
//! - [`catalog`]: The static filter catalog
//! - [`filters`]: Active filters and filter values
//! - [`views`]: Built-in and custom views
//! - [`pipeline`]: Filtering and sorting of jobs
//! - [`store`]: Storage abstraction, implementations and document stores
//! - [`draft`]: Debounced autosave of the job-posting draft
//! - [`debounce`]: Debounce/coalesce utility
//! - [`suggest`]: Field suggestions for the posting wizard
//! - [`model`]: Jobs and the posting draft
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod draft;
pub mod error;
pub mod filters;
pub mod model;
pub mod pipeline;
pub mod state;
pub mod store;
pub mod suggest;
pub mod views;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
