//! # Jobdash CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/jobdashapp/`: the core library (filters, views, pipeline, storage)
//! - `crates/jobdash/`: this CLI tool, depends on the `jobdashapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/jobdash/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, config and context wiring (commands.rs)         │
//! │  - Terminal tables and JSON output (print.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/jobdashapp/src/api.rs)                   │
//! │  - Validates filters and view ids                           │
//! │  - Dispatches reducer actions, persists views               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI holds no session: every invocation starts from the default view,
//! applies `--view` and `--filter` flags in order, and prints the result.
//! Only custom views and the posting draft are persisted.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
