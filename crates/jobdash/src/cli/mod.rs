//! # CLI Behavior
//!
//! One possible client for jobdash. The CLI is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ## Filters on the Command Line
//!
//! `--filter id=value` is repeatable and goes through the same path as the
//! filter dialog: values for multi filters (`adStatus`, `portal`) accumulate,
//! single filters are overwritten. `--view` is applied first, so
//! `jobdash list --view Vystavené --filter portal=Jobs.cz` narrows a view.
//!
//! ## Output
//!
//! `--output json` prints the visible jobs as a JSON array, unchanged from the
//! input shape, for piping into other tools.
//!
//! ## Module Structure
//!
//! - `commands`: Logging/config setup and per-command handlers
//! - `print`: Tables, colors and messages
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
