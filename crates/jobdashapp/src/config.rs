//! # Configuration
//!
//! Jobdash configuration is managed by [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `JOBDASH_DATA_DIR`, `JOBDASH_DEBOUNCE_MS`, etc.
//! 2. **Config file**: `jobdash.toml` in the OS config directory (via `directories`),
//!    or the file passed explicitly.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where `customJobViews.json` and `jobPostingDraft.json` live |
//! | `jobs_file` | none | Default jobs JSON for `jobdash list` |
//! | `debounce_ms` | `500` | Draft autosave window |
//! | `suggest_endpoint` | `http://localhost:3000/api/suggest-fields` | Field suggestion service |
//! | `suggest_timeout_ms` | `10000` | Suggestion request timeout |
//! | `default_sort` | `title-asc` | Sort used when none is given |

use crate::error::{JobDashError, Result};
use crate::pipeline::SortOption;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "jobdash.toml";

const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/suggest-fields";

/// Configuration for jobdash, stored in `jobdash.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobDashConfig {
    /// Directory holding the persisted documents.
    #[config(env = "JOBDASH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Jobs JSON file used when `--jobs` is not given.
    #[config(env = "JOBDASH_JOBS_FILE")]
    pub jobs_file: Option<PathBuf>,

    #[config(default = 500, env = "JOBDASH_DEBOUNCE_MS")]
    pub debounce_ms: u64,

    #[config(
        default = "http://localhost:3000/api/suggest-fields",
        env = "JOBDASH_SUGGEST_ENDPOINT"
    )]
    pub suggest_endpoint: String,

    #[config(default = 10000, env = "JOBDASH_SUGGEST_TIMEOUT_MS")]
    pub suggest_timeout_ms: u64,

    /// One of `title-asc`, `title-desc`, `published-asc`, `published-desc`,
    /// `expires-asc`, `expires-desc`.
    #[config(default = "title-asc", env = "JOBDASH_DEFAULT_SORT")]
    pub default_sort: String,
}

impl Default for JobDashConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            jobs_file: None,
            debounce_ms: 500,
            suggest_endpoint: DEFAULT_ENDPOINT.to_string(),
            suggest_timeout_ms: 10_000,
            default_sort: SortOption::default().as_str().to_string(),
        }
    }
}

impl JobDashConfig {
    /// Load from the environment and `file`, falling back to the user config file.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file = file.map(Path::to_path_buf).or_else(default_config_file);
        let mut builder = JobDashConfig::builder().env();
        if let Some(path) = &file {
            debug!(path = %path.display(), "loading config file");
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| JobDashError::Config(e.to_string()))
    }

    /// The configured data directory, or the OS default.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| JobDashError::Config("could not determine data directory".to_string()))
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn suggest_timeout(&self) -> Duration {
        Duration::from_millis(self.suggest_timeout_ms)
    }

    pub fn default_sort(&self) -> Result<SortOption> {
        self.default_sort.parse()
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "jobdash", "jobdash")
}

fn default_config_file() -> Option<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
