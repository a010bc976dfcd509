use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobDashError {
    #[error("View not found: {0}")]
    ViewNotFound(String),

    #[error("A view with id '{0}' already exists")]
    ViewExists(String),

    #[error("Built-in view '{0}' cannot be changed")]
    BuiltinView(String),

    #[error("Invalid view name: {0}")]
    InvalidName(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Suggestion error: {0}")]
    Suggest(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, JobDashError>;
