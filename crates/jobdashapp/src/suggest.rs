//! # Field Suggestions
//!
//! When the position title is entered in the wizard, the remaining position
//! fields can be prefilled from a suggestion service:
//!
//! ```text
//! POST {endpoint}
//! {"position": "Skladník"}
//! → {"field", "professions", "description", "salary": {"from", "to"}, "education", "benefits"}
//! ```
//!
//! The service is optional. Any failure (network, timeout, non-2xx, bad body)
//! degrades to [`Prefill::TitleOnly`]: the wizard continues with just the title
//! and the caller shows a non-blocking notice.

use crate::error::{JobDashError, Result};
use crate::model::JobPostingDraft;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub to: Option<u32>,
}

/// Suggested values for the position step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSuggestion {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub professions: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub salary: SalaryRange,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// Anything that can suggest position fields for a title.
pub trait FieldSuggester {
    fn suggest(&self, position: &str) -> Result<FieldSuggestion>;
}

/// Suggestion service over HTTP.
pub struct HttpSuggester {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSuggester {
    /// Create a client that aborts requests after `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| JobDashError::Suggest(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FieldSuggester for HttpSuggester {
    fn suggest(&self, position: &str) -> Result<FieldSuggestion> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "position": position }))
            .send()
            .map_err(|e| JobDashError::Suggest(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobDashError::Suggest(format!(
                "service responded with status {}",
                status
            )));
        }

        response
            .json::<FieldSuggestion>()
            .map_err(|e| JobDashError::Suggest(format!("invalid response body: {}", e)))
    }
}

/// What the wizard prefills with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefill {
    Suggested {
        position: String,
        suggestion: FieldSuggestion,
    },
    /// The service failed; only the title is known.
    TitleOnly { position: String, reason: String },
}

impl Prefill {
    pub fn position(&self) -> &str {
        match self {
            Prefill::Suggested { position, .. } | Prefill::TitleOnly { position, .. } => position,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Prefill::TitleOnly { .. })
    }

    /// Write the prefilled values into the draft's position section.
    pub fn apply_to(&self, draft: &mut JobPostingDraft) {
        let position = &mut draft.position;
        position.insert("title".into(), Value::String(self.position().to_string()));

        let Prefill::Suggested { suggestion, .. } = self else {
            return;
        };
        position.insert("field".into(), json!(suggestion.field));
        position.insert("professions".into(), json!(suggestion.professions));
        position.insert("description".into(), json!(suggestion.description));
        position.insert(
            "salary".into(),
            json!({ "from": suggestion.salary.from, "to": suggestion.salary.to }),
        );
        position.insert("education".into(), json!(suggestion.education));
        position.insert("benefits".into(), json!(suggestion.benefits));
    }
}

/// Wraps a suggester with a per-title "already fetched" guard.
///
/// Successful suggestions are memoized by trimmed title; failures are not, so
/// a later attempt for the same title reaches the service again.
pub struct SuggestionCache<T: FieldSuggester> {
    suggester: T,
    fetched: HashMap<String, FieldSuggestion>,
}

impl<T: FieldSuggester> SuggestionCache<T> {
    pub fn new(suggester: T) -> Self {
        Self {
            suggester,
            fetched: HashMap::new(),
        }
    }

    pub fn already_fetched(&self, position: &str) -> bool {
        self.fetched.contains_key(position.trim())
    }

    /// Prefill for `position`, never failing.
    pub fn prefill(&mut self, position: &str) -> Prefill {
        let position = position.trim().to_string();
        if position.is_empty() {
            return Prefill::TitleOnly {
                position,
                reason: "position title is empty".to_string(),
            };
        }

        if let Some(suggestion) = self.fetched.get(&position) {
            debug!(%position, "using memoized suggestion");
            return Prefill::Suggested {
                position,
                suggestion: suggestion.clone(),
            };
        }

        match self.suggester.suggest(&position) {
            Ok(suggestion) => {
                self.fetched.insert(position.clone(), suggestion.clone());
                Prefill::Suggested {
                    position,
                    suggestion,
                }
            }
            Err(e) => {
                warn!(%position, error = %e, "field suggestion failed, prefilling title only");
                Prefill::TitleOnly {
                    position,
                    reason: e.to_string(),
                }
            }
        }
    }
}
