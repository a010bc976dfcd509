//! # Data Model
//!
//! Jobs are read-only input to the dashboard: they are loaded from a JSON
//! document and never mutated by filtering. Field names follow the camelCase
//! shape the job list has always used.
//!
//! ## Advertisement Status
//!
//! A job's advertisement status is derived, not stored:
//!
//! | Condition | Status |
//! |-----------|--------|
//! | `advertisement.active` | Vystavený |
//! | inactive, at least one portal | Ukončený |
//! | inactive, no portals (or no advertisement) | Nevystavený |

use crate::catalog::{AD_ENDED, AD_PUBLISHED, AD_UNPUBLISHED};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub name: String,
}

/// A job board the advertisement is (or was) published on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portal {
    pub name: String,
    /// Publish timestamp as stored by the portal integration (ISO-8601 string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub portals: Vec<Portal>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidates {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub new: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub recruiter: Recruiter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertisement: Option<Advertisement>,
    #[serde(default)]
    pub candidates: Candidates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Job {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn portals(&self) -> &[Portal] {
        self.advertisement
            .as_ref()
            .map(|ad| ad.portals.as_slice())
            .unwrap_or_default()
    }

    pub fn first_portal(&self) -> Option<&Portal> {
        self.portals().first()
    }

    pub fn ad_status(&self) -> AdStatus {
        match &self.advertisement {
            Some(ad) if ad.active => AdStatus::Published,
            Some(ad) if !ad.portals.is_empty() => AdStatus::Ended,
            _ => AdStatus::Unpublished,
        }
    }
}

/// Derived status of a job's advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdStatus {
    Published,
    Ended,
    Unpublished,
}

impl AdStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AdStatus::Published => AD_PUBLISHED,
            AdStatus::Ended => AD_ENDED,
            AdStatus::Unpublished => AD_UNPUBLISHED,
        }
    }
}

impl fmt::Display for AdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job-posting wizard draft.
///
/// Each wizard step owns a free-form section; the dashboard only stores and
/// restores them, it never interprets their content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingDraft {
    #[serde(default)]
    pub position: Map<String, Value>,
    #[serde(default)]
    pub questionnaire: Map<String, Value>,
    #[serde(default)]
    pub collaboration: Map<String, Value>,
    #[serde(default)]
    pub advertising: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl JobPostingDraft {
    /// Position title entered in the first wizard step, if any.
    pub fn position_title(&self) -> Option<&str> {
        self.position
            .get("title")
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
    }

    /// Same content, ignoring when it was saved.
    pub fn same_content(&self, other: &JobPostingDraft) -> bool {
        self.position == other.position
            && self.questionnaire == other.questionnaire
            && self.collaboration == other.collaboration
            && self.advertising == other.advertising
    }
}
