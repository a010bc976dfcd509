//! # Job List Pipeline
//!
//! [`filter_and_sort`] turns the loaded job collection into the list the
//! dashboard shows. It is pure: same inputs, same output, nothing mutated.
//!
//! A job is kept when **all** of these hold:
//!
//! 1. the search text is empty, or the title contains it (case-insensitive);
//! 2. every active filter's predicate holds.
//!
//! | Filter id | Job attribute |
//! |-----------|---------------|
//! | `status` | `status` |
//! | `recruiter` | `recruiter.name` |
//! | `location` | `location` |
//! | `adStatus` | derived [`AdStatus`](crate::model::AdStatus) |
//! | `portal` | any `advertisement.portals[].name` |
//!
//! Single filter values compare for equality, multi values for membership.
//! Unknown filter ids match every job.
//!
//! Survivors are then stably sorted by the selected [`SortOption`].

use crate::error::JobDashError;
use crate::filters::{ActiveFilter, ActiveFilterSet};
use crate::model::{Job, Portal};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    TitleAsc,
    TitleDesc,
    PublishedAsc,
    PublishedDesc,
    ExpiresAsc,
    ExpiresDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::TitleAsc,
        SortOption::TitleDesc,
        SortOption::PublishedAsc,
        SortOption::PublishedDesc,
        SortOption::ExpiresAsc,
        SortOption::ExpiresDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::TitleAsc => "title-asc",
            SortOption::TitleDesc => "title-desc",
            SortOption::PublishedAsc => "published-asc",
            SortOption::PublishedDesc => "published-desc",
            SortOption::ExpiresAsc => "expires-asc",
            SortOption::ExpiresDesc => "expires-desc",
        }
    }

    fn compare(self, a: &Job, b: &Job) -> Ordering {
        match self {
            SortOption::TitleAsc => collate(&a.title, &b.title),
            SortOption::TitleDesc => collate(&b.title, &a.title),
            SortOption::PublishedAsc => published(a).cmp(published(b)),
            SortOption::PublishedDesc => published(b).cmp(published(a)),
            SortOption::ExpiresAsc => expires(a).cmp(expires(b)),
            SortOption::ExpiresDesc => expires(b).cmp(expires(a)),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = JobDashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = SortOption::ALL.iter().map(|o| o.as_str()).collect();
                JobDashError::Config(format!(
                    "unknown sort option '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

// Missing timestamps collate as "", i.e. first when ascending.
fn published(job: &Job) -> &str {
    job.first_portal()
        .and_then(|p: &Portal| p.published_at.as_deref())
        .unwrap_or("")
}

fn expires(job: &Job) -> &str {
    job.first_portal()
        .and_then(|p: &Portal| p.expires_at.as_deref())
        .unwrap_or("")
}

/// Whether a single active filter accepts `job`.
pub fn matches_filter(job: &Job, filter: &ActiveFilter) -> bool {
    let value = &filter.value;
    match filter.id.as_str() {
        "status" => value.matches(&job.status),
        "recruiter" => value.matches(&job.recruiter.name),
        "location" => value.matches(&job.location),
        "adStatus" => value.matches(job.ad_status().as_str()),
        "portal" => job.portals().iter().any(|p| value.matches(&p.name)),
        _ => true,
    }
}

/// Whether `job` passes the search text and every filter.
pub fn matches_job(job: &Job, filters: &ActiveFilterSet, search: &str) -> bool {
    if !search.trim().is_empty() && !job.title.to_lowercase().contains(&search.to_lowercase()) {
        return false;
    }
    filters.iter().all(|filter| matches_filter(job, filter))
}

/// Filter `jobs` and sort the survivors. Ties keep their input order.
pub fn filter_and_sort(
    jobs: &[Job],
    filters: &ActiveFilterSet,
    search: &str,
    sort: SortOption,
) -> Vec<Job> {
    let mut visible: Vec<Job> = jobs
        .iter()
        .filter(|job| matches_job(job, filters, search))
        .cloned()
        .collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

/// Locale-style string comparison.
///
/// Primary key folds case and diacritics, so "Účetní" sorts next to "Ucetni";
/// ties fall back to case-folded, then exact comparison.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(fold_char)
        .cmp(b.chars().map(fold_char));
    primary
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn fold_char(c: char) -> char {
    let base = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ą' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' | 'Ą' => 'a',
        'č' | 'ć' | 'ç' | 'Č' | 'Ć' | 'Ç' => 'c',
        'ď' | 'Ď' => 'd',
        'é' | 'è' | 'ê' | 'ë' | 'ě' | 'ę' | 'É' | 'È' | 'Ê' | 'Ë' | 'Ě' | 'Ę' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ľ' | 'ĺ' | 'ł' | 'Ľ' | 'Ĺ' | 'Ł' => 'l',
        'ň' | 'ń' | 'ñ' | 'Ň' | 'Ń' | 'Ñ' => 'n',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'o',
        'ř' | 'ŕ' | 'Ř' | 'Ŕ' => 'r',
        'š' | 'ś' | 'Š' | 'Ś' => 's',
        'ť' | 'Ť' => 't',
        'ú' | 'ù' | 'û' | 'ü' | 'ů' | 'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ů' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        'ž' | 'ź' | 'ż' | 'Ž' | 'Ź' | 'Ż' => 'z',
        other => other,
    };
    base.to_lowercase().next().unwrap_or(base)
}
