use anyhow::Result;
use colored::Colorize;
use jobdashapp::api::{CmdMessage, MessageLevel};
use jobdashapp::catalog::FilterOption;
use jobdashapp::filters::ActiveFilterSet;
use jobdashapp::model::{AdStatus, Job, JobPostingDraft};
use jobdashapp::state::DashboardState;
use jobdashapp::store::LoadOutcome;
use jobdashapp::suggest::Prefill;
use jobdashapp::views::JobViewConfig;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 30;
const STATUS_WIDTH: usize = 14;
const AD_WIDTH: usize = 13;
const RECRUITER_WIDTH: usize = 18;
const LOCATION_WIDTH: usize = 12;
const DATE_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Warnings that must not end up in piped stdout.
pub(super) fn print_notices(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", message.content.yellow());
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line naming the active view and filters, above the job table.
pub(super) fn print_state_summary(state: &DashboardState) {
    let view = state
        .active_view()
        .map(|v| v.label.as_str())
        .unwrap_or(state.active_view.as_str());
    let mut line = format!("View: {}", view);
    if !state.filters.is_empty() {
        line.push_str(&format!("  Filters: {}", filters_text(&state.filters)));
    }
    if !state.search.is_empty() {
        line.push_str(&format!("  Search: \"{}\"", state.search));
    }
    line.push_str(&format!("  Sort: {}", state.sort));
    println!("{}", line.dimmed());
}

pub(super) fn print_jobs(jobs: &[Job]) {
    if jobs.is_empty() {
        println!("No jobs found.");
        return;
    }

    println!(
        "{}",
        format!(
            "{}  {}  {}  {}  {}  {}",
            pad("Title", TITLE_WIDTH),
            pad("Status", STATUS_WIDTH),
            pad("Advert", AD_WIDTH),
            pad("Recruiter", RECRUITER_WIDTH),
            pad("Location", LOCATION_WIDTH),
            "Published"
        )
        .bold()
    );

    for job in jobs {
        let published = job
            .first_portal()
            .and_then(|p| p.published_at.as_deref())
            .map(|ts| truncate_to_width(ts, DATE_WIDTH + 1))
            .unwrap_or_default();

        let ad_status = job.ad_status();
        let ad = pad(ad_status.as_str(), AD_WIDTH);
        let ad_colored = match ad_status {
            AdStatus::Published => ad.green(),
            AdStatus::Ended => ad.yellow(),
            AdStatus::Unpublished => ad.dimmed(),
        };

        println!(
            "{}  {}  {}  {}  {}  {}",
            pad(&job.title, TITLE_WIDTH),
            pad(&job.status, STATUS_WIDTH),
            ad_colored,
            pad(&job.recruiter.name, RECRUITER_WIDTH),
            pad(&job.location, LOCATION_WIDTH),
            published.dimmed()
        );
    }

    println!("{}", format!("{} job(s)", jobs.len()).dimmed());
}

pub(super) fn print_catalog(options: &[FilterOption]) {
    for option in options {
        let values = if option.is_free_text() {
            "(free text)".italic().to_string()
        } else {
            option.options.join(", ")
        };
        let multi = if option.multi { " multi" } else { "" };
        println!(
            "{}  {}{}  {}",
            pad(option.id, 10).yellow(),
            pad(option.label, 14),
            multi.cyan(),
            values
        );
    }
}

pub(super) fn print_views(views: &[&JobViewConfig], active: &str) {
    for view in views {
        let marker = if view.value == active { "*" } else { " " };
        let kind = if view.is_custom { "custom" } else { "built-in" };
        println!(
            "{} {}  {}  {}  {}",
            marker.green(),
            pad(&view.value, 16).yellow(),
            pad(&view.label, 16),
            pad(kind, 8).dimmed(),
            filters_text(&view.active_filters())
        );
    }
}

pub(super) fn print_view(view: &JobViewConfig) {
    println!("{} {}", view.value.yellow(), view.label.bold());
    let filters = view.active_filters();
    if filters.is_empty() {
        println!("  {}", "(shows every job)".dimmed());
    }
    for filter in &filters {
        println!("  {}: {}", filter.label, filter.display_text());
    }
}

pub(super) fn print_draft(outcome: &LoadOutcome<JobPostingDraft>) -> Result<()> {
    match outcome {
        LoadOutcome::Loaded(draft) => {
            if let Some(saved_at) = draft.saved_at {
                println!("{}", format!("Saved {}", saved_at.to_rfc3339()).dimmed());
            }
            if let Some(title) = draft.position_title() {
                println!("Position: {}", title.bold());
            }
            println!("{}", serde_json::to_string_pretty(draft)?);
        }
        LoadOutcome::Missing => println!("No draft saved."),
        LoadOutcome::Corrupt { .. } => {
            println!("{}", "The saved draft was unreadable and has been discarded.".yellow())
        }
    }
    Ok(())
}

pub(super) fn print_prefill(prefill: &Prefill) {
    match prefill {
        Prefill::Suggested { position, suggestion } => {
            println!("{} {}", "Prefilled".green(), position.bold());
            println!("  Field:       {}", suggestion.field);
            println!("  Professions: {}", suggestion.professions.join(", "));
            if let (Some(from), Some(to)) = (suggestion.salary.from, suggestion.salary.to) {
                println!("  Salary:      {} - {}", from, to);
            }
            println!("  Education:   {}", suggestion.education);
            if !suggestion.benefits.is_empty() {
                println!("  Benefits:    {}", suggestion.benefits.join(", "));
            }
        }
        Prefill::TitleOnly { position, reason } => {
            println!("{} {}", "Saved title".green(), position.bold());
            eprintln!(
                "{}",
                format!("Suggestions unavailable ({}); fill in the rest by hand.", reason)
                    .yellow()
            );
        }
    }
}

fn filters_text(filters: &ActiveFilterSet) -> String {
    filters
        .iter()
        .map(|f| format!("{}: {}", f.label, f.display_text()))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Truncate to `width` columns and pad with spaces to exactly `width`.
fn pad(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
