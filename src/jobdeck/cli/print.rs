use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use jobdeck::analytics::JobAnalytics;
use jobdeck::api::{CmdMessage, MessageLevel, Paging};
use jobdeck::board::BoardColumns;
use jobdeck::config::{JobdeckConfig, CONFIG_KEYS};
use jobdeck::model::{CareerDocument, JobStatus, TrackedJob};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const STATUS_WIDTH: usize = 14;
const SCORE_WIDTH: usize = 6;
const BAR_WIDTH: usize = 30;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_jobs(jobs: &[TrackedJob]) {
    for job in jobs {
        print_job_row(job, "");
    }
}

pub(crate) fn print_paging(paging: &Paging) {
    if paging.pages > 1 {
        println!(
            "{}",
            format!(
                "Page {} of {} ({} jobs)",
                paging.page, paging.pages, paging.total
            )
            .dimmed()
        );
    }
}

pub(crate) fn print_board(board: &BoardColumns) {
    for (i, column) in board.columns.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let header = format!("{} ({})", column.status.label(), column.jobs.len());
        println!("{}", status_colored(column.status, &header).bold());
        if column.jobs.is_empty() {
            println!("{}", "  -".dimmed());
        }
        for job in &column.jobs {
            print_job_row(job, "  ");
        }
    }
}

fn print_job_row(job: &TrackedJob, indent: &str) {
    let id_str = format!("{} ", job.id);
    let score_str = if job.match_score > 0 {
        format!("{:>width$}", format!("{}%", job.match_score), width = SCORE_WIDTH)
    } else {
        " ".repeat(SCORE_WIDTH)
    };
    let status_str = format!("{:>width$}", job.status.label(), width = STATUS_WIDTH);
    let time_ago = format_time_ago(job.added_at);

    let fixed_width = indent.width() + id_str.width() + SCORE_WIDTH + STATUS_WIDTH + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);

    let label = format!("{} · {}", job.title, job.company);
    let label_display = truncate_to_width(&label, available);
    let padding = available.saturating_sub(label_display.width());

    println!(
        "{}{}{}{}{}{}{}",
        indent,
        id_str.dimmed(),
        label_display,
        " ".repeat(padding),
        score_str.cyan(),
        status_colored(job.status, &status_str),
        time_ago.dimmed()
    );
}

fn status_colored(status: JobStatus, text: &str) -> ColoredString {
    match status {
        JobStatus::NewLeads => text.normal(),
        JobStatus::Reviewing => text.blue(),
        JobStatus::Applied => text.cyan(),
        JobStatus::Interviewing => text.yellow(),
        JobStatus::Offer => text.green(),
        JobStatus::Rejected => text.red(),
        JobStatus::Archived => text.dimmed(),
    }
}

pub(crate) fn print_analytics(analytics: &JobAnalytics) {
    println!("{} {}", "Total jobs:".bold(), analytics.total);
    println!(
        "{} {}   {} {} ({}%)   {} {} ({}%)",
        "Applied:".bold(),
        analytics.total_applied,
        "Interviews:".bold(),
        analytics.total_interviews,
        analytics.response_rate(),
        "Offers:".bold(),
        analytics.total_offers,
        analytics.offer_rate()
    );
    println!(
        "{} {}",
        "Average match score:".bold(),
        analytics.average_match_score
    );

    println!();
    let max = analytics.by_status.values().copied().max().unwrap_or(0);
    for status in JobStatus::ALL {
        let count = analytics.count(status);
        let bar_len = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        println!(
            "{:<14}{:>4} {}",
            status.label(),
            count,
            status_colored(status, &"█".repeat(bar_len))
        );
    }

    if !analytics.by_source.is_empty() {
        println!();
        println!("{}", "By source".bold());
        for (source, count) in &analytics.by_source {
            println!("  {:<20}{:>4}", truncate_to_width(source, 20), count);
        }
    }
}

pub(crate) fn print_documents(docs: &[CareerDocument]) {
    for doc in docs {
        let id_str = format!("{} ", doc.id);
        let type_str = format!("{:>18}", doc.doc_type.label());
        let status_str = format!("{:>11}", doc.status.as_str());
        let time_ago = format_time_ago(doc.updated_at);

        let fixed_width = id_str.width() + type_str.width() + status_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let label = if doc.company.is_empty() {
            doc.title.clone()
        } else {
            format!("{} · {}", doc.title, doc.company)
        };
        let label_display = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label_display.width());

        println!(
            "{}{}{}{}{}{}",
            id_str.dimmed(),
            label_display,
            " ".repeat(padding),
            type_str.cyan(),
            status_str,
            time_ago.dimmed()
        );
    }
}

pub(crate) fn print_full_document(doc: &CareerDocument) {
    println!("{} {}", doc.id.yellow(), doc.title.bold());
    let mut meta = vec![doc.doc_type.label().to_string(), doc.status.as_str().to_string()];
    if !doc.job_title.is_empty() {
        meta.push(doc.job_title.clone());
    }
    if !doc.company.is_empty() {
        meta.push(doc.company.clone());
    }
    if let Some(score) = doc.ats_score {
        meta.push(format!("ATS {}", score));
    }
    println!("{}", meta.join(" · ").dimmed());
    println!("--------------------------------");
    println!("{}", doc.content);
}

pub(crate) fn print_config(config: &JobdeckConfig) {
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
