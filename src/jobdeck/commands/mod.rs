//! # Command Layer
//!
//! One module per user action. Commands call the stores, then translate their
//! booleans and outcomes into a [`CmdResult`]: the records to show plus
//! [`CmdMessage`]s for the user. A store reporting `false` becomes an error
//! message here, not an `Err`; `Err` is kept for bad input (unknown ids,
//! unreadable import files) and file I/O the user asked for.

use crate::analytics::JobAnalytics;
use crate::board::BoardColumns;
use crate::config::JobdeckConfig;
use crate::model::{CareerDocument, TrackedJob};
use chrono::NaiveDate;
use std::path::PathBuf;

pub mod add;
pub mod board;
pub mod config;
pub mod delete;
pub mod documents;
pub mod helpers;
pub mod import;
pub mod list;
pub mod move_job;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub jobs: Vec<TrackedJob>,
    pub documents: Vec<CareerDocument>,
    pub board: Option<BoardColumns>,
    pub analytics: Option<JobAnalytics>,
    pub paging: Option<Paging>,
    pub paths: Vec<PathBuf>,
    pub config: Option<JobdeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_jobs(mut self, jobs: Vec<TrackedJob>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_documents(mut self, documents: Vec<CareerDocument>) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_config(mut self, config: JobdeckConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Field edits for an existing job; `None` leaves the field alone. The date
/// fields take `Some(None)` to clear a recorded date.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub description: Option<String>,
    pub why_match: Option<String>,
    pub match_score: Option<u8>,
    pub posted_date: Option<String>,
    pub application_date: Option<Option<NaiveDate>>,
    pub interview_date: Option<Option<NaiveDate>>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.salary.is_none()
            && self.source.is_none()
            && self.url.is_none()
            && self.notes.is_none()
            && self.description.is_none()
            && self.why_match.is_none()
            && self.match_score.is_none()
            && self.posted_date.is_none()
            && self.application_date.is_none()
            && self.interview_date.is_none()
    }

    pub fn apply(self, job: &mut TrackedJob) {
        if let Some(v) = self.title {
            job.title = v;
        }
        if let Some(v) = self.company {
            job.company = v;
        }
        if let Some(v) = self.location {
            job.location = v;
        }
        if let Some(v) = self.salary {
            job.salary = v;
        }
        if let Some(v) = self.source {
            job.source = v;
        }
        if let Some(v) = self.url {
            job.url = v;
        }
        if let Some(v) = self.notes {
            job.notes = v;
        }
        if let Some(v) = self.description {
            job.description = v;
        }
        if let Some(v) = self.why_match {
            job.why_match = v;
        }
        if let Some(v) = self.match_score {
            job.match_score = v.min(100);
        }
        if let Some(v) = self.posted_date {
            job.posted_date = v;
        }
        if let Some(v) = self.application_date {
            job.application_date = v;
        }
        if let Some(v) = self.interview_date {
            job.interview_date = v;
        }
    }
}
