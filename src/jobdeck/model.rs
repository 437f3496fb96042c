use crate::error::JobdeckError;
use chrono::{DateTime, Local, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const UNTITLED_POSITION: &str = "Untitled Position";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNTITLED_DOCUMENT: &str = "Untitled Document";

pub const JOB_ID_PREFIX: &str = "job";
pub const DOCUMENT_ID_PREFIX: &str = "doc";

const ID_SUFFIX_LEN: usize = 9;
const MAX_SCORE: f64 = 100.0;

/// Pipeline stage of a tracked job. Declaration order is the board's column order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    #[default]
    NewLeads,
    Reviewing,
    Applied,
    Interviewing,
    Offer,
    Rejected,
    Archived,
}

impl JobStatus {
    pub const ALL: [JobStatus; 7] = [
        JobStatus::NewLeads,
        JobStatus::Reviewing,
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
        JobStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::NewLeads => "new-leads",
            JobStatus::Reviewing => "reviewing",
            JobStatus::Applied => "applied",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
            JobStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::NewLeads => "New Leads",
            JobStatus::Reviewing => "Reviewing",
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
            JobStatus::Archived => "Archived",
        }
    }

    /// Statuses that imply an application went out, regardless of dates.
    pub fn counts_as_applied(&self) -> bool {
        matches!(
            self,
            JobStatus::Applied | JobStatus::Interviewing | JobStatus::Offer
        )
    }

    pub fn counts_as_interview(&self) -> bool {
        matches!(self, JobStatus::Interviewing | JobStatus::Offer)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = JobdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "new-leads" | "new" | "lead" | "leads" => Ok(JobStatus::NewLeads),
            "reviewing" | "review" => Ok(JobStatus::Reviewing),
            "applied" => Ok(JobStatus::Applied),
            "interviewing" | "interview" => Ok(JobStatus::Interviewing),
            "offer" => Ok(JobStatus::Offer),
            "rejected" => Ok(JobStatus::Rejected),
            "archived" => Ok(JobStatus::Archived),
            _ => Err(JobdeckError::Api(format!("Unknown job status: {}", s))),
        }
    }
}

/// A job application as persisted in the `tracked_jobs` slot.
///
/// Field names follow the stored JSON layout (camelCase). Missing fields
/// deserialize to their empty values so older records still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedJob {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub salary: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub why_match: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub match_score: u8,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub status: JobStatus,
    #[serde(default, deserialize_with = "lenient_string")]
    pub posted_date: String,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub interview_date: Option<NaiveDate>,
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    pub added_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub added_from: String,
}

impl TrackedJob {
    /// Lowercased, trimmed url; `None` when the job has no url.
    pub fn normalized_url(&self) -> Option<String> {
        let url = self.url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url.to_lowercase())
        }
    }

    /// Same posting: equal non-empty urls ignoring case, or identical title and company.
    pub fn is_duplicate_of(&self, other: &TrackedJob) -> bool {
        let same_url = match (self.normalized_url(), other.normalized_url()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        same_url || (self.title == other.title && self.company == other.company)
    }

    pub fn has_applied(&self) -> bool {
        self.status.counts_as_applied() || self.application_date.is_some()
    }

    pub fn has_interviewed(&self) -> bool {
        self.status.counts_as_interview() || self.interview_date.is_some()
    }
}

/// Loosely-filled input for a new job. Every field is optional; defaults are
/// applied by [`NewJob::materialize`] and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub description: Option<String>,
    pub why_match: Option<String>,
    #[serde(deserialize_with = "lenient_score_opt")]
    pub match_score: Option<u8>,
    pub posted_date: Option<String>,
    #[serde(deserialize_with = "lenient_date")]
    pub application_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub interview_date: Option<NaiveDate>,
}

impl NewJob {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            company: Some(company.into()),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_match_score(mut self, score: u8) -> Self {
        self.match_score = Some(score);
        self
    }

    /// Builds the full record with a fresh id.
    ///
    /// `added_from` is the provenance tag; it doubles as the job `source`
    /// when the input names none.
    pub fn materialize(
        self,
        added_from: &str,
        status: JobStatus,
        now: DateTime<Utc>,
    ) -> TrackedJob {
        let application_date = match (self.application_date, status) {
            (None, JobStatus::Applied) => Some(local_date(now)),
            (date, _) => date,
        };

        TrackedJob {
            id: generate_id(JOB_ID_PREFIX, now),
            title: or_placeholder(self.title, UNTITLED_POSITION),
            company: or_placeholder(self.company, UNKNOWN_COMPANY),
            location: self.location.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            source: or_placeholder(self.source, added_from),
            url: self.url.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            why_match: self.why_match.unwrap_or_default(),
            match_score: self.match_score.map(|s| s.min(100)).unwrap_or(0),
            status,
            posted_date: self.posted_date.unwrap_or_default(),
            application_date,
            interview_date: self.interview_date,
            added_at: now,
            added_from: added_from.to_string(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    #[default]
    Resume,
    TailoredResume,
    CoverLetter,
    ApplicationTailor,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Resume,
        DocumentType::TailoredResume,
        DocumentType::CoverLetter,
        DocumentType::ApplicationTailor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::TailoredResume => "tailored-resume",
            DocumentType::CoverLetter => "cover-letter",
            DocumentType::ApplicationTailor => "application-tailor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Resume => "Resume",
            DocumentType::TailoredResume => "Tailored Resume",
            DocumentType::CoverLetter => "Cover Letter",
            DocumentType::ApplicationTailor => "Application Tailor",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = JobdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| JobdeckError::Api(format!("Unknown document type: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Completed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = JobdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(DocumentStatus::Draft),
            "completed" | "complete" | "done" => Ok(DocumentStatus::Completed),
            _ => Err(JobdeckError::Api(format!("Unknown document status: {}", s))),
        }
    }
}

/// A resume, cover letter or tailoring result in the `work_history_documents` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDocument {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_enum")]
    pub doc_type: DocumentType,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub status: DocumentStatus,
    #[serde(default, deserialize_with = "lenient_score_opt")]
    pub ats_score: Option<u8>,
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now", deserialize_with = "lenient_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Input to `DocumentStore::save`. With an `id` matching a stored document it
/// is merged over that document; otherwise it becomes a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub doc_type: Option<DocumentType>,
    pub content: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub status: Option<DocumentStatus>,
    pub ats_score: Option<u8>,
}

impl DocumentDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn into_document(self, now: DateTime<Utc>) -> CareerDocument {
        CareerDocument {
            id: generate_id(DOCUMENT_ID_PREFIX, now),
            title: or_placeholder(self.title, UNTITLED_DOCUMENT),
            doc_type: self.doc_type.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            job_title: self.job_title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            ats_score: self.ats_score.map(|s| s.min(100)),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overlays the fields this draft sets onto `existing`. `id` and
    /// `created_at` never change.
    pub fn merge_into(self, existing: &CareerDocument, now: DateTime<Utc>) -> CareerDocument {
        let mut merged = existing.clone();
        if let Some(title) = self.title {
            merged.title = title;
        }
        if let Some(doc_type) = self.doc_type {
            merged.doc_type = doc_type;
        }
        if let Some(content) = self.content {
            merged.content = content;
        }
        if let Some(job_title) = self.job_title {
            merged.job_title = job_title;
        }
        if let Some(company) = self.company {
            merged.company = company;
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(score) = self.ats_score {
            merged.ats_score = Some(score.min(100));
        }
        merged.updated_at = now;
        merged
    }
}

/// `<prefix>_<unix millis>_<random base36>`; the suffix keeps ids created in
/// the same millisecond apart.
pub fn generate_id(prefix: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        now.timestamp_millis(),
        random_suffix(ID_SUFFIX_LEN)
    )
}

fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| std::char::from_digit(rng.gen_range(0..36), 36).unwrap_or('0'))
        .collect()
}

/// The calendar date the user sees for `now`.
pub fn local_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&Local).date_naive()
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder.to_string(),
    }
}

// Stored records come from a loosely typed store: any field may be null, a
// number where a string is expected, or a value this version does not know.
// Each lenient reader maps those to the field's empty value instead of
// failing the whole collection.

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Stored dates may be "", null, a plain date or a timestamp.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => parse_date(&s),
        _ => None,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    };
    Ok(parsed.unwrap_or_else(Utc::now))
}

fn lenient_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_score_opt(deserializer)?.unwrap_or(0))
}

/// Numbers and numeric strings, rounded and clamped to 0-100.
fn lenient_score_opt<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    };
    Ok(raw
        .filter(|s| s.is_finite())
        .map(|s| s.round().clamp(0.0, MAX_SCORE) as u8))
}

/// Unknown or missing values fall back to the type's default.
fn lenient_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse().unwrap_or_default(),
        _ => T::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn materialize_applies_placeholders() {
        let job = NewJob::default().materialize("manual", JobStatus::NewLeads, fixed_now());
        assert_eq!(job.title, UNTITLED_POSITION);
        assert_eq!(job.company, UNKNOWN_COMPANY);
        assert_eq!(job.source, "manual");
        assert_eq!(job.added_from, "manual");
        assert_eq!(job.match_score, 0);
        assert_eq!(job.url, "");
        assert_eq!(job.application_date, None);
        assert_eq!(job.added_at, fixed_now());
        assert!(job.id.starts_with("job_1741953600000_"));
    }

    #[test]
    fn materialize_keeps_explicit_source() {
        let input = NewJob {
            source: Some("LinkedIn".into()),
            ..NewJob::new("Engineer", "Acme")
        };
        let job = input.materialize("import", JobStatus::Reviewing, fixed_now());
        assert_eq!(job.source, "LinkedIn");
        assert_eq!(job.added_from, "import");
    }

    #[test]
    fn materialize_blank_title_gets_placeholder() {
        let job = NewJob::new("   ", "Acme").materialize("manual", JobStatus::NewLeads, fixed_now());
        assert_eq!(job.title, UNTITLED_POSITION);
        assert_eq!(job.company, "Acme");
    }

    #[test]
    fn materialize_as_applied_sets_application_date() {
        let job = NewJob::new("Engineer", "Acme").materialize(
            "manual",
            JobStatus::Applied,
            fixed_now(),
        );
        assert_eq!(job.application_date, Some(local_date(fixed_now())));
    }

    #[test]
    fn materialize_clamps_match_score() {
        let job = NewJob::new("Engineer", "Acme")
            .with_match_score(250)
            .materialize("manual", JobStatus::NewLeads, fixed_now());
        assert_eq!(job.match_score, 100);
    }

    #[test]
    fn generated_ids_differ_within_same_millisecond() {
        let now = fixed_now();
        let a = generate_id(JOB_ID_PREFIX, now);
        let b = generate_id(JOB_ID_PREFIX, now);
        assert_ne!(a, b);
        assert_eq!(a.len(), "job_1741953600000_".len() + ID_SUFFIX_LEN);
    }

    #[test]
    fn duplicate_by_url_ignores_case() {
        let now = fixed_now();
        let a = NewJob::new("Engineer", "Acme")
            .with_url("https://Jobs.example.com/1")
            .materialize("manual", JobStatus::NewLeads, now);
        let b = NewJob::new("Other", "Elsewhere")
            .with_url("https://jobs.example.com/1 ")
            .materialize("manual", JobStatus::NewLeads, now);
        assert!(a.is_duplicate_of(&b));
    }

    #[test]
    fn empty_urls_never_match() {
        let now = fixed_now();
        let a = NewJob::new("Engineer", "Acme").materialize("manual", JobStatus::NewLeads, now);
        let b = NewJob::new("Designer", "Acme").materialize("manual", JobStatus::NewLeads, now);
        assert!(!a.is_duplicate_of(&b));
    }

    #[test]
    fn status_parses_aliases() {
        assert_eq!("new-leads".parse::<JobStatus>().unwrap(), JobStatus::NewLeads);
        assert_eq!("New Leads".parse::<JobStatus>().unwrap(), JobStatus::NewLeads);
        assert_eq!("interview".parse::<JobStatus>().unwrap(), JobStatus::Interviewing);
        assert!("hired".parse::<JobStatus>().is_err());
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&JobStatus::NewLeads).unwrap();
        assert_eq!(json, "\"new-leads\"");
        let doc = serde_json::to_string(&DocumentType::TailoredResume).unwrap();
        assert_eq!(doc, "\"tailored-resume\"");
    }

    #[test]
    fn tracked_job_reads_loose_stored_record() {
        let raw = r#"{
            "id": "1700000000000abc",
            "title": "Engineer",
            "company": "Acme",
            "matchScore": 87.6,
            "status": "interviewing",
            "applicationDate": "",
            "interviewDate": "2024-05-02T09:30:00.000Z",
            "addedAt": "2024-04-01T10:00:00Z"
        }"#;
        let job: TrackedJob = serde_json::from_str(raw).unwrap();
        assert_eq!(job.match_score, 88);
        assert_eq!(job.status, JobStatus::Interviewing);
        assert_eq!(job.application_date, None);
        assert_eq!(job.interview_date, NaiveDate::from_ymd_opt(2024, 5, 2));
        assert_eq!(job.location, "");
    }

    #[test]
    fn tracked_job_tolerates_nulls_and_foreign_values() {
        let raw = r#"{
            "id": "job_1_abc",
            "title": "Engineer",
            "company": null,
            "salary": 120000,
            "notes": null,
            "matchScore": "85",
            "status": "saved",
            "applicationDate": null,
            "addedAt": 1712000000000
        }"#;
        let job: TrackedJob = serde_json::from_str(raw).unwrap();
        assert_eq!(job.company, "");
        assert_eq!(job.salary, "120000");
        assert_eq!(job.notes, "");
        assert_eq!(job.match_score, 85);
        assert_eq!(job.status, JobStatus::NewLeads);
        assert_eq!(job.application_date, None);
        assert_eq!(job.added_at.timestamp_millis(), 1_712_000_000_000);
    }

    #[test]
    fn document_tolerates_nulls_and_foreign_values() {
        let raw = r#"{
            "id": "doc_1_abc",
            "title": "CV",
            "type": "portfolio",
            "content": null,
            "status": null,
            "atsScore": "72%"
        }"#;
        let doc: CareerDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.doc_type, DocumentType::Resume);
        assert_eq!(doc.content, "");
        assert_eq!(doc.status, DocumentStatus::Draft);
        assert_eq!(doc.ats_score, Some(72));
    }

    #[test]
    fn tracked_job_writes_camel_case() {
        let job = NewJob::new("Engineer", "Acme").materialize(
            "manual",
            JobStatus::Applied,
            fixed_now(),
        );
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("matchScore").is_some());
        assert!(value.get("addedFrom").is_some());
        assert!(value.get("applicationDate").is_some());
        assert!(value.get("interviewDate").is_none());
    }

    #[test]
    fn draft_into_document_sets_equal_timestamps() {
        let doc = DocumentDraft::new("X", "Y").into_document(fixed_now());
        assert!(doc.id.starts_with("doc_"));
        assert_eq!(doc.created_at, doc.updated_at);
        assert_eq!(doc.doc_type, DocumentType::Resume);
        assert_eq!(doc.status, DocumentStatus::Draft);
        assert_eq!(doc.ats_score, None);
    }

    #[test]
    fn draft_merge_touches_only_given_fields() {
        let created = DocumentDraft::new("X", "Y").into_document(fixed_now());
        let later = fixed_now() + chrono::Duration::minutes(5);
        let draft = DocumentDraft {
            content: Some("Z".into()),
            ..DocumentDraft::for_id(created.id.clone())
        };
        let merged = draft.merge_into(&created, later);
        assert_eq!(merged.id, created.id);
        assert_eq!(merged.title, "X");
        assert_eq!(merged.content, "Z");
        assert_eq!(merged.created_at, created.created_at);
        assert_eq!(merged.updated_at, later);
    }

    #[test]
    fn document_type_field_is_named_type() {
        let doc = DocumentDraft {
            doc_type: Some(DocumentType::CoverLetter),
            ..DocumentDraft::new("Letter", "Dear team")
        }
        .into_document(fixed_now());
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["type"], "cover-letter");
        assert!(value["atsScore"].is_null());
    }
}
