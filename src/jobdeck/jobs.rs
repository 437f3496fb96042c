//! # Job Tracking Store
//!
//! A thin synchronous facade over the `tracked_jobs` slot. Every method is a
//! full read-modify-write of the collection: load everything, compute the new
//! array, write it back in one `set_item`, then notify listeners.
//!
//! The store never returns errors. Unreadable data reads as empty, failed
//! writes come back as `false` (or a failed [`AddOutcome`]) and are logged.
//! A duplicate submission is the only business-rule rejection.

use crate::analytics::JobAnalytics;
use crate::model::{JobStatus, NewJob, TrackedJob};
use crate::notify::{ChangeNotifier, SubscriptionId};
use crate::store::collection::Collection;
use crate::store::{StorageBackend, TRACKED_JOBS_KEY, TRACKED_JOBS_UPDATED_KEY};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info, warn};

const JOBS: Collection<TrackedJob> = Collection::new(TRACKED_JOBS_KEY);

/// Result of [`JobTrackingStore::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub success: bool,
    pub message: String,
    pub job: Option<TrackedJob>,
    pub duplicate: bool,
}

impl AddOutcome {
    fn added(job: TrackedJob) -> Self {
        Self {
            success: true,
            message: format!("Added {} at {}", job.title, job.company),
            job: Some(job),
            duplicate: false,
        }
    }

    fn duplicate(existing: &TrackedJob) -> Self {
        Self {
            success: false,
            message: format!(
                "This job is already being tracked: {} at {}",
                existing.title, existing.company
            ),
            job: None,
            duplicate: true,
        }
    }

    fn write_failed() -> Self {
        Self {
            success: false,
            message: "Failed to save job".to_string(),
            job: None,
            duplicate: false,
        }
    }
}

/// Result of [`JobTrackingStore::import`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub added: Vec<TrackedJob>,
    /// Inputs rejected as duplicates, by their resolved title and company.
    pub duplicates: Vec<(String, String)>,
    pub saved: bool,
}

pub struct JobTrackingStore<B: StorageBackend> {
    backend: B,
    notifier: ChangeNotifier,
}

impl<B: StorageBackend> JobTrackingStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_notifier(backend, ChangeNotifier::new())
    }

    pub fn with_notifier(backend: B, notifier: ChangeNotifier) -> Self {
        Self { backend, notifier }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn on_change<F: Fn() + 'static>(&self, listener: F) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn off_change(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Snapshot of every tracked job; empty if the slot is missing or corrupt.
    pub fn list_all(&self) -> Vec<TrackedJob> {
        JOBS.load(&self.backend)
    }

    pub fn get_by_id(&self, id: &str) -> Option<TrackedJob> {
        self.list_all().into_iter().find(|j| j.id == id)
    }

    /// Adds a job unless it duplicates one already tracked (same url ignoring
    /// case, or same title and company). Duplicates are rejected, not merged.
    pub fn add(&self, input: NewJob, source: &str, initial_status: JobStatus) -> AddOutcome {
        let mut jobs = self.list_all();
        let candidate = input.materialize(source, initial_status, Utc::now());

        if let Some(existing) = jobs.iter().find(|j| j.is_duplicate_of(&candidate)) {
            info!(title = %candidate.title, company = %candidate.company, "duplicate job rejected");
            return AddOutcome::duplicate(existing);
        }

        jobs.push(candidate.clone());
        if self.write(&jobs) {
            debug!(id = %candidate.id, "job added");
            AddOutcome::added(candidate)
        } else {
            AddOutcome::write_failed()
        }
    }

    /// Replaces the stored record with the same id. `false` if the id is
    /// unknown (nothing written) or the write failed.
    pub fn update(&self, job: &TrackedJob) -> bool {
        let mut jobs = self.list_all();
        let Some(slot) = jobs.iter_mut().find(|j| j.id == job.id) else {
            debug!(id = %job.id, "update skipped, job not found");
            return false;
        };
        *slot = job.clone();
        self.write(&jobs)
    }

    /// Removes the job if present. Deleting an unknown id still writes and
    /// still succeeds.
    pub fn delete(&self, id: &str) -> bool {
        let jobs: Vec<TrackedJob> = self.list_all().into_iter().filter(|j| j.id != id).collect();
        self.write(&jobs)
    }

    /// Removes every listed id in a single write.
    pub fn bulk_delete<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        let targets: HashSet<&str> = ids.iter().map(|s| s.as_ref()).collect();
        let jobs: Vec<TrackedJob> = self
            .list_all()
            .into_iter()
            .filter(|j| !targets.contains(j.id.as_str()))
            .collect();
        self.write(&jobs)
    }

    /// Writes `jobs` as the whole collection, as a view does after editing
    /// its local copy. Whatever was stored before is overwritten.
    pub fn replace_all(&self, jobs: &[TrackedJob]) -> bool {
        self.write(jobs)
    }

    /// Adds many jobs with one write. Each input is checked against the
    /// stored jobs and against the inputs accepted before it.
    pub fn import(&self, inputs: Vec<NewJob>, source: &str) -> ImportReport {
        let now = Utc::now();
        let mut jobs = self.list_all();
        let mut report = ImportReport::default();

        for input in inputs {
            let candidate = input.materialize(source, JobStatus::NewLeads, now);
            if jobs.iter().any(|j| j.is_duplicate_of(&candidate)) {
                report
                    .duplicates
                    .push((candidate.title.clone(), candidate.company.clone()));
                continue;
            }
            jobs.push(candidate.clone());
            report.added.push(candidate);
        }

        report.saved = report.added.is_empty() || self.write(&jobs);
        if !report.saved {
            report.added.clear();
        }
        info!(
            added = report.added.len(),
            duplicates = report.duplicates.len(),
            "import finished"
        );
        report
    }

    pub fn analytics(&self) -> JobAnalytics {
        JobAnalytics::from_jobs(&self.list_all())
    }

    /// Time of the last successful write; informational only.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        let raw = self.backend.get_item(TRACKED_JOBS_UPDATED_KEY).ok()??;
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    fn write(&self, jobs: &[TrackedJob]) -> bool {
        if !JOBS.persist(&self.backend, jobs) {
            return false;
        }
        let stamp = Utc::now().to_rfc3339();
        if let Err(e) = self.backend.set_item(TRACKED_JOBS_UPDATED_KEY, &stamp) {
            warn!(error = %e, "could not record last update time");
        }
        self.notifier.notify();
        true
    }
}
