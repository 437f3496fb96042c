//! # API Facade
//!
//! The single entry point for UI clients. It owns both stores, which share one
//! storage area and one change notifier, and dispatches to `commands`.
//!
//! The facade parses user-facing strings (statuses, document types, sort
//! keys) into typed values and otherwise holds no logic. It never prints.

use crate::board::{JobQuery, SortKey};
use crate::commands;
use crate::documents::DocumentStore;
use crate::error::Result;
use crate::jobs::JobTrackingStore;
use crate::model::{DocumentDraft, DocumentType, JobStatus, NewJob};
use crate::notify::{ChangeNotifier, SubscriptionId};
use crate::store::StorageBackend;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, JobUpdate, MessageLevel, Paging};

/// List filters as they arrive from a UI.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub statuses: Vec<String>,
    pub source: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub struct JobdeckApi<B: StorageBackend> {
    jobs: JobTrackingStore<Rc<B>>,
    documents: DocumentStore<Rc<B>>,
    notifier: ChangeNotifier,
    config_dir: PathBuf,
}

impl<B: StorageBackend> JobdeckApi<B> {
    pub fn new(backend: B, config_dir: PathBuf) -> Self {
        let backend = Rc::new(backend);
        let notifier = ChangeNotifier::new();
        Self {
            jobs: JobTrackingStore::with_notifier(Rc::clone(&backend), notifier.clone()),
            documents: DocumentStore::with_notifier(backend, notifier.clone()),
            notifier,
            config_dir,
        }
    }

    pub fn jobs(&self) -> &JobTrackingStore<Rc<B>> {
        &self.jobs
    }

    pub fn documents(&self) -> &DocumentStore<Rc<B>> {
        &self.documents
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Fires after any successful write to either store.
    pub fn on_change<F: Fn() + 'static>(&self, listener: F) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn add_job(&self, input: NewJob, source: &str, status: Option<&str>) -> Result<CmdResult> {
        let status = match status {
            Some(s) => s.parse()?,
            None => JobStatus::NewLeads,
        };
        commands::add::run(&self.jobs, input, source, status)
    }

    pub fn list_jobs(&self, filter: ListFilter) -> Result<CmdResult> {
        let statuses = filter
            .statuses
            .iter()
            .map(|s| s.parse::<JobStatus>())
            .collect::<Result<Vec<_>>>()?;
        let sort = match filter.sort.as_deref() {
            Some(s) => s.parse::<SortKey>()?,
            None => SortKey::default(),
        };
        let query = JobQuery {
            statuses,
            source: filter.source,
            search: filter.search,
            sort,
            page: filter.page.unwrap_or(1),
            per_page: filter.per_page.unwrap_or(0),
        };
        commands::list::run(&self.jobs, &query)
    }

    pub fn board(&self) -> Result<CmdResult> {
        commands::board::run(&self.jobs)
    }

    pub fn move_job(&self, id: &str, status: &str) -> Result<CmdResult> {
        let target: JobStatus = status.parse()?;
        commands::move_job::run(&self.jobs, id, target)
    }

    pub fn update_job(&self, id: &str, update: JobUpdate) -> Result<CmdResult> {
        commands::update::run(&self.jobs, id, update)
    }

    pub fn delete_jobs<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::delete::run(&self.jobs, ids)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.jobs)
    }

    pub fn import_jobs(&self, path: &Path, source: &str) -> Result<CmdResult> {
        commands::import::run(&self.jobs, path, source)
    }

    pub fn save_document(&self, draft: DocumentDraft) -> Result<CmdResult> {
        commands::documents::save(&self.documents, draft)
    }

    pub fn list_documents(&self, doc_type: Option<&str>, search: Option<&str>) -> Result<CmdResult> {
        let doc_type = doc_type.map(|t| t.parse::<DocumentType>()).transpose()?;
        commands::documents::list(&self.documents, doc_type, search)
    }

    pub fn show_document(&self, id: &str) -> Result<CmdResult> {
        commands::documents::show(&self.documents, id)
    }

    pub fn delete_documents<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::documents::delete(&self.documents, ids)
    }

    pub fn export_document(&self, id: &str, dir: &Path) -> Result<CmdResult> {
        commands::documents::export(&self.documents, id, dir)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::cell::Cell;

    fn api() -> JobdeckApi<MemBackend> {
        JobdeckApi::new(MemBackend::new(), std::env::temp_dir().join("jobdeck-api-tests"))
    }

    #[test]
    fn both_stores_share_one_signal() {
        let api = api();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        api.on_change(move || h.set(h.get() + 1));

        api.add_job(NewJob::new("Engineer", "Acme"), "manual", None).unwrap();
        api.save_document(DocumentDraft::new("Resume", "...")).unwrap();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn add_job_parses_status() {
        let api = api();
        let result = api
            .add_job(NewJob::new("Engineer", "Acme"), "manual", Some("applied"))
            .unwrap();
        assert_eq!(result.jobs[0].status, JobStatus::Applied);
        assert!(api.add_job(NewJob::default(), "manual", Some("hired")).is_err());
    }

    #[test]
    fn list_jobs_parses_filter() {
        let api = api();
        api.add_job(NewJob::new("Engineer", "Acme"), "manual", Some("offer")).unwrap();
        api.add_job(NewJob::new("Designer", "Acme"), "manual", None).unwrap();

        let filter = ListFilter {
            statuses: vec!["offer".into()],
            sort: Some("title".into()),
            ..Default::default()
        };
        let result = api.list_jobs(filter).unwrap();
        assert_eq!(result.jobs.len(), 1);
        assert_eq!(result.jobs[0].title, "Engineer");

        let bad = ListFilter {
            sort: Some("vibes".into()),
            ..Default::default()
        };
        assert!(api.list_jobs(bad).is_err());
    }

    #[test]
    fn move_job_parses_target() {
        let api = api();
        let job = api
            .add_job(NewJob::new("Engineer", "Acme"), "manual", None)
            .unwrap()
            .jobs
            .remove(0);
        api.move_job(&job.id, "applied").unwrap();
        assert_eq!(api.jobs().get_by_id(&job.id).unwrap().status, JobStatus::Applied);
    }

    #[test]
    fn list_documents_parses_type() {
        let api = api();
        api.save_document(DocumentDraft::new("Resume", "...")).unwrap();
        assert_eq!(api.list_documents(Some("resume"), None).unwrap().documents.len(), 1);
        assert!(api.list_documents(Some("poem"), None).is_err());
    }
}
