//! # Document Store
//!
//! Resumes, cover letters and tailoring output in the
//! `work_history_documents` slot. Same contract as the job store: full
//! read-modify-write per call, empty on unreadable data, booleans on write.
//!
//! [`DocumentStore::save`] is both create and update. A draft whose `id`
//! matches a stored document is merged over it; anything else gets a fresh id.

use crate::error::{JobdeckError, Result};
use crate::model::{CareerDocument, DocumentDraft, DocumentType};
use crate::notify::{ChangeNotifier, SubscriptionId};
use crate::store::collection::Collection;
use crate::store::{StorageBackend, DOCUMENTS_KEY};
use chrono::Utc;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const DOCUMENTS: Collection<CareerDocument> = Collection::new(DOCUMENTS_KEY);

pub struct DocumentStore<B: StorageBackend> {
    backend: B,
    notifier: ChangeNotifier,
}

impl<B: StorageBackend> DocumentStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_notifier(backend, ChangeNotifier::new())
    }

    pub fn with_notifier(backend: B, notifier: ChangeNotifier) -> Self {
        Self { backend, notifier }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn on_change<F: Fn() + 'static>(&self, listener: F) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn off_change(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn list_all(&self) -> Vec<CareerDocument> {
        DOCUMENTS.load(&self.backend)
    }

    pub fn get_by_id(&self, id: &str) -> Option<CareerDocument> {
        self.list_all().into_iter().find(|d| d.id == id)
    }

    /// Creates or updates, dispatching on whether `draft.id` names a stored
    /// document. The returned record is what was (or would have been) written;
    /// a failed write is logged and not retried.
    pub fn save(&self, draft: DocumentDraft) -> CareerDocument {
        let now = Utc::now();
        let mut docs = self.list_all();

        let existing = draft
            .id
            .as_deref()
            .and_then(|id| docs.iter().position(|d| d.id == id));

        let saved = match existing {
            Some(index) => {
                let merged = draft.merge_into(&docs[index], now);
                docs[index] = merged.clone();
                debug!(id = %merged.id, "document updated");
                merged
            }
            None => {
                let created = draft.into_document(now);
                docs.push(created.clone());
                debug!(id = %created.id, "document created");
                created
            }
        };

        if !self.write(&docs) {
            warn!(id = %saved.id, "document save was not persisted");
        }
        saved
    }

    /// Idempotent: an unknown id still writes and returns true.
    pub fn delete(&self, id: &str) -> bool {
        let docs: Vec<CareerDocument> =
            self.list_all().into_iter().filter(|d| d.id != id).collect();
        self.write(&docs)
    }

    /// Removes every listed id in a single write.
    pub fn bulk_delete<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        let targets: HashSet<&str> = ids.iter().map(|s| s.as_ref()).collect();
        let docs: Vec<CareerDocument> = self
            .list_all()
            .into_iter()
            .filter(|d| !targets.contains(d.id.as_str()))
            .collect();
        self.write(&docs)
    }

    pub fn list_by_type(&self, doc_type: DocumentType) -> Vec<CareerDocument> {
        self.list_all()
            .into_iter()
            .filter(|d| d.doc_type == doc_type)
            .collect()
    }

    /// Case-insensitive match on title, company and job title.
    pub fn search(&self, term: &str) -> Vec<CareerDocument> {
        let term = term.trim().to_lowercase();
        self.list_all()
            .into_iter()
            .filter(|d| {
                term.is_empty()
                    || [&d.title, &d.company, &d.job_title]
                        .iter()
                        .any(|f| f.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Writes the document's content to `<dir>/<title>-<id suffix>.txt`.
    ///
    /// One-way: nothing reads these files back.
    pub fn export_text(&self, id: &str, dir: &Path) -> Result<PathBuf> {
        let doc = self
            .get_by_id(id)
            .ok_or_else(|| JobdeckError::NotFound(format!("document {}", id)))?;

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(JobdeckError::Io)?;
        }
        let path = dir.join(export_filename(&doc));
        fs::write(&path, &doc.content).map_err(JobdeckError::Io)?;
        Ok(path)
    }

    fn write(&self, docs: &[CareerDocument]) -> bool {
        if !DOCUMENTS.persist(&self.backend, docs) {
            return false;
        }
        self.notifier.notify();
        true
    }
}

/// Most recently updated first.
pub fn sort_recent(docs: &mut [CareerDocument]) {
    docs.sort_by_key(|d| Reverse(d.updated_at));
}

fn export_filename(doc: &CareerDocument) -> String {
    let id: Vec<char> = doc.id.chars().collect();
    let suffix: String = id[id.len().saturating_sub(6)..].iter().collect();
    format!(
        "{}-{}.txt",
        sanitize_filename(&doc.title),
        sanitize_filename(&suffix)
    )
}

fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.chars().take(60).collect()
    }
}
