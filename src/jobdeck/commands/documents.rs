use crate::commands::{CmdMessage, CmdResult};
use crate::documents::{sort_recent, DocumentStore};
use crate::error::Result;
use crate::model::{DocumentDraft, DocumentType};
use crate::store::StorageBackend;
use std::path::Path;

use super::helpers::{resolve_document, resolve_documents};

/// Creates or updates. A draft id given by the user is resolved first, so a
/// prefix of an existing id updates that document.
pub fn save<B: StorageBackend>(store: &DocumentStore<B>, mut draft: DocumentDraft) -> Result<CmdResult> {
    let updating = match draft.id.take() {
        Some(id) => {
            let existing = resolve_document(store, &id)?;
            draft.id = Some(existing.id);
            true
        }
        None => false,
    };

    let doc = store.save(draft);
    let mut result = CmdResult::default();
    let verb = if updating { "updated" } else { "created" };
    result.add_message(CmdMessage::success(format!(
        "Document {} ({}): {}",
        verb,
        doc.doc_type.label(),
        doc.title
    )));
    Ok(result.with_documents(vec![doc]))
}

pub fn list<B: StorageBackend>(
    store: &DocumentStore<B>,
    doc_type: Option<DocumentType>,
    search: Option<&str>,
) -> Result<CmdResult> {
    let mut docs = match search {
        Some(term) => store.search(term),
        None => store.list_all(),
    };
    if let Some(doc_type) = doc_type {
        docs.retain(|d| d.doc_type == doc_type);
    }
    sort_recent(&mut docs);

    let mut result = CmdResult::default();
    if docs.is_empty() {
        result.add_message(CmdMessage::info("No documents found."));
    }
    Ok(result.with_documents(docs))
}

pub fn show<B: StorageBackend>(store: &DocumentStore<B>, id: &str) -> Result<CmdResult> {
    let doc = resolve_document(store, id)?;
    Ok(CmdResult::default().with_documents(vec![doc]))
}

pub fn delete<B: StorageBackend, S: AsRef<str>>(
    store: &DocumentStore<B>,
    ids: &[S],
) -> Result<CmdResult> {
    let docs = resolve_documents(store, ids)?;
    let mut result = CmdResult::default();

    let targets: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    if !store.bulk_delete(&targets) {
        result.add_message(CmdMessage::error("Failed to delete documents"));
        return Ok(result);
    }
    for doc in &docs {
        result.add_message(CmdMessage::success(format!("Document deleted: {}", doc.title)));
    }
    Ok(result.with_documents(docs))
}

pub fn export<B: StorageBackend>(
    store: &DocumentStore<B>,
    id: &str,
    dir: &Path,
) -> Result<CmdResult> {
    let doc = resolve_document(store, id)?;
    let path = store.export_text(&doc.id, dir)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Exported to {}", path.display())));
    result.paths.push(path);
    Ok(result)
}
